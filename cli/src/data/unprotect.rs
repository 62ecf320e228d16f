use clap::Args;
use loader::{FileSource, MemorySource, Source};
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::output::{OutputFormat, render};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the envelope file. If not specified, reads from stdin
    file: Option<String>,

    /// Plain JSON file to load when the envelope cannot be opened
    #[arg(long)]
    fallback: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let protected: Box<dyn Source> = match config.file.as_deref() {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(MemorySource::new("stdin", read_input(None)?)),
    };

    let value: Value = match config.fallback.as_deref() {
        Some(path) => {
            let loaded = loader::load_with_fallback::<Value>(
                protected.as_ref(),
                &FileSource::new(path),
            )?;
            info!(origin = ?loaded.origin, "loaded data");
            loaded.value
        }
        None => loader::load_protected::<Value>(protected.as_ref())?,
    };

    let rendered = render(&value, config.output)?;
    match config.output {
        OutputFormat::Yaml => print!("{}", rendered),
        _ => println!("{}", rendered),
    }

    Ok(())
}
