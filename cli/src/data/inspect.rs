use clap::Args;

use crate::error::Result;
use crate::output::{OutputFormat, render};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the envelope file. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Exit with an error when the checksum does not match
    #[arg(long)]
    strict: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;
    let report = envelope::inspect(&text)?;

    match config.output {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", render(&report, config.output)?),
        OutputFormat::Yaml => print!("{}", render(&report, config.output)?),
    }

    if config.strict && !report.intact {
        return Err("checksum mismatch".into());
    }

    Ok(())
}
