use std::path::Path;

use clap::Args;
use loader::FileSource;
use loader::publish::UNPROTECTED_BLOB;

use crate::admin::Credentials;
use crate::error::Result;
use crate::output::{OutputFormat, render};

#[derive(Args)]
pub(crate) struct Config {
    /// Directory the blobs were published to
    #[arg(short, long)]
    dir: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    #[command(flatten)]
    credentials: Credentials,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let source = FileSource::new(Path::new(&config.dir).join(UNPROTECTED_BLOB));
    let authorization = config.credentials.authorization();
    let dataset = loader::load_admin(
        &config.credentials.gate(),
        Some(authorization.as_str()),
        &source,
    )?;

    let rendered = render(&dataset, config.output)?;
    match config.output {
        OutputFormat::Yaml => print!("{}", rendered),
        _ => println!("{}", rendered),
    }

    Ok(())
}
