use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::utils::{read_input, write_output};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the plain JSON file. If not specified, reads from stdin
    file: Option<String>,

    /// Write the envelope to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let raw = read_input(config.file.as_deref())?;
    let value: Value = serde_json::from_str(&raw)?;

    let protected = envelope::protect(&value)?;
    info!(
        original_bytes = raw.len(),
        protected_bytes = protected.len(),
        "protected data"
    );

    write_output(config.output.as_deref(), &protected)
}
