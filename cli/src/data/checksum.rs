use clap::Args;
use envelope::Checksum;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin.
    /// The checksum covers the input exactly, including any trailing newline
    file: Option<String>,

    /// Sum UTF-16 code units as version 1 envelopes did
    #[arg(long)]
    legacy: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;
    let checksum = if config.legacy {
        Checksum::utf16(&text)
    } else {
        Checksum::utf8(&text)
    };
    println!("{checksum}");

    Ok(())
}
