use clap::Args;
use loader::{Dataset, FsStore, Published, Publisher};
use serde::Serialize;
use serde_json::Value;

use crate::admin::Credentials;
use crate::error::Result;
use crate::utils::read_input;

#[derive(Serialize)]
struct Response<'a> {
    success: bool,
    message: &'a str,
    #[serde(flatten)]
    published: &'a Published,
}

#[derive(Args)]
pub(crate) struct Config {
    /// Path to a JSON file of the form {"activities": [...]}. If not specified, reads from stdin
    file: Option<String>,

    /// Directory the blobs are written to
    #[arg(short, long)]
    dir: String,

    #[command(flatten)]
    credentials: Credentials,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    config.credentials.authorize()?;

    let body: Value = serde_json::from_str(&read_input(config.file.as_deref())?)?;
    let dataset = Dataset::from_update(body)?;

    let publisher = Publisher::new(FsStore::new(&config.dir));
    let published = publisher.publish(&dataset)?;

    let response = Response {
        success: true,
        message: "Activities updated successfully",
        published: &published,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
