use std::path::Path;

use clap::Args;
use loader::publish::{PROTECTED_BLOB, UNPROTECTED_BLOB};
use loader::{BlobLocation, FsStore, Locations, Publisher};

use crate::admin::Credentials;
use crate::error::Result;

#[derive(Args)]
pub(crate) struct Config {
    /// Directory the blobs were published to
    #[arg(short, long)]
    dir: String,

    #[command(flatten)]
    credentials: Credentials,
}

fn existing(dir: &Path, name: &str) -> Option<BlobLocation> {
    let path = dir.join(name);
    path.exists().then(|| BlobLocation::new(path.display().to_string()))
}

pub(crate) fn execute(config: Config) -> Result<()> {
    config.credentials.authorize()?;

    let dir = Path::new(&config.dir);
    let locations = Locations {
        unprotected: existing(dir, UNPROTECTED_BLOB),
        protected: existing(dir, PROTECTED_BLOB),
    };

    let remaining = Publisher::new(FsStore::new(dir)).delete_all(&locations);
    if remaining != Locations::default() {
        return Err(format!(
            "some blobs could not be deleted: {}",
            serde_json::to_string(&remaining)?
        )
        .into());
    }
    println!("All activities deleted");

    Ok(())
}
