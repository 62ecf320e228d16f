//! The write path: one dataset becomes two blobs.
//!
//! The unprotected blob is pretty-printed JSON for the admin editor. The
//! protected blob is envelope text for the public site. Locations are
//! returned to the caller and handed back in for deletion; the publisher
//! keeps no record of them.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};
use veil::encoder::Encoder;

use crate::dataset::Dataset;
use crate::error::Error;

pub const UNPROTECTED_BLOB: &str = "activities_unprotected.json";
pub const PROTECTED_BLOB: &str = "activities_protected.json";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Where a stored blob can be read back from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlobLocation(String);

impl BlobLocation {
    pub fn new(url: impl Into<String>) -> Self {
        BlobLocation(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub trait BlobStore {
    fn put(&self, name: &str, content_type: &str, body: &str) -> Result<BlobLocation, Error>;

    fn delete(&self, location: &BlobLocation) -> Result<(), Error>;
}

/// Blob store backed by a directory. Content types are not recorded.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }
}

impl BlobStore for FsStore {
    fn put(&self, name: &str, _content_type: &str, body: &str) -> Result<BlobLocation, Error> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        fs::write(&path, body)?;
        Ok(BlobLocation::new(path.display().to_string()))
    }

    fn delete(&self, location: &BlobLocation) -> Result<(), Error> {
        fs::remove_file(location.as_str())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Locations {
    pub unprotected: Option<BlobLocation>,
    pub protected: Option<BlobLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Published {
    pub urls: Locations,
    pub total_activities: usize,
}

pub struct Publisher<S> {
    store: S,
}

impl<S: BlobStore> Publisher<S> {
    pub fn new(store: S) -> Self {
        Publisher { store }
    }

    /// Writes the unprotected blob, then the protected one.
    pub fn publish(&self, dataset: &Dataset) -> Result<Published, Error> {
        let plain = serde_json::to_string_pretty(dataset)?;
        let unprotected = self.store.put(UNPROTECTED_BLOB, CONTENT_TYPE_JSON, &plain)?;

        let protected_text = dataset.encode()?.to_string();
        let protected = self
            .store
            .put(PROTECTED_BLOB, CONTENT_TYPE_JSON, &protected_text)?;

        info!(
            total_activities = dataset.activities.len(),
            original_bytes = plain.len(),
            protected_bytes = protected_text.len(),
            "published activities"
        );

        Ok(Published {
            urls: Locations {
                unprotected: Some(unprotected),
                protected: Some(protected),
            },
            total_activities: dataset.activities.len(),
        })
    }

    /// Deletes both blobs. A failed delete is logged and its location is
    /// returned in the result; the other blob is still attempted.
    pub fn delete_all(&self, locations: &Locations) -> Locations {
        Locations {
            unprotected: self.delete_one(locations.unprotected.as_ref()),
            protected: self.delete_one(locations.protected.as_ref()),
        }
    }

    fn delete_one(&self, location: Option<&BlobLocation>) -> Option<BlobLocation> {
        let location = location?;
        match self.store.delete(location) {
            Ok(()) => None,
            Err(e) => {
                warn!(location = location.as_str(), error = %e, "failed to delete blob");
                Some(location.clone())
            }
        }
    }
}
