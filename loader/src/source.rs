use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;

/// A place the raw body of a data resource can be fetched from.
pub trait Source {
    /// Human readable name used in logs and errors.
    fn name(&self) -> String;

    /// Returns the full body unmodified, or `None` if the resource does
    /// not exist.
    fn fetch(&self) -> Result<Option<String>, Error>;
}

/// A resource stored as a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl Source for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(body) => {
                debug!(path = %self.path.display(), bytes = body.len(), "fetched resource");
                Ok(Some(body))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// An in-memory resource.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    body: Option<String>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        MemorySource {
            name: name.into(),
            body: Some(body.into()),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        MemorySource {
            name: name.into(),
            body: None,
        }
    }
}

impl Source for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Option<String>, Error> {
        Ok(self.body.clone())
    }
}
