//! Error types for protecting and unprotecting data.

use thiserror::Error;

use crate::checksum::Checksum;

/// Errors that can occur while building or opening an envelope.
///
/// Every variant is terminal for the call that produced it. Callers decide
/// whether to surface it or to fall back to an unprotected resource.
#[derive(Debug, Error)]
pub enum Error {
    /// The envelope text is not a JSON object with a string `d`, or the
    /// recovered payload is not valid JSON
    #[error("malformed envelope: {0}")]
    Format(String),

    /// The checksum of the recovered text does not match the stored `c`
    #[error("data integrity check failed: stored {expected:?}, computed {computed}")]
    Integrity {
        expected: Option<u64>,
        computed: Checksum,
    },

    /// The envelope carries a `v` other than 1 or 2
    #[error("unsupported protection version: {0}")]
    UnsupportedVersion(String),

    /// The plain value could not be serialized to JSON text
    #[error("serialization: {0}")]
    Serialization(serde_json::Error),

    /// A base64 layer is malformed or does not decode to UTF-8
    #[error("decode: {0}")]
    Decode(#[from] base64text::error::Error),
}

/// Category of an [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Integrity,
    UnsupportedVersion,
    Serialization,
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::Integrity { .. } => ErrorKind::Integrity,
            Error::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }
}
