use std::string::FromUtf8Error;

use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when turning base64 text back into UTF-8 text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input contains characters outside the RFC 4648 alphabet, or its
    /// length and padding cannot form whole base64 quanta
    #[error("invalid base64 alphabet or padding")]
    InvalidAlphabet,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),

    /// The decoded bytes are not a valid UTF-8 sequence
    #[error("utf-8 decode: {0}")]
    Utf8(FromUtf8Error),
}
