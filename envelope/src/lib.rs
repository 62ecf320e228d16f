//! # envelope
//!
//! The versioned `{d, c, v}` wrapper that is persisted and served in place
//! of the plain activity dataset.
//!
//! ```text
//! plain JSON ─base64─▶ first ─base64─▶ d        c = Checksum::utf8(plain JSON)
//! ```
//!
//! Version 2 is the only format written. Version 1 envelopes (printable
//! ASCII rotation before the base64 layers, UTF-16 checksum) are still
//! opened. An envelope without `v` is version 2.
//!
//! The scheme is obfuscation. Base64 is not encryption and the checksum is
//! not a MAC.

pub mod checksum;
pub mod error;
pub mod legacy;
mod protect;
mod protected;
mod unprotect;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use veil::decoder::{DecodableFrom, Decoder};

pub use checksum::Checksum;
pub use error::{Error, ErrorKind};
pub use protect::{protect, protect_envelope};
pub use protected::{Payload, Protected};
pub use unprotect::{Report, inspect, unprotect, unprotect_as};

/// Envelope format generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Version {
    /// Printable ASCII rotation, UTF-16 code unit checksum
    Legacy = 1,
    /// Plain double base64, UTF-8 byte checksum
    Utf8 = 2,
}

impl Version {
    pub const CURRENT: Version = Version::Utf8;

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The wire form of protected data.
///
/// Field order and whitespace carry no meaning; the text is parsed as a
/// generic JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    d: String,
    #[serde(
        default,
        deserialize_with = "lenient_integer",
        skip_serializing_if = "Option::is_none"
    )]
    c: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    v: Option<Value>,
}

impl Envelope {
    pub fn new(d: String, c: Checksum, v: Version) -> Self {
        Envelope {
            d,
            c: Some(u64::from(c)),
            v: Some(Value::from(v.number())),
        }
    }

    /// The transformed payload.
    pub fn data(&self) -> &str {
        &self.d
    }

    /// The stored checksum. `None` when `c` is absent or not a
    /// non-negative integer; such an envelope never passes verification.
    pub fn checksum(&self) -> Option<u64> {
        self.c
    }

    /// Resolves `v` to a known format generation. Absent or `null` is
    /// version 2.
    pub fn version(&self) -> Result<Version, Error> {
        let tag = match &self.v {
            None | Some(Value::Null) => return Ok(Version::Utf8),
            Some(tag) => tag,
        };
        match as_integer(tag) {
            Some(1) => Ok(Version::Legacy),
            Some(2) => Ok(Version::Utf8),
            _ => Err(Error::UnsupportedVersion(tag.to_string())),
        }
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl FromStr for Envelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(|e| Error::Format(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::Format("envelope is not a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| Error::Format(e.to_string()))
    }
}

impl DecodableFrom<&str> for Envelope {}

impl Decoder<&str, Envelope> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Envelope, Self::Error> {
        Envelope::from_str(self)
    }
}

impl DecodableFrom<String> for Envelope {}

impl Decoder<String, Envelope> for String {
    type Error = Error;

    fn decode(&self) -> Result<Envelope, Self::Error> {
        Envelope::from_str(self)
    }
}

/// Produces the compact JSON text `{"d":..,"c":..,"v":..}`.
pub fn serialize_envelope(d: &str, c: Checksum, v: Version) -> Result<String, Error> {
    let envelope = Envelope::new(d.to_string(), c, v);
    serde_json::to_string(&envelope).map_err(Error::Serialization)
}

/// Parses envelope text. Fails with [`Error::Format`] when the text is not
/// a JSON object or has no string `d`.
pub fn parse_envelope(text: &str) -> Result<Envelope, Error> {
    text.decode()
}

// JSON numbers with a zero fractional part count as integers, as they do
// for the JavaScript readers of this format.
fn as_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        return Some(f as u64);
    }
    None
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_integer))
}
