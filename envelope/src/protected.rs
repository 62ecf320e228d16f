use base64text::from_base64;
use serde_json::Value;
use veil::decoder::{DecodableFrom, Decoder};

use crate::checksum::Checksum;
use crate::error::Error;
use crate::legacy::{INVERSE_SHIFT, shift_printable};
use crate::{Envelope, Version};

/// Payload and stored checksum of an envelope whose version is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    data: String,
    checksum: Option<u64>,
}

impl Payload {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn checksum(&self) -> Option<u64> {
        self.checksum
    }
}

/// An envelope dispatched on its `v` field.
///
/// Each variant has its own unwrapping and checksum rules; supporting a new
/// generation means adding a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protected {
    V1(Payload),
    V2(Payload),
}

impl Protected {
    pub fn version(&self) -> Version {
        match self {
            Protected::V1(_) => Version::Legacy,
            Protected::V2(_) => Version::Utf8,
        }
    }

    pub fn payload(&self) -> &Payload {
        match self {
            Protected::V1(payload) | Protected::V2(payload) => payload,
        }
    }

    /// Removes the obfuscation layers without comparing checksums. Returns
    /// the recovered JSON text and the checksum computed over it.
    pub fn reveal(&self) -> Result<(String, Checksum), Error> {
        match self {
            Protected::V1(payload) => reveal_v1(payload),
            Protected::V2(payload) => reveal_v2(payload),
        }
    }

    /// Recovers the JSON text and verifies it against the stored checksum.
    pub fn recover(&self) -> Result<String, Error> {
        let (json, computed) = self.reveal()?;
        let expected = self.payload().checksum();
        if !computed.matches(expected) {
            return Err(Error::Integrity { expected, computed });
        }
        Ok(json)
    }
}

fn reveal_v2(payload: &Payload) -> Result<(String, Checksum), Error> {
    let first = from_base64(payload.data())?;
    let json = from_base64(&first)?;
    let computed = Checksum::utf8(&json);
    Ok((json, computed))
}

// Version 1 checksums the restored text by UTF-16 code unit. Kept as is so
// existing files keep opening.
fn reveal_v1(payload: &Payload) -> Result<(String, Checksum), Error> {
    let first = from_base64(payload.data())?;
    let manipulated = from_base64(&first)?;
    let original = shift_printable(&manipulated, INVERSE_SHIFT);
    let computed = Checksum::utf16(&original);
    Ok((original, computed))
}

impl DecodableFrom<Envelope> for Protected {}

impl Decoder<Envelope, Protected> for Envelope {
    type Error = Error;

    fn decode(&self) -> Result<Protected, Self::Error> {
        let payload = Payload {
            data: self.data().to_string(),
            checksum: self.checksum(),
        };
        match self.version()? {
            Version::Legacy => Ok(Protected::V1(payload)),
            Version::Utf8 => Ok(Protected::V2(payload)),
        }
    }
}

impl DecodableFrom<Protected> for Value {}

impl Decoder<Protected, Value> for Protected {
    type Error = Error;

    fn decode(&self) -> Result<Value, Self::Error> {
        let json = self.recover()?;
        serde_json::from_str(&json).map_err(|e| Error::Format(e.to_string()))
    }
}
