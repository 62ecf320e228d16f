use base64text::to_base64;
use serde::Serialize;
use serde_json::Value;
use veil::encoder::{EncodableTo, Encoder};

use crate::checksum::Checksum;
use crate::error::Error;
use crate::{Envelope, Version};

/// Wraps `value` in a version 2 envelope.
///
/// The JSON text is the compact `serde_json` serialization. Key order and
/// whitespace match `JSON.stringify`; number formatting can differ (`1.0`
/// stays `1.0`), which is harmless since the checksum covers the text
/// actually encoded.
pub fn protect_envelope<T>(value: &T) -> Result<Envelope, Error>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(Error::Serialization)?;
    let first = to_base64(&json);
    let d = to_base64(&first);
    Ok(Envelope::new(d, Checksum::utf8(&json), Version::CURRENT))
}

/// Wraps `value` in a version 2 envelope and returns the envelope text.
///
/// # Example
/// ```
/// let text = envelope::protect(&serde_json::json!([1, 2, 3])).unwrap();
/// assert_eq!(r#"{"d":"V3pFc01pd3pYUT09","c":422,"v":2}"#, text);
/// ```
pub fn protect<T>(value: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let envelope = protect_envelope(value)?;
    serde_json::to_string(&envelope).map_err(Error::Serialization)
}

impl EncodableTo<Value> for Envelope {}

impl Encoder<Value, Envelope> for Value {
    type Error = Error;

    fn encode(&self) -> Result<Envelope, Self::Error> {
        protect_envelope(self)
    }
}
