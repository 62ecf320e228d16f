pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error::Error;
use regex::Regex;
use veil::decoder::{DecodableFrom, Decoder};

/*
ref: https://www.rfc-editor.org/rfc/rfc4648#section-4
Whole 4-character quanta, with at most one padded final quantum.
*/
const BASE64_PATTERN: &str =
    r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$";

/// Base64 text whose decoded bytes are expected to be UTF-8.
///
/// The text is always produced from, or validated against, the standard
/// RFC 4648 alphabet with `=` padding. Multi-byte characters are encoded
/// from their UTF-8 bytes, never from UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Text {
    base64_data: String,
}

impl Base64Text {
    /// Encodes the UTF-8 bytes of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Base64Text {
            base64_data: STANDARD.encode(data),
        }
    }

    pub fn data(&self) -> &str {
        &self.base64_data
    }

    pub fn into_inner(self) -> String {
        self.base64_data
    }
}

impl Display for Base64Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base64_data)
    }
}

impl FromStr for Base64Text {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(BASE64_PATTERN).map_err(|_| Error::InvalidAlphabet)?;
        if !re.is_match(s) {
            return Err(Error::InvalidAlphabet);
        }
        Ok(Base64Text {
            base64_data: s.to_string(),
        })
    }
}

impl DecodableFrom<Base64Text> for Vec<u8> {}

impl Decoder<Base64Text, Vec<u8>> for Base64Text {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        STANDARD.decode(self.data()).map_err(Error::Base64Decode)
    }
}

impl DecodableFrom<Base64Text> for String {}

impl Decoder<Base64Text, String> for Base64Text {
    type Error = Error;

    fn decode(&self) -> Result<String, Self::Error> {
        let bytes: Vec<u8> = self.decode()?;
        String::from_utf8(bytes).map_err(Error::Utf8)
    }
}

impl DecodableFrom<&str> for Base64Text {}

impl Decoder<&str, Base64Text> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Base64Text, Self::Error> {
        Base64Text::from_str(self)
    }
}

impl DecodableFrom<String> for Base64Text {}

impl Decoder<String, Base64Text> for String {
    type Error = Error;

    fn decode(&self) -> Result<Base64Text, Self::Error> {
        Base64Text::from_str(self)
    }
}

/// Encodes `text` as UTF-8 and then as standard padded base64.
///
/// # Example
/// ```
/// assert_eq!(base64text::to_base64("Test"), "VGVzdA==");
/// ```
pub fn to_base64(text: &str) -> String {
    Base64Text::from_text(text).into_inner()
}

/// Decodes standard padded base64 and interprets the bytes as UTF-8.
///
/// # Example
/// ```
/// let text = base64text::from_base64("8J+OiQ==").unwrap();
/// assert_eq!(text, "🎉");
/// ```
pub fn from_base64(b64: &str) -> Result<String, Error> {
    let text: Base64Text = b64.decode()?;
    text.decode()
}
