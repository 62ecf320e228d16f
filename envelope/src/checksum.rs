//! Sum-of-units checksum stored in the envelope `c` field.
//!
//! This is a non-cryptographic fingerprint. It catches truncation and
//! accidental corruption; anyone can recompute it for tampered data.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// The checksum is kept below this modulus, so it always fits `[0, 999999]`.
pub const MODULUS: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Checksum(u32);

impl Checksum {
    /// Sum of the UTF-8 bytes of `text`, modulo [`MODULUS`]. Used by version 2.
    pub fn utf8(text: &str) -> Self {
        Self::sum(text.bytes().map(u64::from))
    }

    /// Sum of the UTF-16 code units of `text`, modulo [`MODULUS`]. Used by
    /// legacy version 1 only.
    pub fn utf16(text: &str) -> Self {
        Self::sum(text.encode_utf16().map(u64::from))
    }

    fn sum(units: impl Iterator<Item = u64>) -> Self {
        let total = units.fold(0u64, |acc, unit| (acc + unit) % MODULUS);
        // total < MODULUS
        Checksum(total as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this checksum equals the value stored in an envelope. A
    /// missing stored value never matches.
    pub fn matches(self, stored: Option<u64>) -> bool {
        stored == Some(u64::from(self.0))
    }
}

impl Display for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Checksum> for u64 {
    fn from(checksum: Checksum) -> Self {
        u64::from(checksum.0)
    }
}
