//! # veil
//!
//! Conversion traits shared by every layer of the protected-data codec.
//!
//! This crate defines the `Decoder` and `Encoder` traits that each codec
//! layer implements for its own hop.
//!
//! ## Overview
//!
//! The conversion chain flows like this:
//! ```text
//! envelope text → Envelope → Protected (V1 | V2) → serde_json::Value
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next,
//! and the `Encoder` trait to convert in the reverse direction.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only the conversions a layer actually supports can be written down.
//!
//! ## Example
//!
//! Specific implementations live in the `base64text` and `envelope` crates:
//!
//! ```ignore
//! use veil::decoder::Decoder;
//! use envelope::{Envelope, Protected};
//!
//! let text = r#"{"d":"ZTMwPQ==","c":206,"v":2}"#;
//! let envelope: Envelope = text.decode()?;
//! let protected: Protected = envelope.decode()?;
//! let value: serde_json::Value = protected.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
