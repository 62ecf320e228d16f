//! Decoder trait for type-safe conversions.
//!
//! `Decoder` converts a source type `T` into a destination type `D`. Every
//! hop of the unprotect path (text to envelope, envelope to a versioned
//! payload, payload to plain JSON) is one `Decoder` implementation.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use veil::decoder::{Decoder, DecodableFrom};
//!
//! struct Encoded(String);
//! struct Plain(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Encoded> for Plain {}
//!
//! impl Decoder<Encoded, Plain> for Encoded {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Plain, Self::Error> {
//!         Ok(Plain(self.0.chars().rev().collect()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// The destination type must implement `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each destination type that a
/// source type is allowed to decode into:
///
/// ```no_run
/// use veil::decoder::DecodableFrom;
///
/// struct Envelope;
/// struct Payload;
///
/// impl DecodableFrom<Envelope> for Payload {}
/// ```
pub trait DecodableFrom<T> {}

#[cfg(test)]
mod tests {
    use super::{DecodableFrom, Decoder};

    struct Reversed(String);
    struct Plain(String);

    impl DecodableFrom<Reversed> for Plain {}

    impl Decoder<Reversed, Plain> for Reversed {
        type Error = ();

        fn decode(&self) -> Result<Plain, Self::Error> {
            if self.0.is_empty() {
                return Err(());
            }
            Ok(Plain(self.0.chars().rev().collect()))
        }
    }

    #[test]
    fn test_decode_through_trait() {
        let plain: Plain = Reversed("lieV".to_string()).decode().unwrap();
        assert_eq!(plain.0, "Veil");
    }

    #[test]
    fn test_decode_error_is_propagated() {
        let result: Result<Plain, ()> = Reversed(String::new()).decode();
        assert!(result.is_err());
    }
}
