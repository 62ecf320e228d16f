//! # loader
//!
//! The callers of the envelope codec: reading protected data with a plain
//! JSON fallback, publishing a dataset as protected and unprotected blobs,
//! and the bearer-token gate in front of the admin paths.

pub mod auth;
pub mod dataset;
pub mod error;
pub mod load;
pub mod publish;
pub mod source;

pub use auth::AdminGate;
pub use dataset::{Dataset, Metadata};
pub use error::Error;
pub use load::{Loaded, Origin, load_admin, load_plain, load_protected, load_with_fallback};
pub use publish::{BlobLocation, BlobStore, FsStore, Locations, Published, Publisher};
pub use source::{FileSource, MemorySource, Source};
