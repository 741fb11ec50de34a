//! Core primitives for Star Intel documents.
//!
//! This crate defines the schema-agnostic building blocks used by the
//! document crate:
//! - Time-ordered random identifiers (UUID v7 rendered as ULID text)
//! - Content-hash identifiers
//! - Unix-second wall-clock timestamps
//!
//! Record shapes and identity policy live in `starintel-doc`, not here.

mod ids;
mod timestamp;

pub use ids::{RANDOM_ID_LEN, RandomId, content_hash, is_content_hash};
pub use timestamp::{UnixSeconds, to_datetime, unix_now};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
