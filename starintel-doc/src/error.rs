//! Error types for document construction and decoding.

use crate::DocType;
use thiserror::Error;

/// Result type for document operations.
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can occur while identifying, encoding, or decoding documents.
#[derive(Debug, Error)]
pub enum DocError {
    /// A field the kind cannot exist without was absent from the input.
    #[error("{kind} document is missing required field `{field}`")]
    MissingRequiredField { kind: DocType, field: &'static str },

    /// The `type` tag is absent, unknown, or names a different kind.
    #[error("type tag mismatch: expected {}, found {}", display_expected(.expected), display_found(.found))]
    TypeTagMismatch {
        /// `None` when decoding polymorphically.
        expected: Option<DocType>,
        /// `None` when the input carried no tag.
        found: Option<String>,
    },

    /// The identity table references a field the kind cannot render.
    #[error("no identity rule for {kind} field `{field}`")]
    UnsupportedIdentityRule { kind: DocType, field: &'static str },

    /// A hash input is a float with no JSON form (NaN or an infinity).
    #[error("{kind} field `{field}` is not a finite number")]
    NonFiniteValue { kind: DocType, field: &'static str },

    /// An email address did not split into exactly one user and domain.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A manifest file was not valid TOML for the manifest shape.
    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// A manifest could not be rendered as TOML.
    #[error("manifest serialization error: {0}")]
    ManifestSerialize(#[from] toml::ser::Error),

    /// I/O error while reading a manifest file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_expected(expected: &Option<DocType>) -> String {
    match expected {
        Some(kind) => format!("`{kind}`"),
        None => "a known document type".into(),
    }
}

fn display_found(found: &Option<String>) -> String {
    match found {
        Some(tag) => format!("`{tag}`"),
        None => "no tag".into(),
    }
}
