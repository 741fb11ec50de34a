//! The envelope every document embeds.
//!
//! # Invariants
//! - `type` always equals the owning kind's tag; it is set at construction
//!   and cannot be assigned from outside the crate.
//! - `_rev` is serialized only when a non-empty revision is present, and an
//!   empty `_rev` on input decodes to no revision.
//! - `date_added <= date_updated` for every mutation made through this type.

use serde::{Deserialize, Deserializer, Serialize};
use starintel_types::{UnixSeconds, unix_now};
use tracing::trace;

use crate::{DEFAULT_DATASET, DocType, SCHEMA_VERSION};

/// Universal document fields: identity, type tag, provenance, and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Globally unique within a dataset; empty until finalized.
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(
        rename = "_rev",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_rev"
    )]
    rev: Option<String>,

    #[serde(rename = "type")]
    doc_type: DocType,

    /// Free-text provenance, in the order it was recorded.
    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default = "default_dataset")]
    pub dataset: String,

    #[serde(default = "unix_now")]
    pub date_added: UnixSeconds,

    #[serde(default = "unix_now")]
    pub date_updated: UnixSeconds,
}

impl Meta {
    /// Creates an unidentified envelope for `kind`, stamped with the current time.
    #[must_use]
    pub fn new(kind: DocType) -> Self {
        let now = unix_now();
        Self {
            id: String::new(),
            rev: None,
            doc_type: kind,
            sources: Vec::new(),
            schema_version: default_schema_version(),
            dataset: default_dataset(),
            date_added: now,
            date_updated: now,
        }
    }

    /// The document's type tag.
    #[must_use]
    pub const fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub(crate) fn derive_type(&mut self, kind: DocType) {
        self.doc_type = kind;
    }

    /// The storage revision, if the document has been persisted before.
    #[must_use]
    pub fn rev(&self) -> Option<&str> {
        self.rev.as_deref()
    }

    /// Sets or clears the storage revision. An empty string clears it.
    pub fn set_rev(&mut self, rev: Option<String>) {
        self.rev = rev.filter(|r| !r.is_empty());
    }

    /// Returns true once an identifier has been assigned.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        !self.id.is_empty()
    }

    /// Appends a provenance entry.
    pub fn add_source(&mut self, source: impl Into<String>) {
        self.sources.push(source.into());
    }

    /// Refreshes `date_updated`. Never moves it before `date_added`.
    pub fn touch(&mut self) {
        self.date_updated = unix_now().max(self.date_added);
        trace!(id = %self.id, date_updated = self.date_updated, "Document touched");
    }

    /// Back-fills zero timestamps, as carried by some older stored shapes.
    pub fn timestamp(&mut self) {
        let now = unix_now();
        if self.date_added == 0 {
            self.date_added = now;
        }
        if self.date_updated == 0 {
            self.date_updated = now.max(self.date_added);
        }
    }

    /// Returns true if this document was written with the current schema revision.
    #[must_use]
    pub fn is_current_schema(&self) -> bool {
        self.schema_version == SCHEMA_VERSION
    }
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

pub(crate) fn non_empty_rev<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let rev = Option::<String>::deserialize(deserializer)?;
    Ok(rev.filter(|r| !r.is_empty()))
}
