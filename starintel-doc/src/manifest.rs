//! Actor manifests: what a collector advertises it can consume.
//!
//! A manifest ships with its actor as `manifest.toml` and is published to the
//! document store as JSON. It carries a lighter envelope than [`crate::Meta`]
//! (no dataset, sources, or schema version) but is identified through the same
//! identity table, by actor name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starintel_types::{UnixSeconds, unix_now};
use tracing::debug;

use crate::document::{check_envelope, to_object};
use crate::identity::derive_id;
use crate::meta::non_empty_rev;
use crate::{DocError, DocResult, DocType};

/// Advertisement of an actor's consumer endpoint and accepted target options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorManifest {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(
        rename = "_rev",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_rev"
    )]
    rev: Option<String>,

    #[serde(rename = "type", default = "manifest_type")]
    doc_type: DocType,

    /// Actor name; the manifest's identity.
    pub actor: String,

    /// Queue or path the actor consumes targets from.
    #[serde(default)]
    pub consumer_path: String,

    #[serde(default = "unix_now")]
    pub date_added: UnixSeconds,

    #[serde(default = "unix_now")]
    pub date_updated: UnixSeconds,

    /// Option shapes the actor accepts on a target.
    #[serde(default)]
    pub target_options: Vec<Value>,
}

impl ActorManifest {
    /// Creates an unidentified manifest for `actor`.
    pub fn new(actor: impl Into<String>) -> Self {
        let now = unix_now();
        Self {
            id: String::new(),
            rev: None,
            doc_type: DocType::ActorManifest,
            actor: actor.into(),
            consumer_path: String::new(),
            date_added: now,
            date_updated: now,
            target_options: Vec::new(),
        }
    }

    #[must_use]
    pub const fn doc_type(&self) -> DocType {
        self.doc_type
    }

    #[must_use]
    pub fn rev(&self) -> Option<&str> {
        self.rev.as_deref()
    }

    /// Sets or clears the storage revision. An empty string clears it.
    pub fn set_rev(&mut self, rev: Option<String>) {
        self.rev = rev.filter(|r| !r.is_empty());
    }

    /// Stamps the type tag and assigns an id if there is none.
    pub fn finalize(&mut self) -> DocResult<()> {
        self.doc_type = DocType::ActorManifest;
        if self.id.is_empty() {
            let canonical = to_object(DocType::ActorManifest, self.to_value()?)?;
            let id = derive_id(DocType::ActorManifest, &canonical)?;
            debug!(actor = %self.actor, id = %id, "Actor manifest identified");
            self.id = id;
        }
        Ok(())
    }

    /// Consuming form of [`ActorManifest::finalize`].
    pub fn finalized(mut self) -> DocResult<Self> {
        self.finalize()?;
        Ok(self)
    }

    /// Refreshes `dateUpdated`. Never moves it before `dateAdded`.
    pub fn touch(&mut self) {
        self.date_updated = unix_now().max(self.date_added);
    }

    /// Canonical JSON form.
    pub fn to_value(&self) -> DocResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Canonical JSON text.
    pub fn to_json(&self) -> DocResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// Decodes the JSON form. `actor` is required; an absent `type` is derived.
    pub fn from_value(value: Value) -> DocResult<Self> {
        let value = check_envelope(DocType::ActorManifest, &["actor"], value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Parses JSON text. See [`ActorManifest::from_value`].
    pub fn from_json(json: &str) -> DocResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parses a `manifest.toml` body and identifies it if needed.
    pub fn from_toml_str(s: &str) -> DocResult<Self> {
        let mut manifest: Self = toml::from_str(s)?;
        if manifest.doc_type != DocType::ActorManifest {
            return Err(DocError::TypeTagMismatch {
                expected: Some(DocType::ActorManifest),
                found: Some(manifest.doc_type.tag().to_string()),
            });
        }
        manifest.finalize()?;
        Ok(manifest)
    }

    /// Renders the manifest as `manifest.toml` text.
    pub fn to_toml_string(&self) -> DocResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reads and parses a manifest file.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let manifest = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        debug!(path = %path.display(), actor = %manifest.actor, "Loaded actor manifest");
        Ok(manifest)
    }

    /// Writes the manifest as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> DocResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

fn manifest_type() -> DocType {
    DocType::ActorManifest
}

/// Creates an identified manifest for `actor`.
pub fn new_actor_manifest(actor: impl Into<String>) -> DocResult<ActorManifest> {
    ActorManifest::new(actor).finalized()
}
