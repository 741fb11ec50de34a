//! The base document contract.
//!
//! Every kind embeds a [`Meta`] envelope and implements [`Document`]. The
//! trait's provided methods are the only lifecycle operations: kinds supply
//! nothing but their type tag, their required fields, and access to the
//! envelope. Identity policy comes from [`identity_rule`], never from the kind.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use starintel_types::{RandomId, content_hash};
use tracing::debug;

use crate::identity::{IdentityRule, derive_id, identity_rule};
use crate::{DocError, DocResult, DocType, Meta};

/// Behaviour shared by every document kind.
pub trait Document: Serialize + DeserializeOwned + Sized {
    /// The kind's fixed type tag.
    const KIND: DocType;

    /// External keys that must be present when decoding.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// The document's envelope.
    fn meta(&self) -> &Meta;

    /// Mutable access to the envelope.
    fn meta_mut(&mut self) -> &mut Meta;

    /// The document identifier; empty until finalized.
    fn id(&self) -> &str {
        &self.meta().id
    }

    fn doc_type(&self) -> DocType {
        Self::KIND
    }

    fn identity_rule() -> IdentityRule {
        identity_rule(Self::KIND)
    }

    /// Resets the type tag to the kind's tag. Idempotent.
    fn derive_type(&mut self) {
        self.meta_mut().derive_type(Self::KIND);
    }

    /// Overwrites the id with a fresh time-ordered random identifier.
    fn assign_random_id(&mut self) {
        self.meta_mut().id = RandomId::new().to_string();
    }

    /// Overwrites the id with the digest of `parts`, concatenated in order.
    fn assign_content_hash_id<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.meta_mut().id = content_hash(parts);
    }

    /// Stamps `dataset` and the type tag, and assigns an id if there is none.
    ///
    /// Calling this again never changes an existing id. On error the
    /// document is left untouched.
    fn finalize(&mut self, dataset: impl Into<String>) -> DocResult<()> {
        let dataset = dataset.into();
        let id = if self.meta().is_identified() {
            None
        } else {
            Some(compute_id(&*self, &dataset)?)
        };

        let meta = self.meta_mut();
        meta.dataset = dataset;
        meta.derive_type(Self::KIND);
        if let Some(id) = id {
            debug!(
                kind = %Self::KIND,
                dataset = %meta.dataset,
                rule = Self::identity_rule().name(),
                id = %id,
                "Document identified"
            );
            meta.id = id;
        }
        Ok(())
    }

    /// Consuming form of [`Document::finalize`].
    fn finalized(mut self, dataset: impl Into<String>) -> DocResult<Self> {
        self.finalize(dataset)?;
        Ok(self)
    }

    /// Re-applies the identity rule, replacing any existing id.
    ///
    /// Content-hash kinds pick up changes to their hash inputs; random kinds
    /// get a new random id.
    fn reidentify(&mut self) -> DocResult<()> {
        let dataset = self.meta().dataset.clone();
        let id = compute_id(&*self, &dataset)?;
        debug!(kind = %Self::KIND, old = %self.meta().id, new = %id, "Document re-identified");
        self.meta_mut().id = id;
        Ok(())
    }

    /// Refreshes `dateUpdated`.
    fn touch_updated(&mut self) {
        self.meta_mut().touch();
    }

    /// Back-fills zero timestamps.
    fn timestamp(&mut self) {
        self.meta_mut().timestamp();
    }

    /// Canonical external form: camelCase keys, `_id`, `_rev` only when set.
    fn to_value(&self) -> DocResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Canonical JSON text. Object keys are emitted in sorted order.
    fn to_json(&self) -> DocResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    fn to_json_pretty(&self) -> DocResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }

    /// Decodes the canonical form, filling defaults for absent optional keys.
    ///
    /// A `type` naming another kind is rejected; an absent `type` is derived.
    fn from_value(value: Value) -> DocResult<Self> {
        let value = check_envelope(Self::KIND, Self::REQUIRED_FIELDS, value)?;
        Ok(serde_json::from_value(value)?)
    }

    fn from_json(json: &str) -> DocResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

fn compute_id<D: Document>(doc: &D, dataset: &str) -> DocResult<String> {
    if !D::identity_rule().is_content_hash() {
        return derive_id(D::KIND, &Map::new());
    }
    let mut canonical = to_object(D::KIND, doc.to_value()?)?;
    canonical.insert("dataset".into(), Value::String(dataset.to_string()));
    derive_id(D::KIND, &canonical)
}

pub(crate) fn to_object(kind: DocType, value: Value) -> DocResult<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(DocError::TypeTagMismatch {
            expected: Some(kind),
            found: None,
        }),
    }
}

/// Validates the tag and required keys of a raw document for `kind`.
///
/// Inserts the tag when absent so the envelope always decodes with it.
pub(crate) fn check_envelope(
    kind: DocType,
    required: &'static [&'static str],
    value: Value,
) -> DocResult<Value> {
    let mut object = to_object(kind, value)?;

    match object.get("type").map(tag_text) {
        None => {
            object.insert("type".into(), Value::String(kind.tag().into()));
        }
        Some(tag) if tag == kind.tag() => {}
        Some(tag) => {
            return Err(DocError::TypeTagMismatch {
                expected: Some(kind),
                found: Some(tag),
            });
        }
    }

    if let Some(&field) = required.iter().find(|field| !object.contains_key(**field)) {
        return Err(DocError::MissingRequiredField { kind, field });
    }

    Ok(Value::Object(object))
}

pub(crate) fn tag_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Implements [`Document`] for a struct with a `meta: Meta` field.
macro_rules! impl_document {
    ($ty:ty, $kind:expr, [$($required:literal),* $(,)?]) => {
        impl $crate::document::Document for $ty {
            const KIND: $crate::DocType = $kind;
            const REQUIRED_FIELDS: &'static [&'static str] = &[$($required),*];

            fn meta(&self) -> &$crate::Meta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut $crate::Meta {
                &mut self.meta
            }
        }
    };
}

pub(crate) use impl_document;
