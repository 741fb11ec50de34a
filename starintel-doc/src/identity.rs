//! Identity rules: which kinds get random ids and which are content-addressed.
//!
//! The whole deduplication policy lives in [`identity_rule`]. Kinds that model
//! a fact about the world (an IP, an address, an org registration) hash the
//! fields that define the fact, so independent collectors converge on one
//! record. Kinds that model an event or an analyst assertion (a person record,
//! a relation) get a fresh random id even when their fields look identical.
//!
//! Hash inputs are read from a document's canonical JSON form by external
//! (camelCase) key, then rendered and concatenated in table order.

use serde_json::{Map, Value};
use starintel_types::{RandomId, content_hash};

use self::HashField::{Always as F, IfNonEmpty};
use crate::render::render_scalar;
use crate::{DocError, DocResult, DocType};

/// One hash input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashField {
    /// Always contributes, whatever its value.
    Always(&'static str),
    /// Contributes only when it renders to a non-empty string.
    IfNonEmpty(&'static str),
}

impl HashField {
    /// External key of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            HashField::Always(key) | HashField::IfNonEmpty(key) => key,
        }
    }
}

/// How a kind obtains its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    /// Fresh time-ordered random id.
    Random,
    /// Digest of the listed fields, in order.
    ContentHash(&'static [HashField]),
}

impl IdentityRule {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IdentityRule::Random => "random",
            IdentityRule::ContentHash(_) => "content-hash",
        }
    }

    /// Returns true for content-addressed kinds.
    #[must_use]
    pub const fn is_content_hash(self) -> bool {
        matches!(self, IdentityRule::ContentHash(_))
    }
}

const ORG: &[HashField] = &[F("name"), F("reg"), F("country")];
const DOMAIN: &[HashField] = &[F("record"), F("recordType")];
const NETWORK: &[HashField] = &[F("org"), F("asn"), F("subnet")];
const HOST: &[HashField] = &[F("ip")];
const URL: &[HashField] = &[F("url"), F("content")];
const GEO: &[HashField] = &[F("lat"), F("long"), F("alt")];
const ADDRESS: &[HashField] = &[
    F("lat"),
    F("long"),
    F("alt"),
    F("city"),
    F("state"),
    F("postal"),
    F("country"),
    F("street"),
    F("street2"),
];
const PHONE: &[HashField] = &[F("number")];
const MESSAGE: &[HashField] = &[
    F("content"),
    F("user"),
    F("channel"),
    F("group"),
    F("messageId"),
    F("platform"),
];
const SOCIAL_MEDIA_POST: &[HashField] = &[F("content"), F("user"), F("url"), F("group")];
const TARGET: &[HashField] = &[F("dataset"), F("target"), F("actor")];
const EMAIL: &[HashField] = &[F("user"), F("domain"), IfNonEmpty("password")];
const EMAIL_MESSAGE: &[HashField] = &[F("body"), F("to"), F("from"), F("subject")];
const USER: &[HashField] = &[F("name"), F("url"), F("platform")];
const ACTOR_MANIFEST: &[HashField] = &[F("actor")];

/// The identity table.
#[must_use]
pub const fn identity_rule(kind: DocType) -> IdentityRule {
    use IdentityRule::{ContentHash, Random};

    match kind {
        DocType::Person | DocType::Relation => Random,
        DocType::Org => ContentHash(ORG),
        DocType::Domain => ContentHash(DOMAIN),
        DocType::Network => ContentHash(NETWORK),
        DocType::Host => ContentHash(HOST),
        DocType::Url => ContentHash(URL),
        DocType::Geo => ContentHash(GEO),
        DocType::Address => ContentHash(ADDRESS),
        DocType::Phone => ContentHash(PHONE),
        DocType::Message => ContentHash(MESSAGE),
        DocType::SocialMediaPost => ContentHash(SOCIAL_MEDIA_POST),
        DocType::Target => ContentHash(TARGET),
        DocType::Email => ContentHash(EMAIL),
        DocType::EmailMessage => ContentHash(EMAIL_MESSAGE),
        DocType::User => ContentHash(USER),
        DocType::ActorManifest => ContentHash(ACTOR_MANIFEST),
    }
}

/// Renders the ordered hash inputs for `kind` from its canonical form.
///
/// Fails if a listed field is absent, is not a scalar, or is a non-finite
/// float (which the canonical form carries as `null`).
pub fn hash_inputs(
    kind: DocType,
    fields: &[HashField],
    canonical: &Map<String, Value>,
) -> DocResult<Vec<String>> {
    let mut parts = Vec::with_capacity(fields.len());
    for field in fields {
        let key = field.key();
        let rendered = match canonical.get(key) {
            // serde_json encodes NaN and infinities as null; no field hashes null.
            Some(Value::Null) => return Err(DocError::NonFiniteValue { kind, field: key }),
            value => value
                .and_then(render_scalar)
                .ok_or(DocError::UnsupportedIdentityRule { kind, field: key })?,
        };
        match field {
            HashField::IfNonEmpty(_) if rendered.is_empty() => {}
            _ => parts.push(rendered),
        }
    }
    Ok(parts)
}

/// Computes the identifier `kind`'s rule assigns to a document whose
/// canonical form is `canonical`.
pub fn derive_id(kind: DocType, canonical: &Map<String, Value>) -> DocResult<String> {
    match identity_rule(kind) {
        IdentityRule::Random => Ok(RandomId::new().to_string()),
        IdentityRule::ContentHash(fields) => {
            Ok(content_hash(hash_inputs(kind, fields, canonical)?))
        }
    }
}
