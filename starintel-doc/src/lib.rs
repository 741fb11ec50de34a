//! Document schema for Star Intel.
//!
//! Defines the closed set of record kinds collectors exchange and the rules
//! that give each record its identity before it is stored:
//! - [`Meta`]: the envelope every document embeds (`_id`, `_rev`, `type`,
//!   provenance, dataset, timestamps)
//! - [`Document`]: lifecycle operations on anything with an envelope
//!   (finalize, re-identify, touch, canonical encode/decode)
//! - [`identity_rule`]: the per-kind table deciding random vs. content-hash ids
//! - [`AnyDocument`]: decode a raw document by dispatching on its `type` tag
//! - [`ActorManifest`]: what an actor advertises it can consume
//!
//! ```
//! use starintel_doc::{Document, new_host};
//!
//! let a = new_host("net-scan", "gw.example", "10.0.0.1").unwrap();
//! let b = new_host("net-scan", "router", "10.0.0.1").unwrap();
//! assert_eq!(a.id(), b.id());
//! ```

mod any;
mod document;
mod error;
mod identity;
mod kind;
mod kinds;
mod manifest;
mod meta;
mod render;

pub use any::AnyDocument;
pub use document::Document;
pub use error::{DocError, DocResult};
pub use identity::{HashField, IdentityRule, derive_id, hash_inputs, identity_rule};
pub use kind::DocType;
pub use kinds::{
    Address, Domain, Email, EmailMessage, Geo, Host, Message, Network, Org, Person, Phone,
    Relation, Scope, Service, SocialMediaPost, Target, Url, User, new_address, new_domain,
    new_email, new_email_from_string, new_email_message, new_geo, new_host, new_message,
    new_network, new_org, new_person, new_phone, new_relation, new_social_media_post, new_target,
    new_url, new_user,
};
pub use manifest::{ActorManifest, new_actor_manifest};
pub use meta::Meta;

/// Schema revision written to every document's `schemaVersion`.
pub const SCHEMA_VERSION: &str = "0.7.3";

/// Dataset a document belongs to before it is finalized.
pub const DEFAULT_DATASET: &str = "star-intel";
