//! The closed set of document kinds and their external type tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DocError, DocResult};

/// Every document kind the schema defines.
///
/// Serialized as the lower-case tag stored in each document's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Person,
    Org,
    Domain,
    Network,
    Host,
    Url,
    Geo,
    Address,
    Phone,
    Relation,
    Message,
    SocialMediaPost,
    Target,
    Email,
    EmailMessage,
    User,
    #[serde(rename = "actor-manifest")]
    ActorManifest,
}

impl DocType {
    /// All kinds, in declaration order.
    pub const ALL: [DocType; 17] = [
        DocType::Person,
        DocType::Org,
        DocType::Domain,
        DocType::Network,
        DocType::Host,
        DocType::Url,
        DocType::Geo,
        DocType::Address,
        DocType::Phone,
        DocType::Relation,
        DocType::Message,
        DocType::SocialMediaPost,
        DocType::Target,
        DocType::Email,
        DocType::EmailMessage,
        DocType::User,
        DocType::ActorManifest,
    ];

    /// The tag written to the `type` field.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            DocType::Person => "person",
            DocType::Org => "org",
            DocType::Domain => "domain",
            DocType::Network => "network",
            DocType::Host => "host",
            DocType::Url => "url",
            DocType::Geo => "geo",
            DocType::Address => "address",
            DocType::Phone => "phone",
            DocType::Relation => "relation",
            DocType::Message => "message",
            DocType::SocialMediaPost => "socialmediapost",
            DocType::Target => "target",
            DocType::Email => "email",
            DocType::EmailMessage => "emailmessage",
            DocType::User => "user",
            DocType::ActorManifest => "actor-manifest",
        }
    }

    /// Looks up a kind by its exact tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocType {
    type Err = DocError;

    fn from_str(s: &str) -> DocResult<Self> {
        Self::from_tag(s).ok_or_else(|| DocError::TypeTagMismatch {
            expected: None,
            found: Some(s.to_string()),
        })
    }
}
