//! Polymorphic decoding by `type` tag.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::document::tag_text;
use crate::{
    ActorManifest, Address, DocError, DocResult, DocType, Document, Domain, Email, EmailMessage,
    Geo, Host, Message, Network, Org, Person, Phone, Relation, SocialMediaPost, Target, Url, User,
};

/// A document of any kind.
///
/// Serializes to the wrapped document's own canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyDocument {
    Person(Person),
    Org(Org),
    Domain(Domain),
    Network(Network),
    Host(Host),
    Url(Url),
    Geo(Geo),
    Address(Address),
    Phone(Phone),
    Relation(Relation),
    Message(Message),
    SocialMediaPost(SocialMediaPost),
    Target(Target),
    Email(Email),
    EmailMessage(EmailMessage),
    User(User),
    ActorManifest(ActorManifest),
}

impl AnyDocument {
    /// Reads `type` and decodes into the matching kind.
    ///
    /// A missing or unrecognized tag is an error; there is no fallback kind.
    pub fn from_value(value: Value) -> DocResult<Self> {
        let found = value.get("type").map(tag_text);
        let Some(kind) = found.as_deref().and_then(DocType::from_tag) else {
            warn!(tag = ?found, "Rejected document with missing or unknown type tag");
            return Err(DocError::TypeTagMismatch {
                expected: None,
                found,
            });
        };

        Ok(match kind {
            DocType::Person => Self::Person(Person::from_value(value)?),
            DocType::Org => Self::Org(Org::from_value(value)?),
            DocType::Domain => Self::Domain(Domain::from_value(value)?),
            DocType::Network => Self::Network(Network::from_value(value)?),
            DocType::Host => Self::Host(Host::from_value(value)?),
            DocType::Url => Self::Url(Url::from_value(value)?),
            DocType::Geo => Self::Geo(Geo::from_value(value)?),
            DocType::Address => Self::Address(Address::from_value(value)?),
            DocType::Phone => Self::Phone(Phone::from_value(value)?),
            DocType::Relation => Self::Relation(Relation::from_value(value)?),
            DocType::Message => Self::Message(Message::from_value(value)?),
            DocType::SocialMediaPost => {
                Self::SocialMediaPost(SocialMediaPost::from_value(value)?)
            }
            DocType::Target => Self::Target(Target::from_value(value)?),
            DocType::Email => Self::Email(Email::from_value(value)?),
            DocType::EmailMessage => Self::EmailMessage(EmailMessage::from_value(value)?),
            DocType::User => Self::User(User::from_value(value)?),
            DocType::ActorManifest => Self::ActorManifest(ActorManifest::from_value(value)?),
        })
    }

    /// Parses JSON text and decodes it by its `type` tag.
    pub fn from_json(json: &str) -> DocResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The wrapped document's canonical form.
    pub fn to_value(&self) -> DocResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The wrapped document's canonical JSON text.
    pub fn to_json(&self) -> DocResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// The wrapped document's kind.
    #[must_use]
    pub fn doc_type(&self) -> DocType {
        match self {
            Self::Person(_) => DocType::Person,
            Self::Org(_) => DocType::Org,
            Self::Domain(_) => DocType::Domain,
            Self::Network(_) => DocType::Network,
            Self::Host(_) => DocType::Host,
            Self::Url(_) => DocType::Url,
            Self::Geo(_) => DocType::Geo,
            Self::Address(_) => DocType::Address,
            Self::Phone(_) => DocType::Phone,
            Self::Relation(_) => DocType::Relation,
            Self::Message(_) => DocType::Message,
            Self::SocialMediaPost(_) => DocType::SocialMediaPost,
            Self::Target(_) => DocType::Target,
            Self::Email(_) => DocType::Email,
            Self::EmailMessage(_) => DocType::EmailMessage,
            Self::User(_) => DocType::User,
            Self::ActorManifest(_) => DocType::ActorManifest,
        }
    }

    /// The wrapped document's id; empty if it was never finalized.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Person(d) => d.id(),
            Self::Org(d) => d.id(),
            Self::Domain(d) => d.id(),
            Self::Network(d) => d.id(),
            Self::Host(d) => d.id(),
            Self::Url(d) => d.id(),
            Self::Geo(d) => d.id(),
            Self::Address(d) => d.id(),
            Self::Phone(d) => d.id(),
            Self::Relation(d) => d.id(),
            Self::Message(d) => d.id(),
            Self::SocialMediaPost(d) => d.id(),
            Self::Target(d) => d.id(),
            Self::Email(d) => d.id(),
            Self::EmailMessage(d) => d.id(),
            Self::User(d) => d.id(),
            Self::ActorManifest(m) => &m.id,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyDocument {
                fn from(doc: $variant) -> Self {
                    Self::$variant(doc)
                }
            }
        )*
    };
}

impl_from_kind!(
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
    ActorManifest,
);
