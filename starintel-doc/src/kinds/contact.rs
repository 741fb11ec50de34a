//! Ways to reach someone: phone numbers, email accounts, and online accounts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::impl_document;
use crate::{DocError, DocResult, DocType, Document, Meta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(flatten)]
    pub meta: Meta,
    pub number: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub status: String,
    /// Line type, e.g. "mobile" or "landline".
    #[serde(default)]
    pub phone_type: String,
}

impl Phone {
    /// Creates an unidentified phone record.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Phone),
            number: number.into(),
            carrier: String::new(),
            status: String::new(),
            phone_type: String::new(),
        }
    }
}

impl_document!(Phone, DocType::Phone, ["number"]);

/// An email account, optionally paired with a leaked password.
///
/// The password joins the identity only when known, so `user@domain` and
/// `user@domain:hunter2` are separate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub password: String,
}

impl Email {
    /// Creates an unidentified account with no password.
    pub fn new(user: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Email),
            user: user.into(),
            domain: domain.into(),
            password: String::new(),
        }
    }

    /// Splits `user@domain`. Exactly one `@` is accepted.
    pub fn parse(address: &str) -> DocResult<Self> {
        match address.split_once('@') {
            Some((user, domain)) if !domain.contains('@') => Ok(Self::new(user, domain)),
            _ => Err(DocError::InvalidEmail(address.to_string())),
        }
    }

    /// The address as `user@domain`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.user, self.domain)
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl_document!(Email, DocType::Email, []);

/// An account on an online platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub meta: Meta,
    /// Profile URL.
    pub url: String,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub misc: Vec<Value>,
    #[serde(default)]
    pub bio: String,
}

impl User {
    /// Creates an unidentified account record.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            meta: Meta::new(DocType::User),
            url: url.into(),
            name: name.into(),
            platform: platform.into(),
            misc: Vec::new(),
            bio: String::new(),
        }
    }
}

impl_document!(User, DocType::User, ["url", "name", "platform"]);

/// Creates a finalized [`Phone`] in `dataset`, identified by number.
pub fn new_phone(dataset: impl Into<String>, number: impl Into<String>) -> DocResult<Phone> {
    Phone::new(number).finalized(dataset)
}

/// Creates a finalized [`Email`] in `dataset`, identified by user and domain.
pub fn new_email(
    dataset: impl Into<String>,
    user: impl Into<String>,
    domain: impl Into<String>,
) -> DocResult<Email> {
    Email::new(user, domain).finalized(dataset)
}

/// Parses `user@domain` and creates a finalized [`Email`] in `dataset`.
pub fn new_email_from_string(dataset: impl Into<String>, address: &str) -> DocResult<Email> {
    Email::parse(address)?.finalized(dataset)
}

/// Creates a finalized [`User`] in `dataset`, identified by name, URL, and platform.
pub fn new_user(
    dataset: impl Into<String>,
    name: impl Into<String>,
    url: impl Into<String>,
    platform: impl Into<String>,
) -> DocResult<User> {
    User::new(name, url, platform).finalized(dataset)
}
