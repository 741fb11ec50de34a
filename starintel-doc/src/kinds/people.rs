use serde::{Deserialize, Serialize};

use crate::document::impl_document;
use crate::{DocResult, DocType, Document, Meta};

/// A human being.
///
/// Person records are never deduplicated by content: two people with the same
/// name and birth date are not assumed to be the same person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(flatten)]
    pub meta: Meta,
    /// Free-text entity classification (e.g. "suspect", "employee").
    #[serde(default)]
    pub etype: String,
    /// Identifier of this entity in an external system.
    #[serde(default)]
    pub eid: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub mname: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub bio: String,
    /// Date of birth, as collected.
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub misc: Vec<String>,
}

impl Person {
    /// Creates an unidentified person.
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            fname: fname.into(),
            lname: lname.into(),
            ..Self::default()
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self {
            meta: Meta::new(DocType::Person),
            etype: String::new(),
            eid: String::new(),
            fname: String::new(),
            lname: String::new(),
            mname: String::new(),
            gender: String::new(),
            bio: String::new(),
            dob: String::new(),
            race: String::new(),
            misc: Vec::new(),
        }
    }
}

impl_document!(Person, DocType::Person, []);

/// An organization: company, NGO, or government agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub etype: String,
    #[serde(default)]
    pub eid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub bio: String,
    /// Registration number with the issuing authority.
    #[serde(default)]
    pub reg: String,
}

impl Org {
    /// Creates an unidentified organization.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Org {
    fn default() -> Self {
        Self {
            meta: Meta::new(DocType::Org),
            etype: String::new(),
            eid: String::new(),
            name: String::new(),
            website: String::new(),
            country: String::new(),
            bio: String::new(),
            reg: String::new(),
        }
    }
}

impl_document!(Org, DocType::Org, []);

/// Creates a finalized [`Person`] in `dataset` with a random id.
pub fn new_person(
    dataset: impl Into<String>,
    fname: impl Into<String>,
    lname: impl Into<String>,
    etype: impl Into<String>,
) -> DocResult<Person> {
    let mut person = Person::new(fname, lname);
    person.etype = etype.into();
    person.finalized(dataset)
}

/// Creates a finalized [`Org`] in `dataset`, identified by name, registration, and country.
pub fn new_org(
    dataset: impl Into<String>,
    name: impl Into<String>,
    etype: impl Into<String>,
) -> DocResult<Org> {
    let mut org = Org::new(name);
    org.etype = etype.into();
    org.finalized(dataset)
}
