use serde::{Deserialize, Serialize};

use crate::document::impl_document;
use crate::{DocResult, DocType, Document, Meta};

/// An analyst-asserted link between two documents.
///
/// Relations always get a random id: the same link asserted twice is two
/// assertions, not one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(flatten)]
    pub meta: Meta,
    /// Id of the document the relation starts at.
    #[serde(default)]
    pub source: String,
    /// Id of the document the relation points to.
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub note: String,
}

impl Relation {
    /// Creates an unidentified relation from `source` to `target`.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            meta: Meta::new(DocType::Relation),
            source: source.into(),
            target: target.into(),
            note: note.into(),
        }
    }
}

impl Default for Relation {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl_document!(Relation, DocType::Relation, []);

/// Creates a finalized [`Relation`] in `dataset` with a random id.
pub fn new_relation(
    dataset: impl Into<String>,
    source: impl Into<String>,
    target: impl Into<String>,
    note: impl Into<String>,
) -> DocResult<Relation> {
    Relation::new(source, target, note).finalized(dataset)
}
