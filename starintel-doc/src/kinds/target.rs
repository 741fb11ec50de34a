//! Collection targets handed to actors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::impl_document;
use crate::{DocError, DocResult, DocType, Document, Meta};

/// A unit of work for an actor: what to collect, and how often.
///
/// The id covers the dataset as well as the target and actor, so the same
/// target queued for the same actor in two datasets is two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(flatten)]
    pub meta: Meta,
    /// Name of the actor that should process this target.
    pub actor: String,
    pub target: String,
    /// Seconds to wait between runs.
    #[serde(default)]
    pub delay: i64,
    #[serde(default)]
    pub recurring: bool,
    /// Actor-specific options; scopes are stored here too.
    #[serde(default)]
    pub options: Vec<Value>,
}

impl Target {
    /// Creates an unidentified, one-shot target with no options.
    pub fn new(target: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            meta: Meta::new(DocType::Target),
            actor: actor.into(),
            target: target.into(),
            delay: 0,
            recurring: false,
            options: Vec::new(),
        }
    }

    /// Appends `scope` to the target's options.
    pub fn add_scope(&mut self, scope: &Scope) -> DocResult<()> {
        self.options.push(serde_json::to_value(scope)?);
        Ok(())
    }

    /// Scopes found among the options.
    ///
    /// An option is a scope when it carries a `description`; other options
    /// belong to the actor and are not returned. A scope that does not decode
    /// is an error.
    pub fn scopes(&self) -> DocResult<Vec<Scope>> {
        self.options
            .iter()
            .filter(|option| option.get("description").is_some())
            .map(|option| serde_json::from_value::<Scope>(option.clone()).map_err(DocError::from))
            .collect()
    }
}

impl_document!(Target, DocType::Target, ["actor", "target"]);

/// What an actor may and may not touch while working a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    pub description: String,
    #[serde(default)]
    pub outscope: Vec<String>,
    #[serde(default)]
    pub inscope: Vec<String>,
    #[serde(default = "default_scope_type")]
    pub scope_type: String,
}

impl Scope {
    /// Creates an empty domain scope.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            outscope: Vec::new(),
            inscope: Vec::new(),
            scope_type: default_scope_type(),
        }
    }

    /// Marks `thing` as in scope.
    pub fn add_inscope(&mut self, thing: impl Into<String>) {
        self.inscope.push(thing.into());
    }

    /// Marks `thing` as out of scope.
    pub fn add_outscope(&mut self, thing: impl Into<String>) {
        self.outscope.push(thing.into());
    }
}

fn default_scope_type() -> String {
    "domain".into()
}

/// Creates a finalized [`Target`] in `dataset`, identified by dataset, target, and actor.
pub fn new_target(
    dataset: impl Into<String>,
    target: impl Into<String>,
    actor: impl Into<String>,
) -> DocResult<Target> {
    Target::new(target, actor).finalized(dataset)
}
