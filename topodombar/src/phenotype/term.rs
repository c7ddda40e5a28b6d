use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt::Display;

use arcstr::ArcStr;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    getter_fn,
    with_field_fn,
};

/// Identifier of an ontology term, e.g. `HP:0001250`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TermId(ArcStr);

/// Sorted set of term identifiers.
pub type TermSet = BTreeSet<TermId>;

impl TermId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TermId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value.trim()))
    }
}

impl From<ArcStr> for TermId {
    fn from(value: ArcStr) -> Self {
        Self(value)
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TermId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ontology term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    id:          TermId,
    name:        ArcStr,
    parents:     Vec<TermId>,
    alt_ids:     Vec<TermId>,
    obsolete:    bool,
    replaced_by: Option<TermId>,
}

impl Term {
    pub fn new(
        id: TermId,
        name: ArcStr,
    ) -> Self {
        Self {
            id,
            name,
            parents: Vec::new(),
            alt_ids: Vec::new(),
            obsolete: false,
            replaced_by: None,
        }
    }

    getter_fn!(id, TermId);
    getter_fn!(name, ArcStr);
    getter_fn!(parents, Vec<TermId>);
    getter_fn!(alt_ids, Vec<TermId>);
    getter_fn!(replaced_by, Option<TermId>);

    with_field_fn!(name, ArcStr);
    with_field_fn!(parents, Vec<TermId>);
    with_field_fn!(alt_ids, Vec<TermId>);
    with_field_fn!(obsolete, bool);
    with_field_fn!(replaced_by, Option<TermId>);

    pub fn is_obsolete(&self) -> bool {
        self.obsolete
    }
}
