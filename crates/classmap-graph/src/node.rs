//! Node types for the portion graph.

use serde::{Deserialize, Serialize};

/// What a portion-graph node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A data member of the class.
    Attribute,

    /// A member function of the class.
    Operation,

    /// A symbol outside the class, reached through a base-class member
    /// reference. Named after the defining class.
    ExternalRef,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Attribute => "attribute",
            Self::Operation => "operation",
            Self::ExternalRef => "external_ref",
        };
        write!(f, "{}", s)
    }
}

/// One vertex of the portion graph.
///
/// `(name, kind)` is unique within a graph; the registry deduplicates on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortionNode {
    pub name: String,
    pub kind: NodeKind,
}

impl PortionNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
