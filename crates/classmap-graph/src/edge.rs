//! Connection types for the portion graph.
//!
//! Connections are directed supplier→consumer edges: the supplier is
//! depended upon, the consumer depends on it. Renderers draw the arrow
//! from supplier to consumer.

use serde::{Deserialize, Serialize};

/// Which inference pass produced a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// An operation reaches an inherited base-class member.
    BaseMemberRef,

    /// An operation reads or writes an attribute.
    AttributeUse,

    /// An operation calls another operation of the same class.
    Call,
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BaseMemberRef => "base_member_ref",
            Self::AttributeUse => "attribute_use",
            Self::Call => "call",
        };
        write!(f, "{}", s)
    }
}

/// A connection as exported to consumers.
///
/// `supplier` and `consumer` are stable integer indices into the graph's
/// node list. They are assigned append-only and never reused within one
/// build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortionConnection {
    pub supplier: usize,
    pub consumer: usize,
    pub kind: ConnectionKind,
}
