//! Core portion graph data structure.
//!
//! The PortionGraph wraps petgraph and adds a key index for node
//! deduplication. Nodes are only ever appended during a build, so petgraph
//! indices are stable and double as the integer identities handed to
//! renderers.

use crate::edge::{ConnectionKind, PortionConnection};
use crate::node::{NodeKind, PortionNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashMap;

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// The per-class relationship graph.
///
/// Holds the attributes, operations, and external references of one class
/// as nodes, and their supplier→consumer dependencies as edges. Rebuilt
/// from scratch by [`clear_and_add_class`](PortionGraph::clear_and_add_class);
/// read-only between builds.
#[derive(Debug, Serialize)]
pub struct PortionGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<PortionNode, ConnectionKind>,

    /// Maps `(name, kind)` to node ids for dedup lookups.
    #[serde(skip)]
    key_index: HashMap<(String, NodeKind), NodeId>,
}

impl Default for PortionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PortionGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            key_index: HashMap::new(),
        }
    }

    /// Returns the node with this `(name, kind)`, appending it first if it
    /// does not exist yet. Never removes or renumbers existing nodes.
    pub(crate) fn get_or_create(&mut self, name: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.key_index.get(&(name.to_string(), kind)) {
            return id;
        }
        let id = self.graph.add_node(PortionNode::new(name, kind));
        self.key_index.insert((name.to_string(), kind), id);
        id
    }

    /// Records a supplier→consumer connection.
    pub(crate) fn connect(&mut self, supplier: NodeId, consumer: NodeId, kind: ConnectionKind) {
        self.graph.add_edge(supplier, consumer, kind);
    }

    /// Discards all nodes and connections.
    pub(crate) fn clear(&mut self) {
        self.graph.clear();
        self.key_index.clear();
    }

    /// Looks up a node id by `(name, kind)`.
    pub fn find(&self, name: &str, kind: NodeKind) -> Option<NodeId> {
        self.key_index.get(&(name.to_string(), kind)).copied()
    }

    /// Gets a node by its id.
    pub fn node(&self, id: NodeId) -> Option<&PortionNode> {
        self.graph.node_weight(id)
    }

    /// Iterates over all nodes in insertion order.
    ///
    /// Positions match the indices used in [`connections`](Self::connections).
    pub fn nodes(&self) -> impl Iterator<Item = &PortionNode> {
        self.graph.node_weights()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of connections.
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns all connections in recording order.
    pub fn connections(&self) -> Vec<PortionConnection> {
        self.graph
            .edge_references()
            .map(|edge_ref| PortionConnection {
                supplier: edge_ref.source().index(),
                consumer: edge_ref.target().index(),
                kind: *edge_ref.weight(),
            })
            .collect()
    }

    /// Gets the nodes the given node depends on.
    pub fn suppliers_of(&self, id: NodeId) -> Vec<&PortionNode> {
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    /// Gets the nodes depending on the given node.
    pub fn consumers_of(&self, id: NodeId) -> Vec<&PortionNode> {
        self.graph
            .neighbors_directed(id, Direction::Outgoing)
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }
}

/// Graph statistics for consumers that only need sizes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub connection_count: usize,
}

impl PortionGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            connection_count: self.connection_count(),
        }
    }
}
