//! Classmap Graph - Per-class portion graphs
//!
//! Builds, for a single class, the directed graph of how its attributes,
//! operations, and references to inherited members depend on one another.
//! An external renderer draws the result as an intra-class relationship
//! diagram.
//!
//! # Architecture
//!
//! The graph wraps petgraph with a `(name, kind)` key index:
//! - node identities are append-only integer handles, stable for the
//!   lifetime of one build
//! - [`PortionGraph::clear_and_add_class`] is the sole mutator: it resets
//!   the graph, seeds member nodes in declaration order, then runs three
//!   edge-inference passes (base-member references, attribute usage,
//!   intra-class calls)
//!
//! # Example
//!
//! ```
//! use classmap_graph::{NodeKind, PortionGraph};
//! use classmap_model::{Classifier, ModelData, ModelType, Operation, Statement};
//!
//! let mut model = ModelData::new();
//! model
//!     .add_type(ModelType::Class(
//!         Classifier::new("Engine")
//!             .with_attribute("rpm")
//!             .with_operation(
//!                 Operation::new("throttle").with_statement(Statement::var_ref("rpm", "int")),
//!             ),
//!     ))
//!     .unwrap();
//!
//! let mut graph = PortionGraph::new();
//! graph.clear_and_add_class(&model, "Engine");
//!
//! assert_eq!(graph.node_count(), 2);
//! let rpm = graph.find("rpm", NodeKind::Attribute).unwrap();
//! assert_eq!(graph.consumers_of(rpm)[0].name, "throttle");
//! ```

mod builder;
mod edge;
mod graph;
mod node;

pub use edge::{ConnectionKind, PortionConnection};
pub use graph::{GraphStats, NodeId, PortionGraph};
pub use node::{NodeKind, PortionNode};
