//! Classmap Model - The parsed object model
//!
//! This crate holds the in-memory snapshot of an analyzed codebase that the
//! graph crate reads: types, classifiers with their attributes and
//! operations, and each operation's statement sequence.
//!
//! The model is built once (by an external analysis loader, or by hand in
//! tests) and then treated as immutable. Nothing in this crate touches the
//! filesystem.
//!
//! # Example
//!
//! ```
//! use classmap_model::{Classifier, ModelData, ModelType, Operation, Statement};
//!
//! let mut model = ModelData::new();
//! model
//!     .add_type(ModelType::Class(
//!         Classifier::new("Engine")
//!             .with_attribute("rpm")
//!             .with_operation(Operation::new("throttle").with_statement(Statement::var_ref("rpm", "int"))),
//!     ))
//!     .unwrap();
//!
//! let cls = model.find_type("Engine").and_then(ModelType::as_class).unwrap();
//! assert!(cls.operations()[0].statements().attr_used("rpm"));
//! ```

mod error;
mod model;
mod statement;

pub use error::ModelError;
pub use model::{Attribute, Classifier, DataType, ModelData, ModelType, Operation};
pub use statement::{CallRef, Statement, Statements, TypeRef, VarRef};
