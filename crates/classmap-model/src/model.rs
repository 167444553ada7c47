//! The model snapshot: types, classifiers, and their members.

use crate::error::ModelError;
use crate::statement::{Statement, Statements, TypeRef};
use serde::{Deserialize, Serialize};

/// A data member of a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A member function of a classifier, with its recorded statement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    name: String,
    statements: Statements,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Statements::new(),
        }
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }
}

/// A class-like type owning attributes and operations.
///
/// Members are kept in declaration order; the portion graph relies on that
/// order for stable node numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    name: String,
    attributes: Vec<Attribute>,
    operations: Vec<Operation>,
}

impl Classifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name));
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Looks up an operation by name, ignoring parameter signatures.
    ///
    /// Overloads are not modeled; the first declaration wins.
    pub fn operation_by_name(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|oper| oper.name() == name)
    }
}

/// A named non-class type (primitive, typedef, template instantiation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
    name: String,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Any type known to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Class(Classifier),
    DataType(DataType),
}

impl ModelType {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(cls) => cls.name(),
            Self::DataType(dt) => dt.name(),
        }
    }

    pub fn as_class(&self) -> Option<&Classifier> {
        match self {
            Self::Class(cls) => Some(cls),
            Self::DataType(_) => None,
        }
    }
}

/// The full model snapshot handed to the graph builder.
///
/// Types are stored in insertion order. The snapshot is append-only while
/// being assembled and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelData {
    types: Vec<ModelType>,
}

impl ModelData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type. Type names are unique within a model.
    pub fn add_type(&mut self, ty: ModelType) -> Result<(), ModelError> {
        if self.find_type(ty.name()).is_some() {
            return Err(ModelError::DuplicateType(ty.name().to_string()));
        }
        self.types.push(ty);
        Ok(())
    }

    pub fn find_type(&self, name: &str) -> Option<&ModelType> {
        self.types.iter().find(|ty| ty.name() == name)
    }

    /// Resolves a statement's declared target type to a classifier.
    ///
    /// Returns `None` when the type is unknown or not a class.
    pub fn resolve_class(&self, target: &TypeRef) -> Option<&Classifier> {
        self.find_type(target.type_name())
            .and_then(ModelType::as_class)
    }

    pub fn types(&self) -> &[ModelType] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_type() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Engine")))
            .unwrap();
        model
            .add_type(ModelType::DataType(DataType::new("int")))
            .unwrap();

        assert_eq!(model.find_type("Engine").unwrap().name(), "Engine");
        assert_eq!(model.find_type("int").unwrap().name(), "int");
        assert!(model.find_type("Gearbox").is_none());
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Engine")))
            .unwrap();

        let err = model
            .add_type(ModelType::DataType(DataType::new("Engine")))
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateType(name) if name == "Engine"));
    }

    #[test]
    fn test_resolve_class_skips_non_classes() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Engine")))
            .unwrap();
        model
            .add_type(ModelType::DataType(DataType::new("int")))
            .unwrap();

        assert!(model.resolve_class(&TypeRef::new("Engine")).is_some());
        assert!(model.resolve_class(&TypeRef::new("int")).is_none());
        assert!(model.resolve_class(&TypeRef::new("Gearbox")).is_none());
    }

    #[test]
    fn test_operation_by_name_first_match() {
        let cls = Classifier::new("Engine")
            .with_operation(Operation::new("start").with_statement(Statement::var_ref("rpm", "int")))
            .with_operation(Operation::new("start"));

        let oper = cls.operation_by_name("start").unwrap();
        assert_eq!(oper.statements().len(), 1);
        assert!(cls.operation_by_name("stop").is_none());
    }
}
