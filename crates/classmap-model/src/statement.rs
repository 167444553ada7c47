//! Statement sequences attached to operations.
//!
//! Statements are the flattened bodies the analyzer records per operation:
//! calls, variable references, and nesting markers for control structures.
//! The graph crate only pattern-matches on them; it never mutates them.

use serde::{Deserialize, Serialize};

/// The declared (static) type of a call or variable-reference target.
///
/// Statements carry the type name rather than a handle into the model so
/// they stay self-contained; resolution goes through
/// [`ModelData::resolve_class`](crate::ModelData::resolve_class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    type_name: String,
}

impl TypeRef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// The referenced type's name. May be empty for unresolved types.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A call to a named function on a receiver of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRef {
    name: String,
    target: TypeRef,
    /// True when the analyzer resolved this call to a member inherited
    /// from a base class rather than a local or unrelated symbol.
    base_member_ref: bool,
}

impl CallRef {
    pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: TypeRef::new(target_type),
            base_member_ref: false,
        }
    }

    /// Marks this call as a base-class member reference.
    pub fn base_member(mut self) -> Self {
        self.base_member_ref = true;
        self
    }

    /// The called function's name, without any qualification.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of the call target.
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    pub fn has_base_member_ref(&self) -> bool {
        self.base_member_ref
    }
}

/// A read or write of a named variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarRef {
    name: String,
    target: TypeRef,
}

impl VarRef {
    pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: TypeRef::new(target_type),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &TypeRef {
        &self.target
    }
}

/// One recorded statement.
///
/// A closed set: the analyzer distinguishes calls and variable references;
/// everything else collapses into the nesting markers, which the graph
/// passes skip over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Call(CallRef),
    VarRef(VarRef),
    OpenNest,
    CloseNest,
}

impl Statement {
    /// Shorthand for a plain call statement.
    pub fn call(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self::Call(CallRef::new(name, target_type))
    }

    /// Shorthand for a call resolved to an inherited base-class member.
    pub fn base_call(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self::Call(CallRef::new(name, target_type).base_member())
    }

    /// Shorthand for a variable-reference statement.
    pub fn var_ref(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self::VarRef(VarRef::new(name, target_type))
    }

    /// True when this statement reaches a member inherited from a base
    /// class.
    pub fn has_base_class_member_ref(&self) -> bool {
        matches!(self, Self::Call(call) if call.has_base_member_ref())
    }

    pub fn as_call(&self) -> Option<&CallRef> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }
}

/// An operation's statement sequence, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statements(Vec<Statement>);

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.0.push(statement);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any statement reads or writes the named attribute.
    pub fn attr_used(&self, attr_name: &str) -> bool {
        self.0
            .iter()
            .any(|stmt| matches!(stmt, Statement::VarRef(var) if var.name() == attr_name))
    }
}

impl<'a> IntoIterator for &'a Statements {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Statement> for Statements {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
