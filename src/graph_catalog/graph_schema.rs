use std::collections::HashMap;
use std::fmt;

use crate::graphql_parser::ast::Value;

/// Built-in and custom scalar kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int,
    Float,
    Boolean,
    Id,
    /// A `scalar Name` declaration. Values compile like strings.
    Custom(String),
}

impl ScalarKind {
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ScalarKind::String),
            "Int" => Some(ScalarKind::Int),
            "Float" => Some(ScalarKind::Float),
            "Boolean" => Some(ScalarKind::Boolean),
            "ID" => Some(ScalarKind::Id),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScalarKind::String => "String",
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Float",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Id => "ID",
            ScalarKind::Custom(name) => name,
        }
    }
}

/// The resolved shape of a field or argument. Non-null markers are dropped on resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Scalar(ScalarKind),
    Enum(String),
    List(Box<ValueKind>),
    Object(String),
}

impl ValueKind {
    /// Target entity type, looking through list wrappers.
    pub fn object_type(&self) -> Option<&str> {
        match self {
            ValueKind::Object(name) => Some(name),
            ValueKind::List(inner) => inner.object_type(),
            ValueKind::Scalar(_) | ValueKind::Enum(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ValueKind::List(_))
    }

    /// Scalars, enums, and lists of either.
    pub fn is_leaf(&self) -> bool {
        self.object_type().is_none()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar(scalar) => write!(f, "{}", scalar.name()),
            ValueKind::Enum(name) | ValueKind::Object(name) => write!(f, "{}", name),
            ValueKind::List(inner) => write!(f, "[{}]", inner),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("OUT") {
            Some(Direction::Outgoing)
        } else if text.eq_ignore_ascii_case("IN") {
            Some(Direction::Incoming)
        } else {
            None
        }
    }
}

/// Graph relationship backing an object-valued field, from `@relation(name:, direction:)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInfo {
    pub relationship_type: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDecl {
    pub name: String,
    pub kind: ValueKind,
    pub default_value: Option<Value<'static>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: ValueKind,
    pub relation: Option<RelationInfo>,
    pub arguments: Vec<ArgumentDecl>,
}

impl Field {
    pub fn argument(&self, name: &str) -> Option<&ArgumentDecl> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub fields: Vec<Field>,
}

impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumType {
    pub fn contains(&self, symbol: &str) -> bool {
        self.values.iter().any(|value| value == symbol)
    }
}

/// Frozen schema model. Built once by [`super::schema_builder`], read-only afterwards,
/// and safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    query: ObjectType,
    types: HashMap<String, ObjectType>,
    enums: HashMap<String, EnumType>,
}

impl Schema {
    pub(super) fn new(
        query: ObjectType,
        types: HashMap<String, ObjectType>,
        enums: HashMap<String, EnumType>,
    ) -> Self {
        Schema {
            query,
            types,
            enums,
        }
    }

    /// The root type whose fields are the query entry points.
    pub fn query_type(&self) -> &ObjectType {
        &self.query
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.types.get(name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.get(name)
    }

    /// Entity type names, sorted for stable output.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
