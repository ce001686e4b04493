use std::{borrow::Cow, fmt};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
            OperationKind::Subscription => write!(f, "subscription"),
        }
    }
}

/// A single GraphQL operation. Anonymous `{ ... }` documents parse as an unnamed query.
#[derive(Debug, PartialEq, Clone)]
pub struct QueryDocument<'a> {
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub variable_definitions: Vec<VariableDefinition<'a>>,
    pub selection_set: Vec<Selection<'a>>,
}

impl<'a> QueryDocument<'a> {
    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition<'a>> {
        self.variable_definitions.iter().find(|def| def.name == name)
    }

    /// Names of all variables used in argument position, in order of first use.
    pub fn referenced_variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for selection in &self.selection_set {
            selection.collect_variables(&mut names);
        }
        names
    }
}

/// `$name: Type = default`
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    pub name: &'a str,
    pub var_type: TypeRef<'a>,
    pub default_value: Option<Value<'a>>,
}

/// A type reference as written, e.g. `[Int!]!`.
#[derive(Debug, PartialEq, Clone)]
pub enum TypeRef<'a> {
    Named(&'a str),
    List(Box<TypeRef<'a>>),
    NonNull(Box<TypeRef<'a>>),
}

impl<'a> TypeRef<'a> {
    /// The innermost named type, ignoring list and non-null wrappers.
    pub fn base_name(&self) -> &'a str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Selection<'a> {
    pub alias: Option<&'a str>,
    pub name: &'a str,
    pub arguments: Vec<Argument<'a>>,
    pub selection_set: Vec<Selection<'a>>,
}

impl<'a> Selection<'a> {
    /// The response key: alias if present, otherwise the field name.
    pub fn key(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    pub fn argument(&self, name: &str) -> Option<&Value<'a>> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }

    fn collect_variables<'s>(&'s self, names: &mut Vec<&'s str>) {
        for arg in &self.arguments {
            arg.value.collect_variables(names);
        }
        for child in &self.selection_set {
            child.collect_variables(names);
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Cow<'a, str>),
    Int(i64),
    Float(f64),
    String(Cow<'a, str>),
    Boolean(bool),
    Null,
    Enum(Cow<'a, str>),
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Detach from the source text so the value can live in a long-lived schema.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Variable(name) => Value::Variable(Cow::Owned(name.into_owned())),
            Value::Int(i) => Value::Int(i),
            Value::Float(f) => Value::Float(f),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Boolean(b) => Value::Boolean(b),
            Value::Null => Value::Null,
            Value::Enum(symbol) => Value::Enum(Cow::Owned(symbol.into_owned())),
            Value::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
        }
    }

    fn collect_variables<'s>(&'s self, names: &mut Vec<&'s str>) {
        match self {
            Value::Variable(name) => {
                let name: &str = name;
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            Value::List(items) => {
                for item in items {
                    item.collect_variables(names);
                }
            }
            _ => {}
        }
    }
}

/// Renders the value back in GraphQL syntax (used in error messages).
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Variable(name) => write!(f, "${}", name),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Enum(symbol) => write!(f, "{}", symbol),
            Value::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
