use std::fmt;

use super::errors::CypherGeneratorError;
use crate::config::TranslatorConfig;
use crate::graph_catalog::Field;
use crate::graphql_parser::ast::{Selection, Value};

/// One end of a page: a literal count or a parameter reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    Literal(i64),
    Parameter(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Literal(n) => write!(f, "{}", n),
            Bound::Parameter(name) => write!(f, "${}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub first: Option<Bound>,
    pub offset: Option<Bound>,
}

impl Pagination {
    /// Read the pagination arguments of a selection, falling back to the field's
    /// declared defaults. `null` means no bound.
    pub fn resolve(
        config: &TranslatorConfig,
        field: &Field,
        selection: &Selection<'_>,
    ) -> Result<Self, CypherGeneratorError> {
        Ok(Pagination {
            first: resolve_bound(&config.first_argument, field, selection)?,
            offset: resolve_bound(&config.offset_argument, field, selection)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.offset.is_none()
    }

    /// Slice suffix for a list comprehension, e.g. `[3..5]`.
    pub fn to_slice(&self) -> Option<String> {
        match (&self.first, &self.offset) {
            (None, None) => None,
            (None, Some(offset)) => Some(format!("[{}..]", offset)),
            (Some(first), None) => Some(format!("[0..{}]", first)),
            (Some(first), Some(offset)) => {
                Some(format!("[{}..{}]", offset, slice_end(first, offset)))
            }
        }
    }

    /// ` SKIP o LIMIT f` suffix for a root statement; SKIP always precedes LIMIT.
    pub fn to_skip_limit(&self) -> String {
        let mut clauses = String::new();
        if let Some(offset) = &self.offset {
            clauses.push_str(&format!(" SKIP {}", offset));
        }
        if let Some(first) = &self.first {
            clauses.push_str(&format!(" LIMIT {}", first));
        }
        clauses
    }
}

fn slice_end(first: &Bound, offset: &Bound) -> String {
    match (first, offset) {
        (Bound::Literal(f), Bound::Literal(o)) => match o.checked_add(*f) {
            Some(end) => end.to_string(),
            None => format!("{} + {}", o, f),
        },
        _ => format!("{} + {}", offset, first),
    }
}

fn resolve_bound(
    name: &str,
    field: &Field,
    selection: &Selection<'_>,
) -> Result<Option<Bound>, CypherGeneratorError> {
    let value = match selection.argument(name) {
        Some(value) => value,
        None => match field.argument(name).and_then(|arg| arg.default_value.as_ref()) {
            Some(default) => default,
            None => return Ok(None),
        },
    };

    match value {
        Value::Null => Ok(None),
        Value::Variable(variable) => Ok(Some(Bound::Parameter(variable.to_string()))),
        Value::Int(n) if *n >= 0 => Ok(Some(Bound::Literal(*n))),
        other => Err(CypherGeneratorError::type_mismatch_with_context(
            "a non-negative Int",
            other,
            format!("{}({})", field.name, name),
        )),
    }
}
