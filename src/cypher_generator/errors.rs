use std::fmt::Display;

use thiserror::Error;

use crate::graphql_parser::ast::Value;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CypherGeneratorError {
    #[error("Unknown type `{type_name}` ({context})")]
    UnknownType { type_name: String, context: String },
    #[error("Unknown field `{field}` on type `{type_name}`")]
    UnknownField { type_name: String, field: String },
    #[error("Field `{type_name}.{field}` is not a relationship and cannot have a sub-selection")]
    UnresolvedRelation { type_name: String, field: String },
    #[error("Type mismatch: expected {expected}, found `{found}`")]
    TypeMismatch { expected: String, found: String },
    #[error("Unknown argument `{argument}` on field `{field}`")]
    UnknownArgument { field: String, argument: String },
    #[error("Field `{type_name}.{field}` selects an entity and needs a sub-selection")]
    MissingSelection { type_name: String, field: String },
    #[error("Selection depth {depth} exceeds the maximum of {max}")]
    SelectionTooDeep { depth: usize, max: usize },
}

/// Helper methods for creating errors with context information
impl CypherGeneratorError {
    pub fn type_mismatch(expected: impl Display, found: &Value<'_>) -> Self {
        CypherGeneratorError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Create a TypeMismatch error naming the argument the value was supplied for.
    ///
    /// # Example
    /// ```ignore
    /// CypherGeneratorError::type_mismatch_with_context("Int", &value, "person(first)")
    /// ```
    pub fn type_mismatch_with_context(
        expected: impl Display,
        found: &Value<'_>,
        context: impl Display,
    ) -> Self {
        CypherGeneratorError::TypeMismatch {
            expected: format!("{} for {}", expected, context),
            found: found.to_string(),
        }
    }
}
