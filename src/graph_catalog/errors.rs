//! # Graph Schema Error Types
//!
//! Errors raised while loading an SDL schema and resolving it into the frozen
//! [`Schema`](super::Schema) model.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the SDL text does not parse
//! - **Resolution Errors**: unknown or duplicate type, field, argument or enum value names
//! - **Relation Errors**: missing, misplaced or malformed `@relation` directives
//! - **Default Errors**: a declared default does not fit its argument type
//! - **I/O Errors**: the schema file could not be read

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphSchemaError {
    #[error("Failed to parse schema definition: {message}")]
    SdlParse { message: String },
    #[error("Unknown type `{type_name}`")]
    UnknownType { type_name: String },
    #[error("Duplicate {kind} `{name}`")]
    Duplicate { kind: &'static str, name: String },
    #[error("Root query type `{type_name}` is not defined")]
    MissingRootType { type_name: String },
    #[error("Root field `{field}` must return an object type or a list of one, found `{found}`")]
    InvalidRootField { field: String, found: String },
    #[error("Invalid relation on `{type_name}.{field}`: {message}")]
    InvalidRelation {
        type_name: String,
        field: String,
        message: String,
    },
    #[error("Unsupported directive `@{directive}` on `{type_name}.{field}`")]
    UnsupportedDirective {
        type_name: String,
        field: String,
        directive: String,
    },
    #[error("Argument `{argument}` of `{type_name}.{field}` must be a scalar, enum or list type, found `{found}`")]
    InvalidArgumentType {
        type_name: String,
        field: String,
        argument: String,
        found: String,
    },
    #[error("Invalid default for argument `{argument}` of `{type_name}.{field}`: {message}")]
    InvalidDefault {
        type_name: String,
        field: String,
        argument: String,
        message: String,
    },
    #[error("Failed to read schema file: {error}")]
    SchemaReadError { error: String },
}

/// Helper methods for creating errors with context information
impl GraphSchemaError {
    /// Create an UnknownType error with the location of the reference.
    ///
    /// # Example
    /// ```ignore
    /// GraphSchemaError::unknown_type_with_context("Company", "Person.worksAt")
    /// ```
    pub fn unknown_type_with_context(
        type_name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        GraphSchemaError::UnknownType {
            type_name: format!("{}\n  Context: referenced by {}", type_name.into(), context.into()),
        }
    }

    pub fn invalid_relation(
        type_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        GraphSchemaError::InvalidRelation {
            type_name: type_name.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}
