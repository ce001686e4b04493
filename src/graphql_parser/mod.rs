//! Parser for the read-only subset of GraphQL executable documents.
//!
//! Produces a borrowed [`ast::QueryDocument`]. Mutations and subscriptions
//! parse syntactically but are rejected by [`parse_query`], so nothing
//! downstream ever sees a write operation. Fragments, directives and input
//! object values are not part of the supported grammar.

use ast::{OperationKind, QueryDocument};
use errors::GraphQLParsingError;

pub mod ast;
pub(crate) mod common;
pub mod errors;
mod operation;
pub(crate) mod selection_set;
pub(crate) mod type_ref;
pub(crate) mod value;

pub use operation::parse_document;

/// Parse a complete query document, requiring all input to be consumed.
pub fn parse_query(input: &'_ str) -> Result<QueryDocument<'_>, GraphQLParsingError<'_>> {
    match parse_document(input) {
        Ok((remainder, document)) => {
            let trimmed = remainder.trim();
            if !trimmed.is_empty() {
                return Err(GraphQLParsingError {
                    errors: vec![
                        (remainder, "Unexpected tokens after operation"),
                        (trimmed, "Unparsed input"),
                    ],
                });
            }
            match document.kind {
                OperationKind::Query => Ok(document),
                OperationKind::Mutation => Err(GraphQLParsingError::new(
                    input.trim_start(),
                    "Mutations are not supported; only read queries can be translated",
                )),
                OperationKind::Subscription => Err(GraphQLParsingError::new(
                    input.trim_start(),
                    "Subscriptions are not supported; only read queries can be translated",
                )),
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(GraphQLParsingError::new("", "Incomplete input")),
    }
}
