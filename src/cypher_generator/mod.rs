//! Cypher generation from a parsed query and a resolved schema.
//!
//! Each root selection becomes one `MATCH (var:Label) [WHERE ...] RETURN var {...}`
//! statement. Nested relations are projected inline as pattern comprehensions, so a
//! statement never needs more than one `MATCH`.

mod context;
pub mod errors;
pub mod pagination;
mod pattern;
mod predicate;
mod projection;
mod statement;
pub mod value;

pub use errors::CypherGeneratorError;
pub use statement::compile_statement;

use crate::config::TranslatorConfig;
use crate::graph_catalog::Schema;
use crate::graphql_parser::ast::Selection;

/// Compile every root selection in document order. Fails on the first error.
pub fn generate_cypher(
    schema: &Schema,
    config: &TranslatorConfig,
    selections: &[Selection<'_>],
) -> Result<Vec<String>, CypherGeneratorError> {
    selections
        .iter()
        .map(|selection| compile_statement(schema, config, selection))
        .collect()
}
