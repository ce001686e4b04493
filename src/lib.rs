//! graphql-cypher - translate GraphQL read queries into Cypher
//!
//! This crate turns a GraphQL query, checked against an SDL schema annotated with
//! `@relation` directives, into one Cypher statement per root field:
//! - GraphQL query parsing (read-only subset)
//! - SDL schema loading and validation
//! - Cypher generation with inline pattern comprehensions for relations
//! - Parameter collection for bound variables
//!
//! ```ignore
//! use graphql_cypher::{Schema, Translator};
//!
//! let schema = Schema::from_sdl_file("schema.graphql")?;
//! let translation = Translator::new(schema).translate("{ person { name } }")?;
//! assert_eq!(translation.statements[0], "MATCH (person:Person) RETURN person {.name}");
//! ```

pub mod config;
pub mod cypher_generator;
pub mod graph_catalog;
pub mod graphql_parser;
pub mod translator;

pub use config::TranslatorConfig;
pub use cypher_generator::CypherGeneratorError;
pub use graph_catalog::{GraphSchemaError, Schema};
pub use translator::{translate, Translation, TranslationError, Translator};
