//! Schema model for the translator: SDL parsing, resolution and the frozen
//! [`Schema`] the Cypher generator reads from.

pub mod errors;
pub mod graph_schema;
pub mod schema_builder;
pub mod sdl_parser;

pub use errors::GraphSchemaError;
pub use graph_schema::{
    ArgumentDecl, Direction, EnumType, Field, ObjectType, RelationInfo, ScalarKind, Schema,
    ValueKind,
};
pub use schema_builder::build_schema;
