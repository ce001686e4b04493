use std::io::Write;

use graphql_cypher::{GraphSchemaError, Schema, Translator};

#[test]
fn test_load_schema_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", include_str!("../../fixtures/person.graphql")).unwrap();

    let schema = Schema::from_sdl_file(file.path()).unwrap();
    assert_eq!(schema.query_type().name, "Query");
    let translation = Translator::new(schema)
        .translate("{ person { name } }")
        .unwrap();
    assert_eq!(
        translation.statements,
        vec!["MATCH (person:Person) RETURN person {.name}"]
    );
}

#[test]
fn test_missing_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Schema::from_sdl_file(dir.path().join("absent.graphql")).unwrap_err();
    assert!(matches!(err, GraphSchemaError::SchemaReadError { .. }));
    assert!(err.to_string().contains("absent.graphql"));
}

#[test]
fn test_invalid_schema_file_reports_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "type Query {{\n  person: [Person]\n}}").unwrap();

    let err = Schema::from_sdl_file(file.path()).unwrap_err();
    assert!(matches!(err, GraphSchemaError::UnknownType { .. }));
    assert!(err.to_string().contains("Query.person"));
}

#[test]
fn test_unsupported_sdl_definitions() {
    for sdl in [
        "interface Named { name: String } type Query { a: [A] } type A { name: String }",
        "input Filter { name: String } type Query { a: [A] } type A { name: String }",
        "union Any = A type Query { a: [A] } type A { name: String }",
    ] {
        assert!(
            matches!(Schema::from_sdl(sdl), Err(GraphSchemaError::SdlParse { .. })),
            "expected SDL rejection for {:?}",
            sdl
        );
    }
}

#[test]
fn test_schema_shared_between_translators() {
    let schema = std::sync::Arc::new(
        Schema::from_sdl(include_str!("../../fixtures/movies.graphql")).unwrap(),
    );
    let a = Translator::new(schema.clone());
    let b = Translator::new(schema);
    assert_eq!(
        a.translate("{ actors { name } }").unwrap(),
        b.translate("{ actors { name } }").unwrap()
    );
}
