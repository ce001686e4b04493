//! Unit tests for query parsing edge cases and error handling
//!
//! Tests malformed queries, edge cases, and error conditions to ensure
//! robust parsing without panics.

use graphql_cypher::graphql_parser::ast::{OperationKind, Value};
use graphql_cypher::graphql_parser::parse_query;

/// Test that malformed queries don't cause panics
#[test]
fn test_malformed_queries_no_panic() {
    let malformed_queries = vec![
        "",
        "{",
        "}",
        "{ person",
        "{ person { name }",
        "{ person(name: ) { name } }",
        "{ person(name \"Joe\") { name } }",
        "{ person(: 1) { name } }",
        "{ person { name } } trailing",
        "query (",
        "query ($x) { person { name } }",
        "{ person(name: \"unterminated) { name } }",
        "{ person(name: \"\\u12\") { name } }",
        "{ person(age: 99999999999999999999) { name } }",
        "{ person(ids: [1, 2) { name } }",
        "{ ...Frag }",
        "{ person @skip(if: true) { name } }",
        "{ person(filter: { name: \"Joe\" }) { name } }",
    ];

    for query in malformed_queries {
        assert!(parse_query(query).is_err(), "expected parse error for {:?}", query);
    }
}

#[test]
fn test_write_operations_rejected() {
    for query in [
        "mutation { createPerson(name: \"Joe\") { name } }",
        "subscription { person { name } }",
        "{ createPerson() }",
    ] {
        assert!(parse_query(query).is_err(), "expected rejection for {:?}", query);
    }
}

#[test]
fn test_whitespace_commas_and_comments_are_ignored() {
    let doc = parse_query(
        "# leading comment\n query People {\n  person(first: 2,,, offset: 1) { # inline\n name, age }\n}\n",
    )
    .unwrap();
    assert_eq!(doc.kind, OperationKind::Query);
    assert_eq!(doc.name, Some("People"));
    let person = &doc.selection_set[0];
    assert_eq!(person.arguments.len(), 2);
    assert_eq!(person.selection_set.len(), 2);
}

#[test]
fn test_value_forms() {
    let doc = parse_query(
        r#"{ p:values(a: -3, b: 1.5e2, c: "tab\there \u0041", d: [true, null, RED], e: $v) { age } }"#,
    )
    .unwrap();
    let sel = &doc.selection_set[0];
    assert_eq!(sel.argument("a"), Some(&Value::Int(-3)));
    assert_eq!(sel.argument("b"), Some(&Value::Float(150.0)));
    assert_eq!(sel.argument("c"), Some(&Value::String("tab\there A".into())));
    assert_eq!(
        sel.argument("d"),
        Some(&Value::List(vec![
            Value::Boolean(true),
            Value::Null,
            Value::Enum("RED".into())
        ]))
    );
    assert_eq!(sel.argument("e"), Some(&Value::Variable("v".into())));
}

#[test]
fn test_variable_definitions() {
    let doc =
        parse_query("query Q($n: String = \"Joe\", $ids: [ID!]!) { person(name: $n) { name } }")
            .unwrap();
    assert_eq!(doc.variable_definitions.len(), 2);
    let n = doc.variable_definition("n").unwrap();
    assert_eq!(n.default_value, Some(Value::String("Joe".into())));
    let ids = doc.variable_definition("ids").unwrap();
    assert_eq!(ids.var_type.to_string(), "[ID!]!");
    assert_eq!(doc.referenced_variables(), vec!["n"]);
}

#[test]
fn test_variable_default_must_be_constant() {
    assert!(parse_query("query($a: Int = $b) { person(age: $a) { name } }").is_err());
}

#[test]
fn test_deeply_nested_selection_parses() {
    let depth = 50;
    let query = format!(
        "{{ person {}name{} }}",
        "{ livesIn ".repeat(depth),
        " }".repeat(depth)
    );
    // Shape is nonsense for the schema, but parsing must not blow up.
    assert!(parse_query(&query).is_ok());
}
