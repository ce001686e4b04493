//! End-to-end translation scenarios against the person/location fixture schema.

use graphql_cypher::{
    CypherGeneratorError, Schema, TranslationError, Translator, TranslatorConfig,
};

const PERSON_SDL: &str = include_str!("../../fixtures/person.graphql");

fn translator() -> Translator {
    Translator::new(Schema::from_sdl(PERSON_SDL).expect("fixture schema loads"))
}

fn assert_translation(query: &str, expected: &[&str]) {
    let translation = translator()
        .translate(query)
        .unwrap_or_else(|e| panic!("failed to translate {}: {}", query, e));
    assert_eq!(translation.statements, expected, "query: {}", query);
}

#[test]
fn test_simple_cypher_query() {
    assert_translation(
        " { person { name age } } ",
        &["MATCH (person:Person) RETURN person {.name,.age}"],
    );
}

#[test]
fn test_multi_cypher_query() {
    assert_translation(
        " { p1: person { name } p2: person { name } } ",
        &[
            "MATCH (p1:Person) RETURN p1 {.name}",
            "MATCH (p2:Person) RETURN p2 {.name}",
        ],
    );
}

#[test]
fn test_nested_query() {
    assert_translation(
        " { person { name age livesIn { name } } } ",
        &["MATCH (person:Person) RETURN person {.name,.age,livesIn:[(person)-[:LIVES_IN]->(livesInLocation:Location) | livesInLocation {.name}][0]}"],
    );
}

#[test]
fn test_nested_query_with_parameter() {
    assert_translation(
        r#" { person { name age livesIn(name:"Berlin") { name } } } "#,
        &["MATCH (person:Person) RETURN person {.name,.age,livesIn:[(person)-[:LIVES_IN]->(livesInLocation:Location) WHERE livesInLocation.name = 'Berlin' | livesInLocation {.name}][0]}"],
    );
}

#[test]
fn test_nested_list_relation() {
    assert_translation(
        " { person { name age livedIn { name } } } ",
        &["MATCH (person:Person) RETURN person {.name,.age,livedIn:[(person)-[:LIVED_IN]->(livedInLocation:Location) | livedInLocation {.name}]}"],
    );
}

#[test]
fn test_nested_list_relation_slices() {
    let base = "MATCH (person:Person) RETURN person {.name,.age,livedIn:[(person)-[:LIVED_IN]->(livedInLocation:Location) | livedInLocation {.name}]";
    assert_translation(
        " { person { name age livedIn(offset:3) { name } } } ",
        &[format!("{}[3..]}}", base).as_str()],
    );
    assert_translation(
        " { person { name age livedIn(first:2,offset:3) { name } } } ",
        &[format!("{}[3..5]}}", base).as_str()],
    );
    assert_translation(
        " { person { name age livedIn(first:2) { name } } } ",
        &[format!("{}[0..2]}}", base).as_str()],
    );
}

#[test]
fn test_root_field_filter() {
    assert_translation(
        r#" { person:personByName(name:"Joe") { age } } "#,
        &["MATCH (person:Person) WHERE person.name = 'Joe' RETURN person {.age}"],
    );
}

#[test]
fn test_root_pagination() {
    assert_translation(
        " { person:person(first:2,offset:3) { age } } ",
        &["MATCH (person:Person) RETURN person {.age} SKIP 3 LIMIT 2"],
    );
    assert_translation(
        " { person:person(first:2) { age } } ",
        &["MATCH (person:Person) RETURN person {.age} LIMIT 2"],
    );
    assert_translation(
        " { person:person(offset:3) { age } } ",
        &["MATCH (person:Person) RETURN person {.age} SKIP 3"],
    );
}

#[test]
fn test_render_values() {
    assert_translation(
        "query($_param:String) { p:values(_param:$_param) { age } }",
        &["MATCH (p:Person) WHERE p._param = $_param AND p._string = 'Joe' AND p._int = 42 AND p._float = 3.14 AND p._array = [1, 2, 3] AND p._enum = 'pi' AND p._boolean = false RETURN p {.age}"],
    );
}

#[test]
fn test_predicate_order_ignores_query_order() {
    let a = translator()
        .translate(r#"{ p:values(_boolean:true, _string:"Ann", _param:"x") { age } }"#)
        .unwrap();
    let b = translator()
        .translate(r#"{ p:values(_param:"x", _string:"Ann", _boolean:true) { age } }"#)
        .unwrap();
    assert_eq!(a.statements, b.statements);
}

#[test]
fn test_alias_projection() {
    assert_translation(
        "{ foo:person { n:name } }",
        &["MATCH (foo:Person) RETURN foo {.n}"],
    );
}

#[test]
fn test_root_alias_matching_child_variable() {
    assert_translation(
        "{ livesInLocation: person { livesIn { name } } }",
        &["MATCH (livesInLocation:Person) RETURN livesInLocation {livesIn:[(livesInLocation)-[:LIVES_IN]->(livesInLocation2:Location) | livesInLocation2 {.name}][0]}"],
    );
}

#[test]
fn test_no_arguments_no_clauses() {
    let translation = translator().translate("{ person { name } }").unwrap();
    let statement = &translation.statements[0];
    assert!(!statement.contains("WHERE"));
    assert!(!statement.contains("SKIP"));
    assert!(!statement.contains("LIMIT"));
}

#[test]
fn test_unknown_type() {
    let err = translator().translate("{ company { name } }").unwrap_err();
    assert!(matches!(
        err,
        TranslationError::Generation(CypherGeneratorError::UnknownType { .. })
    ));
}

#[test]
fn test_unknown_field() {
    let err = translator().translate("{ person { salary } }").unwrap_err();
    assert!(matches!(
        err,
        TranslationError::Generation(CypherGeneratorError::UnknownField { .. })
    ));
}

#[test]
fn test_mutation_syntax_rejected() {
    let err = translator().translate("{ createPerson() }").unwrap_err();
    assert!(matches!(err, TranslationError::ParseRejected(_)));
}

#[test]
fn test_depth_limit() {
    let config = TranslatorConfig {
        max_selection_depth: 1,
        ..Default::default()
    };
    let translator =
        Translator::with_config(Schema::from_sdl(PERSON_SDL).unwrap(), config);
    assert!(translator.translate("{ person { name } }").is_ok());
    assert_eq!(
        translator
            .translate("{ person { livesIn { name } } }")
            .unwrap_err(),
        TranslationError::Generation(CypherGeneratorError::SelectionTooDeep { depth: 2, max: 1 })
    );
}

#[test]
fn test_error_leaves_translator_usable() {
    let translator = translator();
    assert!(translator.translate("{ person { salary } }").is_err());
    assert!(translator.translate("{ person { name } }").is_ok());
}

#[test]
fn test_shared_translator_across_threads() {
    let translator = translator();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = translator.clone();
            std::thread::spawn(move || {
                translator
                    .translate(&format!("{{ p{}: person {{ name }} }}", i))
                    .map(|t| t.statements)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let statements = handle.join().unwrap().unwrap();
        assert_eq!(
            statements,
            vec![format!("MATCH (p{0}:Person) RETURN p{0} {{.name}}", i)]
        );
    }
}
