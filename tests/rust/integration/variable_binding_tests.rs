use graphql_cypher::{Schema, Translator};
use serde_json::{json, Map, Value};

fn translator() -> Translator {
    Translator::new(Schema::from_sdl(include_str!("../../fixtures/person.graphql")).unwrap())
}

fn variables(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[test]
fn test_variables_in_nested_pagination() {
    let translation = translator()
        .translate_with_variables(
            "query Page($size: Int, $from: Int) { person { livedIn(first: $size, offset: $from) { name } } }",
            &variables(json!({ "size": 2, "from": 3 })),
        )
        .unwrap();
    assert_eq!(
        translation.statements,
        vec!["MATCH (person:Person) RETURN person {livedIn:[(person)-[:LIVED_IN]->(livedInLocation:Location) | livedInLocation {.name}][$from..$from + $size]}"]
    );
    assert_eq!(
        Value::Object(translation.parameters),
        json!({ "size": 2, "from": 3 })
    );
}

#[test]
fn test_variable_defaults_fill_parameters() {
    let translation = translator()
        .translate_with_variables(
            r#"query($city: String = "Berlin", $tags: [String] = ["a", "b"]) { person { livesIn(name: $city) { name } } p:values(_param: $tags) { age } }"#,
            &Map::new(),
        )
        .unwrap();
    assert_eq!(translation.statements.len(), 2);
    assert!(translation.statements[0].contains("WHERE livesInLocation.name = $city"));
    assert!(translation.statements[1].starts_with("MATCH (p:Person) WHERE p._param = $tags AND"));
    assert_eq!(
        Value::Object(translation.parameters),
        json!({ "city": "Berlin", "tags": ["a", "b"] })
    );
}

#[test]
fn test_supplied_value_wins_over_default() {
    let translation = translator()
        .translate_with_variables(
            r#"query($city: String = "Berlin") { person { livesIn(name: $city) { name } } }"#,
            &variables(json!({ "city": "Paris" })),
        )
        .unwrap();
    assert_eq!(translation.parameters["city"], json!("Paris"));
}

#[test]
fn test_translation_serializes_to_json() {
    let translation = translator()
        .translate_with_variables(
            "query($n: String) { person(name: $n) { name } }",
            &variables(json!({ "n": "Joe" })),
        )
        .unwrap();
    assert_eq!(
        serde_json::to_value(&translation).unwrap(),
        json!({
            "statements": ["MATCH (person:Person) WHERE person.name = $n RETURN person {.name}"],
            "parameters": { "n": "Joe" }
        })
    );
}
