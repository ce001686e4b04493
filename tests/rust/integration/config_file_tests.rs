use std::io::Write;

use graphql_cypher::config::{CliConfig, ConfigError};
use graphql_cypher::{Schema, Translator, TranslatorConfig};

fn person_schema() -> Schema {
    Schema::from_sdl(include_str!("../../fixtures/person.graphql")).unwrap()
}

fn yaml_config(content: &str) -> TranslatorConfig {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    TranslatorConfig::from_yaml_file(file.path()).unwrap()
}

#[test]
fn test_renamed_pagination_arguments() {
    let config = yaml_config("first_argument: limit\noffset_argument: skip\n");
    let translator = Translator::with_config(person_schema(), config);

    assert_eq!(
        translator
            .translate("{ person(limit: 2, skip: 3) { name livedIn(limit: 1) { name } } }")
            .unwrap()
            .statements,
        vec!["MATCH (person:Person) RETURN person {.name,livedIn:[(person)-[:LIVED_IN]->(livedInLocation:Location) | livedInLocation {.name}][0..1]} SKIP 3 LIMIT 2"]
    );
    // The default names are now ordinary (unknown) arguments.
    assert!(translator.translate("{ person(first: 2) { name } }").is_err());
}

#[test]
fn test_implicit_filters_disabled_by_file() {
    let config = yaml_config("implicit_field_filters: false\n");
    let translator = Translator::with_config(person_schema(), config);

    assert!(translator.translate(r#"{ person(name: "Joe") { name } }"#).is_err());
    assert!(translator
        .translate(r#"{ personByName(name: "Joe") { name } }"#)
        .is_ok());
}

#[test]
fn test_cli_overrides_file() {
    let mut config = yaml_config("max_selection_depth: 1\n");
    config.merge(CliConfig {
        max_selection_depth: Some(3),
        ..Default::default()
    });
    let translator = Translator::with_config(person_schema(), config);
    assert!(translator
        .translate("{ person { livesIn { name } } }")
        .is_ok());
}

#[test]
fn test_invalid_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "max_selection_depth: [not, a, number]").unwrap();
    assert!(matches!(
        TranslatorConfig::from_yaml_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}
