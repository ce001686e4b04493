//! Translation against the movie fixture: custom root type, incoming relations,
//! ID and custom scalars, enums and declared pagination defaults.

use graphql_cypher::{CypherGeneratorError, Schema, TranslationError, Translator};
use test_case::test_case;

const MOVIES_SDL: &str = include_str!("../../fixtures/movies.graphql");

fn translate(query: &str) -> Result<Vec<String>, TranslationError> {
    let schema = Schema::from_sdl(MOVIES_SDL).expect("movie schema loads");
    Translator::new(schema).translate(query).map(|t| t.statements)
}

#[test]
fn test_declared_pagination_defaults() {
    assert_eq!(
        translate("{ movies(genre: DRAMA, first: 5) { title actors { name } } }").unwrap(),
        vec!["MATCH (movies:Movie) WHERE movies.genre = 'DRAMA' RETURN movies {.title,actors:[(movies)<-[:ACTED_IN]-(actorsActor:Actor) | actorsActor {.name}][0..10]} LIMIT 5"]
    );
    assert_eq!(
        translate("{ movies { title } }").unwrap(),
        vec!["MATCH (movies:Movie) RETURN movies {.title} LIMIT 25"]
    );
}

#[test]
fn test_null_pagination_disables_default() {
    assert_eq!(
        translate("{ movies(first: null) { title actors(first: null) { name } } }").unwrap(),
        vec!["MATCH (movies:Movie) RETURN movies {.title,actors:[(movies)<-[:ACTED_IN]-(actorsActor:Actor) | actorsActor {.name}]}"]
    );
}

#[test]
fn test_incoming_single_relation_and_id_argument() {
    assert_eq!(
        translate("{ movie(id: 42) { title director { name } } }").unwrap(),
        vec!["MATCH (movie:Movie) WHERE movie.id = '42' RETURN movie {.title,director:[(movie)<-[:DIRECTED]-(directorDirector:Director) | directorDirector {.name}][0]}"]
    );
}

#[test]
fn test_outgoing_relation_with_default_direction() {
    assert_eq!(
        translate(r#"{ actors(name: "Keanu") { name movies(first: 3) { title } } }"#).unwrap(),
        vec!["MATCH (actors:Actor) WHERE actors.name = 'Keanu' RETURN actors {.name,movies:[(actors)-[:ACTED_IN]->(moviesMovie:Movie) | moviesMovie {.title}][0..3]}"]
    );
}

#[test]
fn test_two_levels_of_relations() {
    assert_eq!(
        translate("{ movie(id: \"m1\") { title actors(first: 2, offset: 1) { name movies { title } } } }").unwrap(),
        vec!["MATCH (movie:Movie) WHERE movie.id = 'm1' RETURN movie {.title,actors:[(movie)<-[:ACTED_IN]-(actorsActor:Actor) | actorsActor {.name,movies:[(actorsActor)-[:ACTED_IN]->(moviesMovie:Movie) | moviesMovie {.title}]}][1..3]}"]
    );
}

#[test]
fn test_recursive_traversal_does_not_reuse_outer_variable() {
    assert_eq!(
        translate("{ movies { actors { movies { actors { name } } } } }").unwrap(),
        vec!["MATCH (movies:Movie) RETURN movies {actors:[(movies)<-[:ACTED_IN]-(actorsActor:Actor) | actorsActor {movies:[(actorsActor)-[:ACTED_IN]->(moviesMovie:Movie) | moviesMovie {actors:[(moviesMovie)<-[:ACTED_IN]-(actorsActor4:Actor) | actorsActor4 {.name}][0..10]}]}][0..10]} LIMIT 25"]
    );
}

#[test]
fn test_sibling_relations_reuse_names_in_separate_scopes() {
    assert_eq!(
        translate("{ movie(id: 1) { actors { name } cast:actors { born } } }").unwrap(),
        vec!["MATCH (movie:Movie) WHERE movie.id = '1' RETURN movie {actors:[(movie)<-[:ACTED_IN]-(actorsActor:Actor) | actorsActor {.name}][0..10],cast:[(movie)<-[:ACTED_IN]-(castActor:Actor) | castActor {.born}][0..10]}"]
    );
}

#[test_case("rating: 8", "movies.rating = 8.0"; "int coerced to float")]
#[test_case("rating: 7.5", "movies.rating = 7.5"; "float literal")]
#[test_case("rating: 1e20", "movies.rating = 1e20"; "large float keeps exponent")]
#[test_case("released: 1999", "movies.released = 1999"; "int literal")]
#[test_case(r#"updatedAt: "2024-01-01""#, "movies.updatedAt = '2024-01-01'"; "custom scalar")]
#[test_case(r#"title: "Ocean's Eleven""#, r"movies.title = 'Ocean\'s Eleven'"; "escaped quote")]
#[test_case("genre: THRILLER", "movies.genre = 'THRILLER'"; "enum symbol")]
fn test_filter_rendering(arguments: &str, predicate: &str) {
    let statements = translate(&format!("{{ movies({}) {{ title }} }}", arguments)).unwrap();
    assert_eq!(
        statements,
        vec![format!(
            "MATCH (movies:Movie) WHERE {} RETURN movies {{.title}} LIMIT 25",
            predicate
        )]
    );
}

#[test_case("genre: HORROR"; "unknown enum symbol")]
#[test_case(r#"genre: "DRAMA""#; "string for enum")]
#[test_case("released: \"1999\""; "string for int")]
#[test_case("first: -1"; "negative page size")]
#[test_case("first: \"ten\""; "string page size")]
fn test_type_mismatch(arguments: &str) {
    let err = translate(&format!("{{ movies({}) {{ title }} }}", arguments)).unwrap_err();
    assert!(
        matches!(
            err,
            TranslationError::Generation(CypherGeneratorError::TypeMismatch { .. })
        ),
        "unexpected error {:?}",
        err
    );
}

#[test]
fn test_unknown_argument() {
    let err = translate("{ movies(studio: \"A24\") { title } }").unwrap_err();
    assert_eq!(
        err,
        TranslationError::Generation(CypherGeneratorError::UnknownArgument {
            field: "movies".to_string(),
            argument: "studio".to_string(),
        })
    );
}

#[test]
fn test_root_type_is_not_an_entity() {
    let err = translate("{ movies { title } person { name } }").unwrap_err();
    assert!(matches!(
        err,
        TranslationError::Generation(CypherGeneratorError::UnknownType { .. })
    ));
}
