//! Public entry point: query text in, Cypher statements and parameters out.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use crate::config::TranslatorConfig;
use crate::cypher_generator::{generate_cypher, CypherGeneratorError};
use crate::graph_catalog::Schema;
use crate::graphql_parser::ast::{QueryDocument, Value};
use crate::graphql_parser::parse_query;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TranslationError {
    #[error("Query rejected: {0}")]
    ParseRejected(String),
    #[error(transparent)]
    Generation(#[from] CypherGeneratorError),
}

/// Result of one translate call: one statement per root selection, in document order,
/// and the values of every variable the statements reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Translation {
    pub statements: Vec<String>,
    pub parameters: Map<String, JsonValue>,
}

/// Translates read queries against one schema. Cheap to clone and safe to share
/// between threads; every call is independent.
#[derive(Debug, Clone)]
pub struct Translator {
    schema: Arc<Schema>,
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self::with_config(schema, TranslatorConfig::default())
    }

    pub fn with_config(schema: impl Into<Arc<Schema>>, config: TranslatorConfig) -> Self {
        Translator {
            schema: schema.into(),
            config,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate(&self, query: &str) -> Result<Translation, TranslationError> {
        self.translate_with_variables(query, &Map::new())
    }

    /// Translate with caller-supplied variable values. Referenced variables without a
    /// supplied value fall back to the operation's declared default, then to `null`.
    pub fn translate_with_variables(
        &self,
        query: &str,
        variables: &Map<String, JsonValue>,
    ) -> Result<Translation, TranslationError> {
        let document = parse(query)?;
        log::debug!(
            "Translating {} root selection(s) of operation {}",
            document.selection_set.len(),
            document.name.unwrap_or("<anonymous>")
        );

        let statements = generate_cypher(&self.schema, &self.config, &document.selection_set)?;
        let parameters = collect_parameters(&document, variables);
        Ok(Translation {
            statements,
            parameters,
        })
    }
}

/// Translate with the default configuration.
pub fn translate(schema: &Schema, query: &str) -> Result<Translation, TranslationError> {
    let document = parse(query)?;
    let statements =
        generate_cypher(schema, &TranslatorConfig::default(), &document.selection_set)?;
    Ok(Translation {
        statements,
        parameters: collect_parameters(&document, &Map::new()),
    })
}

fn parse(query: &str) -> Result<QueryDocument<'_>, TranslationError> {
    parse_query(query)
        .map_err(|e| TranslationError::ParseRejected(e.to_string().trim_end().to_string()))
}

fn collect_parameters(
    document: &QueryDocument<'_>,
    variables: &Map<String, JsonValue>,
) -> Map<String, JsonValue> {
    let mut parameters = Map::new();
    for name in document.referenced_variables() {
        let definition = document.variable_definition(name);
        let value = match (variables.get(name), definition) {
            (Some(supplied), _) => supplied.clone(),
            (None, Some(def)) => match &def.default_value {
                Some(default) => to_json(default),
                None => JsonValue::Null,
            },
            (None, None) => JsonValue::Null,
        };
        if definition.is_none() && !document.variable_definitions.is_empty() {
            log::warn!("Variable ${} is used but not declared by the operation", name);
        }
        parameters.insert(name.to_string(), value);
    }

    for name in variables.keys() {
        if !parameters.contains_key(name) {
            log::debug!("Supplied variable ${} is not referenced; dropping it", name);
        }
    }
    parameters
}

fn to_json(value: &Value<'_>) -> JsonValue {
    match value {
        Value::Int(i) => JsonValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::String(s) | Value::Enum(s) => JsonValue::String(s.to_string()),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::List(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        // Variable defaults are constant; a nested reference has no value to carry.
        Value::Null | Value::Variable(_) => JsonValue::Null,
    }
}
