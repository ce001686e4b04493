//! Compiles argument values into Cypher literal text against their declared kind.

use super::errors::CypherGeneratorError;
use crate::graph_catalog::{ScalarKind, Schema, ValueKind};
use crate::graphql_parser::ast::Value;

/// Compile `value` as a Cypher expression of `kind`.
///
/// Returns `Ok(None)` for `null`: the caller drops the whole predicate instead of
/// comparing against null. Variables always compile to `$name` and are never inlined.
pub fn compile_value(
    schema: &Schema,
    kind: &ValueKind,
    value: &Value<'_>,
) -> Result<Option<String>, CypherGeneratorError> {
    match value {
        Value::Null => Ok(None),
        Value::Variable(name) => Ok(Some(format!("${}", name))),
        _ => compile_non_null(schema, kind, value).map(Some),
    }
}

fn compile_non_null(
    schema: &Schema,
    kind: &ValueKind,
    value: &Value<'_>,
) -> Result<String, CypherGeneratorError> {
    match kind {
        ValueKind::List(inner) => match value {
            Value::List(items) => {
                let elements = items
                    .iter()
                    .map(|item| compile_element(schema, inner, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("[{}]", elements.join(", ")))
            }
            // Input coercion: a single value stands for a one-element list.
            single => Ok(format!("[{}]", compile_non_null(schema, inner, single)?)),
        },
        ValueKind::Scalar(scalar) => compile_scalar(scalar, value),
        ValueKind::Enum(enum_name) => match value {
            Value::Enum(symbol) => {
                let enum_type = schema.enum_type(enum_name).ok_or_else(|| {
                    CypherGeneratorError::UnknownType {
                        type_name: enum_name.clone(),
                        context: "enum argument".to_string(),
                    }
                })?;
                if !enum_type.contains(symbol) {
                    return Err(CypherGeneratorError::type_mismatch(
                        format!("a value of enum {} ({})", enum_name, enum_type.values.join(", ")),
                        value,
                    ));
                }
                Ok(quote(symbol))
            }
            other => Err(CypherGeneratorError::type_mismatch(
                format!("a value of enum {}", enum_name),
                other,
            )),
        },
        ValueKind::Object(type_name) => Err(CypherGeneratorError::type_mismatch(
            format!("a scalar, enum or list value (`{}` is an entity type)", type_name),
            value,
        )),
    }
}

/// List elements keep explicit nulls; only a top-level null removes the predicate.
fn compile_element(
    schema: &Schema,
    kind: &ValueKind,
    value: &Value<'_>,
) -> Result<String, CypherGeneratorError> {
    Ok(compile_value(schema, kind, value)?.unwrap_or_else(|| "null".to_string()))
}

fn compile_scalar(scalar: &ScalarKind, value: &Value<'_>) -> Result<String, CypherGeneratorError> {
    match (scalar, value) {
        (ScalarKind::String | ScalarKind::Custom(_), Value::String(s)) => Ok(quote(s)),
        (ScalarKind::Id, Value::String(s)) => Ok(quote(s)),
        (ScalarKind::Id, Value::Int(i)) => Ok(quote(&i.to_string())),
        (ScalarKind::Int, Value::Int(i)) => Ok(i.to_string()),
        (ScalarKind::Float, Value::Float(f)) => Ok(format_float(*f)),
        (ScalarKind::Float, Value::Int(i)) => Ok(format_float(*i as f64)),
        (ScalarKind::Boolean, Value::Boolean(b)) => Ok(b.to_string()),
        (scalar, other) => Err(CypherGeneratorError::type_mismatch(scalar.name(), other)),
    }
}

/// Single-quoted Cypher string literal.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Canonical float text that Cypher always reads as a Float: `2.0`, `3.14`, `1e20`.
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}
