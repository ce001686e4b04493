use super::errors::CypherGeneratorError;
use super::value::compile_value;
use crate::config::TranslatorConfig;
use crate::graph_catalog::{Field, ObjectType, Schema, ValueKind};
use crate::graphql_parser::ast::{Selection, Value};

/// An argument that may filter the selected entity.
struct FilterCandidate<'s> {
    name: &'s str,
    kind: &'s ValueKind,
    default_value: Option<&'s Value<'static>>,
}

/// Declared arguments of `field` in schema order, then (with implicit filters on) the
/// leaf fields of `target` that are not already declared. Pagination arguments never filter.
fn filter_candidates<'s>(
    config: &TranslatorConfig,
    field: &'s Field,
    target: &'s ObjectType,
) -> Vec<FilterCandidate<'s>> {
    let mut candidates: Vec<FilterCandidate<'s>> = field
        .arguments
        .iter()
        .filter(|arg| !config.is_pagination_argument(&arg.name))
        .map(|arg| FilterCandidate {
            name: &arg.name,
            kind: &arg.kind,
            default_value: arg.default_value.as_ref(),
        })
        .collect();

    if config.implicit_field_filters {
        for property in &target.fields {
            if property.kind.is_leaf()
                && !config.is_pagination_argument(&property.name)
                && !candidates.iter().any(|c| c.name == property.name)
            {
                candidates.push(FilterCandidate {
                    name: &property.name,
                    kind: &property.kind,
                    default_value: None,
                });
            }
        }
    }
    candidates
}

/// Compile the equality predicates of one selection against `variable`.
///
/// Emission follows schema declaration order regardless of argument order in the query.
/// A supplied value wins over the declared default; a null value (explicit or defaulted)
/// drops the predicate. Supplied arguments matching no candidate are rejected.
pub fn compile_predicates(
    schema: &Schema,
    config: &TranslatorConfig,
    variable: &str,
    field: &Field,
    target: &ObjectType,
    selection: &Selection<'_>,
) -> Result<Vec<String>, CypherGeneratorError> {
    let candidates = filter_candidates(config, field, target);

    for argument in &selection.arguments {
        if !config.is_pagination_argument(argument.name)
            && !candidates.iter().any(|c| c.name == argument.name)
        {
            return Err(CypherGeneratorError::UnknownArgument {
                field: field.name.clone(),
                argument: argument.name.to_string(),
            });
        }
    }

    let mut predicates = Vec::new();
    for candidate in &candidates {
        let value = match selection.argument(candidate.name) {
            Some(supplied) => supplied,
            None => match candidate.default_value {
                Some(default) => default,
                None => continue,
            },
        };

        let compiled = compile_value(schema, candidate.kind, value).map_err(|e| match e {
            CypherGeneratorError::TypeMismatch { expected, found } => {
                CypherGeneratorError::TypeMismatch {
                    expected: format!("{} for {}({})", expected, field.name, candidate.name),
                    found,
                }
            }
            other => other,
        })?;

        match compiled {
            Some(text) => predicates.push(format!("{}.{} = {}", variable, candidate.name, text)),
            None => log::debug!(
                "Omitting null predicate {}.{} on field `{}`",
                variable,
                candidate.name,
                field.name
            ),
        }
    }
    Ok(predicates)
}
