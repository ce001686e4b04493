use super::context::CompilationContext;
use super::errors::CypherGeneratorError;
use super::pagination::Pagination;
use super::predicate::compile_predicates;
use super::projection::compile_projection;
use crate::config::TranslatorConfig;
use crate::graph_catalog::Schema;
use crate::graphql_parser::ast::Selection;

/// Compile one root selection into a full `MATCH ... RETURN ...` statement.
///
/// The root field's declared return type is the matched label, and the selection key
/// is the match variable. Root pagination renders as `SKIP`/`LIMIT`, never as a slice.
pub fn compile_statement(
    schema: &Schema,
    config: &TranslatorConfig,
    selection: &Selection<'_>,
) -> Result<String, CypherGeneratorError> {
    let query_type = schema.query_type();
    let field = query_type
        .field(selection.name)
        .ok_or_else(|| CypherGeneratorError::UnknownType {
            type_name: selection.name.to_string(),
            context: format!("no root field `{}` on {}", selection.name, query_type.name),
        })?;

    let target_name = field
        .kind
        .object_type()
        .ok_or_else(|| CypherGeneratorError::UnresolvedRelation {
            type_name: query_type.name.clone(),
            field: field.name.clone(),
        })?;
    let target = schema
        .object_type(target_name)
        .ok_or_else(|| CypherGeneratorError::UnknownType {
            type_name: target_name.to_string(),
            context: format!("return type of {}.{}", query_type.name, field.name),
        })?;

    if selection.selection_set.is_empty() {
        return Err(CypherGeneratorError::MissingSelection {
            type_name: query_type.name.clone(),
            field: field.name.clone(),
        });
    }

    let variable = selection.key();
    let ctx = CompilationContext::root(schema, config, variable, target);

    let predicates = compile_predicates(schema, config, variable, field, target, selection)?;
    let pagination = Pagination::resolve(config, field, selection)?;
    let projection = compile_projection(&ctx, &selection.selection_set)?;

    let mut statement = format!("MATCH ({}:{})", variable, target_name);
    if !predicates.is_empty() {
        statement.push_str(" WHERE ");
        statement.push_str(&predicates.join(" AND "));
    }
    statement.push_str(&format!(" RETURN {} {}", variable, projection));
    statement.push_str(&pagination.to_skip_limit());

    log::debug!("Compiled root field `{}`: {}", selection.key(), statement);
    Ok(statement)
}
