use super::context::CompilationContext;
use super::errors::CypherGeneratorError;
use super::pattern::compile_relation;
use crate::graphql_parser::ast::Selection;

/// Compile a selection set into a Cypher map projection such as `{.name,.age}`.
///
/// Entries follow selection order. Leaf fields render as `.key` (the alias when
/// one is given); relation fields render as `key:<comprehension>`.
pub fn compile_projection(
    ctx: &CompilationContext<'_>,
    selections: &[Selection<'_>],
) -> Result<String, CypherGeneratorError> {
    let mut entries: Vec<String> = Vec::with_capacity(selections.len());

    for selection in selections {
        let field = ctx.object_type.field(selection.name).ok_or_else(|| {
            CypherGeneratorError::UnknownField {
                type_name: ctx.object_type.name.clone(),
                field: selection.name.to_string(),
            }
        })?;

        if field.relation.is_some() {
            if selection.selection_set.is_empty() {
                return Err(CypherGeneratorError::MissingSelection {
                    type_name: ctx.object_type.name.clone(),
                    field: field.name.clone(),
                });
            }
            let fragment = compile_relation(ctx, field, selection)?;
            entries.push(format!("{}:{}", selection.key(), fragment.cypher));
        } else {
            if !selection.selection_set.is_empty() {
                return Err(CypherGeneratorError::UnresolvedRelation {
                    type_name: ctx.object_type.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !selection.arguments.is_empty() {
                log::warn!(
                    "Ignoring arguments on property `{}.{}`",
                    ctx.object_type.name,
                    field.name
                );
            }
            entries.push(format!(".{}", selection.key()));
        }
    }

    Ok(format!("{{{}}}", entries.join(",")))
}
