use super::context::CompilationContext;
use super::errors::CypherGeneratorError;
use super::pagination::Pagination;
use super::predicate::compile_predicates;
use super::projection::compile_projection;
use crate::graph_catalog::{Direction, Field, RelationInfo};
use crate::graphql_parser::ast::Selection;

/// A compiled relation field: the child pattern variable and the comprehension text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationFragment {
    pub variable: String,
    pub cypher: String,
}

/// Compile a relation field into a pattern comprehension projected inline, e.g.
/// `[(person)-[:LIVES_IN]->(livesInLocation:Location) | livesInLocation {.name}][0]`.
///
/// The child variable is the selection key followed by the target type name, suffixed
/// with the child depth when an enclosing scope already binds that name. Single
/// relations take the first match with `[0]`; list relations are sliced when paginated.
pub fn compile_relation(
    ctx: &CompilationContext<'_>,
    field: &Field,
    selection: &Selection<'_>,
) -> Result<RelationFragment, CypherGeneratorError> {
    let unresolved = || CypherGeneratorError::UnresolvedRelation {
        type_name: ctx.object_type.name.clone(),
        field: field.name.clone(),
    };
    let relation = field.relation.as_ref().ok_or_else(unresolved)?;
    let target_name = field.kind.object_type().ok_or_else(unresolved)?;
    let target = ctx
        .schema
        .object_type(target_name)
        .ok_or_else(|| CypherGeneratorError::UnknownType {
            type_name: target_name.to_string(),
            context: format!("target of {}.{}", ctx.object_type.name, field.name),
        })?;

    let variable = ctx.child_variable(format!("{}{}", selection.key(), target_name));
    let child_ctx = ctx.descend(variable.clone(), target)?;

    let predicates = compile_predicates(
        ctx.schema,
        ctx.config,
        &variable,
        field,
        target,
        selection,
    )?;
    let pagination = Pagination::resolve(ctx.config, field, selection)?;
    let projection = compile_projection(&child_ctx, &selection.selection_set)?;

    let mut cypher = String::from("[");
    cypher.push_str(&path_pattern(&ctx.variable, relation, &variable, target_name));
    if !predicates.is_empty() {
        cypher.push_str(" WHERE ");
        cypher.push_str(&predicates.join(" AND "));
    }
    cypher.push_str(&format!(" | {} {}]", variable, projection));

    if field.kind.is_list() {
        if let Some(slice) = pagination.to_slice() {
            cypher.push_str(&slice);
        }
    } else {
        if !pagination.is_empty() {
            log::warn!(
                "Ignoring pagination on single-valued relation `{}.{}`",
                ctx.object_type.name,
                field.name
            );
        }
        cypher.push_str("[0]");
    }

    log::debug!("Compiled relation {}.{}: {}", ctx.object_type.name, field.name, cypher);
    Ok(RelationFragment { variable, cypher })
}

fn path_pattern(parent: &str, relation: &RelationInfo, child: &str, child_type: &str) -> String {
    match relation.direction {
        Direction::Outgoing => format!(
            "({})-[:{}]->({}:{})",
            parent, relation.relationship_type, child, child_type
        ),
        Direction::Incoming => format!(
            "({})<-[:{}]-({}:{})",
            parent, relation.relationship_type, child, child_type
        ),
    }
}
