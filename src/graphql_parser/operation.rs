use nom::{
    branch::alt,
    character::complete::char,
    combinator::{cut, opt, value},
    error::context,
    multi::many1,
    sequence::{delimited, preceded},
    IResult, Parser,
};

use super::{
    ast::{OperationKind, QueryDocument, VariableDefinition},
    common::{ignored, keyword, parse_name, ws},
    errors::GraphQLParsingError,
    selection_set::parse_selection_set,
    type_ref::parse_type_ref,
    value::parse_const_value,
};

/// Parse one operation: shorthand `{ ... }` or
/// `query|mutation|subscription [Name] [($vars)] { ... }`.
pub fn parse_document(
    input: &'_ str,
) -> IResult<&'_ str, QueryDocument<'_>, GraphQLParsingError<'_>> {
    let (input, _) = ignored::<GraphQLParsingError>(input)?;

    if input.starts_with('{') {
        let (input, selection_set) = parse_selection_set(input)?;
        return Ok((
            input,
            QueryDocument {
                kind: OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                selection_set,
            },
        ));
    }

    let (input, kind) = context(
        "Expected `{`, `query`, `mutation` or `subscription`",
        ws(alt((
            value(OperationKind::Query, keyword::<GraphQLParsingError>("query")),
            value(OperationKind::Mutation, keyword("mutation")),
            value(OperationKind::Subscription, keyword("subscription")),
        ))),
    )
    .parse(input)?;
    let (input, name) = opt(ws(parse_name::<GraphQLParsingError>)).parse(input)?;
    let (input, variable_definitions) = opt(parse_variable_definitions).parse(input)?;
    let (input, selection_set) =
        context("Expected selection set", cut(parse_selection_set)).parse(input)?;

    Ok((
        input,
        QueryDocument {
            kind,
            name,
            variable_definitions: variable_definitions.unwrap_or_default(),
            selection_set,
        },
    ))
}

fn parse_variable_definitions(
    input: &'_ str,
) -> IResult<&'_ str, Vec<VariableDefinition<'_>>, GraphQLParsingError<'_>> {
    delimited(
        ws(char('(')),
        context(
            "Variable definition list must not be empty",
            cut(many1(parse_variable_definition)),
        ),
        context("Expected `)` to close variable definitions", cut(ws(char(')')))),
    )
    .parse(input)
}

/// `$name: Type [= default]`
fn parse_variable_definition(
    input: &'_ str,
) -> IResult<&'_ str, VariableDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, name) = preceded(
        ws(char::<_, GraphQLParsingError>('$')),
        context("Expected variable name", cut(parse_name)),
    )
    .parse(input)?;
    let (input, _) = context(
        "Expected `:` after variable name",
        cut(ws(char::<_, GraphQLParsingError>(':'))),
    )
    .parse(input)?;
    let (input, var_type) = context("Expected variable type", cut(parse_type_ref)).parse(input)?;
    let (input, default_value) = opt(preceded(
        ws(char('=')),
        context("Expected default value", cut(ws(parse_const_value))),
    ))
    .parse(input)?;

    Ok((
        input,
        VariableDefinition {
            name,
            var_type,
            default_value,
        },
    ))
}
