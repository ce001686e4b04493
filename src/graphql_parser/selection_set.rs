use nom::{
    character::complete::char,
    combinator::{cut, opt},
    error::context,
    multi::{many0, many1},
    sequence::{delimited, preceded},
    IResult, Parser,
};

use super::{
    ast::{Argument, Selection},
    common::{ignored, parse_name, ws},
    errors::GraphQLParsingError,
    value::{parse_const_value, parse_value},
};

/// `{ selection+ }`
pub fn parse_selection_set(
    input: &'_ str,
) -> IResult<&'_ str, Vec<Selection<'_>>, GraphQLParsingError<'_>> {
    let (input, _) = ws(char::<_, GraphQLParsingError>('{')).parse(input)?;
    let (input, selections) = many0(parse_selection).parse(input)?;

    let (input, _) = context(
        "Expected `}` to close selection set",
        cut(ws(char::<_, GraphQLParsingError>('}'))),
    )
    .parse(input)?;

    if selections.is_empty() {
        return Err(GraphQLParsingError::failure(
            input,
            "Selection set must not be empty",
        ));
    }
    Ok((input, selections))
}

/// `[alias :] name [(arguments)] [selection set]`
pub fn parse_selection(input: &'_ str) -> IResult<&'_ str, Selection<'_>, GraphQLParsingError<'_>> {
    let (input, _) = ignored::<GraphQLParsingError>(input)?;
    if input.starts_with("...") {
        return Err(GraphQLParsingError::failure(
            input,
            "Fragments are not supported",
        ));
    }

    let (input, first) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    let (input, aliased) = opt(preceded(
        ws(char(':')),
        context(
            "Expected field name after alias",
            cut(ws(parse_name::<GraphQLParsingError>)),
        ),
    ))
    .parse(input)?;
    let (alias, name) = match aliased {
        Some(name) => (Some(first), name),
        None => (None, first),
    };

    let (input, arguments) = opt(parse_arguments).parse(input)?;

    if input.starts_with('@') {
        return Err(GraphQLParsingError::failure(
            input,
            "Directives are not supported in queries",
        ));
    }

    let (input, selection_set) = opt(parse_selection_set).parse(input)?;

    Ok((
        input,
        Selection {
            alias,
            name,
            arguments: arguments.unwrap_or_default(),
            selection_set: selection_set.unwrap_or_default(),
        },
    ))
}

/// `( name: value ... )`, at least one argument.
pub fn parse_arguments(
    input: &'_ str,
) -> IResult<&'_ str, Vec<Argument<'_>>, GraphQLParsingError<'_>> {
    delimited(
        ws(char('(')),
        context("Argument list must not be empty", cut(many1(parse_argument))),
        context("Expected `)` to close argument list", cut(ws(char(')')))),
    )
    .parse(input)
}

/// Directive and schema arguments: same shape, constant values only.
pub fn parse_const_arguments(
    input: &'_ str,
) -> IResult<&'_ str, Vec<Argument<'_>>, GraphQLParsingError<'_>> {
    delimited(
        ws(char('(')),
        context("Argument list must not be empty", cut(many1(parse_const_argument))),
        context("Expected `)` to close argument list", cut(ws(char(')')))),
    )
    .parse(input)
}

fn parse_argument(input: &'_ str) -> IResult<&'_ str, Argument<'_>, GraphQLParsingError<'_>> {
    let (input, name) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    let (input, _) = context(
        "Expected `:` after argument name",
        cut(ws(char::<_, GraphQLParsingError>(':'))),
    )
    .parse(input)?;
    let (input, value) = context("Expected argument value", cut(ws(parse_value))).parse(input)?;
    Ok((input, Argument { name, value }))
}

fn parse_const_argument(input: &'_ str) -> IResult<&'_ str, Argument<'_>, GraphQLParsingError<'_>> {
    let (input, name) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    let (input, _) = context(
        "Expected `:` after argument name",
        cut(ws(char::<_, GraphQLParsingError>(':'))),
    )
    .parse(input)?;
    let (input, value) =
        context("Expected argument value", cut(ws(parse_const_value))).parse(input)?;
    Ok((input, Argument { name, value }))
}
