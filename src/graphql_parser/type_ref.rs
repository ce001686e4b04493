use nom::{
    branch::alt,
    character::complete::char,
    combinator::{cut, map, opt},
    error::context,
    sequence::delimited,
    IResult, Parser,
};

use super::{
    ast::TypeRef,
    common::{parse_name, ws},
    errors::GraphQLParsingError,
};

/// `Name`, `[Type]`, each optionally followed by `!`.
pub fn parse_type_ref(input: &'_ str) -> IResult<&'_ str, TypeRef<'_>, GraphQLParsingError<'_>> {
    let (input, base) = alt((
        map(
            delimited(
                ws(char('[')),
                cut(parse_type_ref),
                context("Expected `]` to close list type", cut(ws(char(']')))),
            ),
            |inner| TypeRef::List(Box::new(inner)),
        ),
        map(ws(parse_name), TypeRef::Named),
    ))
    .parse(input)?;

    let (input, bang) = opt(ws(char::<_, GraphQLParsingError>('!'))).parse(input)?;
    let type_ref = match bang {
        Some(_) => TypeRef::NonNull(Box::new(base)),
        None => base,
    };
    Ok((input, type_ref))
}
