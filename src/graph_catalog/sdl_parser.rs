//! Parser for the schema definition language subset the translator understands:
//! object types, enums, custom scalars, an optional `schema { query: ... }` block,
//! and the `@relation` field directive. Descriptions and comments are skipped.

use nom::{
    branch::alt,
    character::complete::char,
    combinator::{cut, map, opt},
    error::context,
    multi::{many0, many1},
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::graphql_parser::{
    ast::{Argument, TypeRef, Value},
    common::{ignored, keyword, parse_name, ws},
    errors::GraphQLParsingError,
    selection_set::parse_const_arguments,
    type_ref::parse_type_ref,
    value::{parse_block_string, parse_const_value, parse_string_value},
};

#[derive(Debug, PartialEq, Clone)]
pub struct SdlDocument<'a> {
    pub definitions: Vec<SdlDefinition<'a>>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum SdlDefinition<'a> {
    Object(ObjectDefinition<'a>),
    Enum(EnumDefinition<'a>),
    Scalar(&'a str),
    Schema(SchemaDefinition<'a>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ObjectDefinition<'a> {
    pub name: &'a str,
    pub fields: Vec<FieldDefinition<'a>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub name: &'a str,
    pub arguments: Vec<InputValueDefinition<'a>>,
    pub field_type: TypeRef<'a>,
    pub directives: Vec<Directive<'a>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub name: &'a str,
    pub value_type: TypeRef<'a>,
    pub default_value: Option<Value<'a>>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Vec<Argument<'a>>,
}

impl<'a> Directive<'a> {
    pub fn argument(&self, name: &str) -> Option<&Value<'a>> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct EnumDefinition<'a> {
    pub name: &'a str,
    pub values: Vec<&'a str>,
}

/// `schema { query: Query }`. Pairs of (operation, type name).
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub operations: Vec<(&'a str, &'a str)>,
}

impl<'a> SchemaDefinition<'a> {
    pub fn query_type(&self) -> Option<&'a str> {
        self.operations
            .iter()
            .find(|(operation, _)| *operation == "query")
            .map(|(_, type_name)| *type_name)
    }
}

pub fn parse_sdl(input: &'_ str) -> Result<SdlDocument<'_>, GraphQLParsingError<'_>> {
    match many0(parse_definition).parse(input) {
        Ok((remainder, definitions)) => {
            let remainder = match ignored::<GraphQLParsingError>(remainder) {
                Ok((rest, _)) => rest,
                Err(_) => remainder,
            };
            if !remainder.is_empty() {
                return Err(GraphQLParsingError {
                    errors: vec![(remainder, "Expected a type, enum, scalar or schema definition")],
                });
            }
            Ok(SdlDocument { definitions })
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(GraphQLParsingError::new("", "Incomplete input")),
    }
}

// Descriptions document the schema but carry no translation semantics.
fn skip_description(input: &'_ str) -> IResult<&'_ str, (), GraphQLParsingError<'_>> {
    let (input, _) = opt(ws(alt((
        parse_block_string,
        map(parse_string_value, |_| ""),
    ))))
    .parse(input)?;
    Ok((input, ()))
}

fn parse_definition(
    input: &'_ str,
) -> IResult<&'_ str, SdlDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, _) = skip_description(input)?;
    let (rest, word) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    match word {
        "type" => map(parse_object_body, SdlDefinition::Object).parse(rest),
        "enum" => map(parse_enum_body, SdlDefinition::Enum).parse(rest),
        "scalar" => {
            let (rest, name) =
                context("Expected scalar name", cut(ws(parse_name::<GraphQLParsingError>)))
                    .parse(rest)?;
            Ok((rest, SdlDefinition::Scalar(name)))
        }
        "schema" => map(parse_schema_body, SdlDefinition::Schema).parse(rest),
        "interface" | "union" | "input" | "extend" | "directive" => Err(
            GraphQLParsingError::failure(input, "Unsupported schema definition"),
        ),
        _ => Err(nom::Err::Error(GraphQLParsingError::new(
            input,
            "Expected a type, enum, scalar or schema definition",
        ))),
    }
}

fn parse_object_body(
    input: &'_ str,
) -> IResult<&'_ str, ObjectDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, name) =
        context("Expected type name", cut(ws(parse_name::<GraphQLParsingError>))).parse(input)?;
    if input.starts_with("implements") || input.starts_with('@') {
        return Err(GraphQLParsingError::failure(
            input,
            "Interfaces and type directives are not supported",
        ));
    }
    let (input, fields) = delimited(
        context("Expected `{` after type name", cut(ws(char('{')))),
        context("Expected field definitions", cut(many1(parse_field_definition))),
        context("Expected `}` to close type definition", cut(ws(char('}')))),
    )
    .parse(input)?;
    Ok((input, ObjectDefinition { name, fields }))
}

fn parse_field_definition(
    input: &'_ str,
) -> IResult<&'_ str, FieldDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, _) = skip_description(input)?;
    let (input, name) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    let (input, arguments) = opt(delimited(
        ws(char('(')),
        context(
            "Argument definition list must not be empty",
            cut(many1(parse_input_value_definition)),
        ),
        context("Expected `)` to close argument definitions", cut(ws(char(')')))),
    ))
    .parse(input)?;
    let (input, _) = context(
        "Expected `:` after field name",
        cut(ws(char::<_, GraphQLParsingError>(':'))),
    )
    .parse(input)?;
    let (input, field_type) = context("Expected field type", cut(parse_type_ref)).parse(input)?;
    let (input, directives) = many0(parse_directive).parse(input)?;

    Ok((
        input,
        FieldDefinition {
            name,
            arguments: arguments.unwrap_or_default(),
            field_type,
            directives,
        },
    ))
}

fn parse_input_value_definition(
    input: &'_ str,
) -> IResult<&'_ str, InputValueDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, _) = skip_description(input)?;
    let (input, name) = ws(parse_name::<GraphQLParsingError>).parse(input)?;
    let (input, _) = context(
        "Expected `:` after argument name",
        cut(ws(char::<_, GraphQLParsingError>(':'))),
    )
    .parse(input)?;
    let (input, value_type) =
        context("Expected argument type", cut(parse_type_ref)).parse(input)?;
    let (input, default_value) = opt(preceded(
        ws(char('=')),
        context("Expected default value", cut(ws(parse_const_value))),
    ))
    .parse(input)?;

    Ok((
        input,
        InputValueDefinition {
            name,
            value_type,
            default_value,
        },
    ))
}

/// `@name[(const arguments)]`
fn parse_directive(input: &'_ str) -> IResult<&'_ str, Directive<'_>, GraphQLParsingError<'_>> {
    let (input, name) = preceded(
        ws(char::<_, GraphQLParsingError>('@')),
        context("Expected directive name", cut(parse_name)),
    )
    .parse(input)?;
    let (input, arguments) = opt(parse_const_arguments).parse(input)?;
    Ok((
        input,
        Directive {
            name,
            arguments: arguments.unwrap_or_default(),
        },
    ))
}

fn parse_enum_body(
    input: &'_ str,
) -> IResult<&'_ str, EnumDefinition<'_>, GraphQLParsingError<'_>> {
    let (input, name) =
        context("Expected enum name", cut(ws(parse_name::<GraphQLParsingError>))).parse(input)?;
    let (input, values) = delimited(
        context("Expected `{` after enum name", cut(ws(char('{')))),
        context(
            "Expected enum values",
            cut(many1(preceded(skip_description, ws(parse_name)))),
        ),
        context("Expected `}` to close enum definition", cut(ws(char('}')))),
    )
    .parse(input)?;
    Ok((input, EnumDefinition { name, values }))
}

fn parse_schema_body(
    input: &'_ str,
) -> IResult<&'_ str, SchemaDefinition<'_>, GraphQLParsingError<'_>> {
    let operation = (
        ws(keyword_operation),
        cut(ws(char(':'))),
        cut(ws(parse_name)),
    );
    let (input, operations) = delimited(
        context("Expected `{` after schema", cut(ws(char('{')))),
        context("Expected operation type definitions", cut(many1(operation))),
        context("Expected `}` to close schema definition", cut(ws(char('}')))),
    )
    .parse(input)?;
    let operations = operations
        .into_iter()
        .map(|(operation, _, type_name)| (operation, type_name))
        .collect();
    Ok((input, SchemaDefinition { operations }))
}

fn keyword_operation(input: &'_ str) -> IResult<&'_ str, &'_ str, GraphQLParsingError<'_>> {
    alt((
        keyword("query"),
        keyword("mutation"),
        keyword("subscription"),
    ))
    .parse(input)
}
