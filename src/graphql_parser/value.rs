use std::borrow::Cow;

use nom::{
    bytes::complete::{tag, take_until},
    character::complete::{char, digit1, one_of},
    combinator::{cut, opt, recognize},
    error::context,
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};

use super::{
    ast::Value,
    common::{ignored, is_name_char, parse_name, ws},
    errors::GraphQLParsingError,
};

/// Parse a value that may reference variables (query arguments).
pub fn parse_value(input: &'_ str) -> IResult<&'_ str, Value<'_>, GraphQLParsingError<'_>> {
    value_with(input, false)
}

/// Parse a constant value (variable defaults, schema defaults, directive arguments).
pub fn parse_const_value(input: &'_ str) -> IResult<&'_ str, Value<'_>, GraphQLParsingError<'_>> {
    value_with(input, true)
}

fn value_with(input: &str, constant: bool) -> IResult<&str, Value<'_>, GraphQLParsingError<'_>> {
    let (input, _) = ignored::<GraphQLParsingError>(input)?;
    match input.chars().next() {
        Some('$') if constant => Err(GraphQLParsingError::failure(
            input,
            "Variables are not allowed in constant values",
        )),
        Some('$') => parse_variable(input),
        Some('"') => {
            let (input, s) = parse_string_value(input)?;
            Ok((input, Value::String(s)))
        }
        Some('[') => parse_list_value(input, constant),
        Some('{') => Err(GraphQLParsingError::failure(
            input,
            "Input object values are not supported",
        )),
        Some(c) if c == '-' || c.is_ascii_digit() => parse_number(input),
        _ => {
            let (rest, name) = parse_name::<GraphQLParsingError>(input)?;
            let value = match name {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                symbol => Value::Enum(Cow::Borrowed(symbol)),
            };
            Ok((rest, value))
        }
    }
}

fn parse_variable(input: &'_ str) -> IResult<&'_ str, Value<'_>, GraphQLParsingError<'_>> {
    let (input, name) = preceded(
        char('$'),
        context("Expected variable name after `$`", cut(parse_name::<GraphQLParsingError>)),
    )
    .parse(input)?;
    Ok((input, Value::Variable(Cow::Borrowed(name))))
}

fn parse_list_value(
    input: &str,
    constant: bool,
) -> IResult<&str, Value<'_>, GraphQLParsingError<'_>> {
    let (input, items) = delimited(
        ws(char('[')),
        many0(ws(|i| value_with(i, constant))),
        context("Expected `]` to close list value", cut(ws(char(']')))),
    )
    .parse(input)?;
    Ok((input, Value::List(items)))
}

/// Int or Float. A fraction or exponent part makes it a Float.
pub fn parse_number(input: &'_ str) -> IResult<&'_ str, Value<'_>, GraphQLParsingError<'_>> {
    let number: IResult<&str, &str, GraphQLParsingError> = recognize((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input);
    let (rest, text) = number?;

    if rest.starts_with(|c: char| is_name_char(c) || c == '.') {
        return Err(GraphQLParsingError::failure(
            input,
            "Invalid number literal",
        ));
    }

    if text.contains(['.', 'e', 'E']) {
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok((rest, Value::Float(f))),
            _ => Err(GraphQLParsingError::failure(
                input,
                "Float literal out of range",
            )),
        }
    } else {
        match text.parse::<i64>() {
            Ok(i) => Ok((rest, Value::Int(i))),
            Err(_) => Err(GraphQLParsingError::failure(
                input,
                "Int literal out of range",
            )),
        }
    }
}

/// Double-quoted string with GraphQL escapes. Borrows from the input when no escape is present.
pub fn parse_string_value(
    input: &'_ str,
) -> IResult<&'_ str, Cow<'_, str>, GraphQLParsingError<'_>> {
    let (body, _) = char::<_, GraphQLParsingError>('"').parse(input)?;
    let mut decoded: Option<String> = None;
    let mut chars = body.char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => {
                let value = match decoded {
                    Some(s) => Cow::Owned(s),
                    None => Cow::Borrowed(&body[..idx]),
                };
                return Ok((&body[idx + 1..], value));
            }
            '\\' => {
                let unescaped = match chars.next() {
                    Some((_, '"')) => '"',
                    Some((_, '\\')) => '\\',
                    Some((_, '/')) => '/',
                    Some((_, 'b')) => '\u{0008}',
                    Some((_, 'f')) => '\u{000C}',
                    Some((_, 'n')) => '\n',
                    Some((_, 'r')) => '\r',
                    Some((_, 't')) => '\t',
                    Some((u_idx, 'u')) => {
                        let code_point = body
                            .get(u_idx + 1..u_idx + 5)
                            .filter(|hex| hex.chars().all(|h| h.is_ascii_hexdigit()))
                            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                            .and_then(char::from_u32);
                        match code_point {
                            Some(ch) => {
                                // The four hex digits are ASCII, one char each.
                                for _ in 0..4 {
                                    chars.next();
                                }
                                ch
                            }
                            None => {
                                return Err(GraphQLParsingError::failure(
                                    &body[idx..],
                                    "Invalid unicode escape in string",
                                ))
                            }
                        }
                    }
                    _ => {
                        return Err(GraphQLParsingError::failure(
                            &body[idx..],
                            "Invalid escape sequence in string",
                        ))
                    }
                };
                decoded
                    .get_or_insert_with(|| body[..idx].to_string())
                    .push(unescaped);
            }
            '\n' | '\r' => {
                return Err(GraphQLParsingError::failure(
                    input,
                    "Unterminated string literal",
                ))
            }
            other => {
                if let Some(buf) = decoded.as_mut() {
                    buf.push(other);
                }
            }
        }
    }

    Err(GraphQLParsingError::failure(
        input,
        "Unterminated string literal",
    ))
}

/// `"""..."""` block string, used only for SDL descriptions. Content is returned raw.
pub fn parse_block_string(input: &'_ str) -> IResult<&'_ str, &'_ str, GraphQLParsingError<'_>> {
    delimited(
        tag("\"\"\""),
        context("Unterminated block string", cut(take_until("\"\"\""))),
        tag("\"\"\""),
    )
    .parse(input)
}
