use nom::error::{ContextError, ParseError};
use std::fmt;

#[derive(Debug, PartialEq)]
pub struct GraphQLParsingError<'a> {
    pub errors: Vec<(&'a str, &'static str)>,
}

impl<'a> GraphQLParsingError<'a> {
    pub fn new(input: &'a str, ctx: &'static str) -> Self {
        GraphQLParsingError {
            errors: vec![(input, ctx)],
        }
    }

    /// Wrap in `nom::Err::Failure` so enclosing `alt`/`many0` combinators stop backtracking.
    pub fn failure(input: &'a str, ctx: &'static str) -> nom::Err<Self> {
        nom::Err::Failure(Self::new(input, ctx))
    }
}

impl<'a> ParseError<&'a str> for GraphQLParsingError<'a> {
    fn from_error_kind(input: &'a str, _kind: nom::error::ErrorKind) -> Self {
        GraphQLParsingError {
            errors: vec![(input, "unknown error")],
        }
    }

    fn append(input: &'a str, _kind: nom::error::ErrorKind, mut other: Self) -> Self {
        other.errors.push((input, "unknown error (appended)"));
        other
    }
}

impl<'a> ContextError<&'a str> for GraphQLParsingError<'a> {
    fn add_context(input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        other.errors.push((input, ctx));
        other
    }
}

impl fmt::Display for GraphQLParsingError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (input, ctx) in &self.errors {
            // Long remainders make the message unreadable; the first line is enough to locate it.
            let near = input.lines().next().unwrap_or("").trim();
            if near.is_empty() {
                writeln!(f, "{} at end of input", ctx)?;
            } else {
                writeln!(f, "{} near `{}`", ctx, near)?;
            }
        }
        Ok(())
    }
}

impl<'a> From<nom::error::Error<&'a str>> for GraphQLParsingError<'a> {
    fn from(err: nom::error::Error<&'a str>) -> Self {
        GraphQLParsingError {
            errors: vec![(err.input, "Unable to parse")],
        }
    }
}
