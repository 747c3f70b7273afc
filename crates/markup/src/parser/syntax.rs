//! Grammar of a single tag occurrence.
//!
//! ```text
//! tag      := '<' '/'? name argument* ws* '/'? '>'
//! name     := word+
//! argument := ws* word* '=' ( '"' [^"]* '"' | [^ws>]* )
//! ```
//!
//! `word` is an alphanumeric or underscore character. A quoted value must be
//! followed by whitespace, `>`, `/>` or the next `name=`; otherwise the whole
//! value, quotes included, is read as a bare value.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{opt, peek, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, separated_pair, terminated},
};

use crate::registry::is_word_char;

/// One recognized `<...>` occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct TagMarkup<'a> {
    /// The complete matched text, brackets included.
    pub raw: &'a str,
    /// Bare tag name, without the closing `/`.
    pub name: &'a str,
    /// `true` for `</name>`.
    pub closing: bool,
    /// Argument captures in source order.
    pub args: Vec<(&'a str, &'a str)>,
}

/// Parse one tag occurrence at the start of `input`.
pub fn tag_markup(input: &str) -> IResult<&str, TagMarkup<'_>> {
    let (rest, _) = char('<')(input)?;
    let (rest, closing) = opt(char('/'))(rest)?;
    let (rest, name) = take_while1(is_word_char)(rest)?;
    let (rest, args) = many0(argument)(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = opt(char('/'))(rest)?;
    let (rest, _) = char('>')(rest)?;

    let raw = &input[..input.len() - rest.len()];
    Ok((
        rest,
        TagMarkup {
            raw,
            name,
            closing: closing.is_some(),
            args,
        },
    ))
}

fn argument(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        multispace0,
        separated_pair(
            take_while(is_word_char),
            char('='),
            alt((quoted_value, bare_value)),
        ),
    )(input)
}

fn quoted_value(input: &str) -> IResult<&str, &str> {
    terminated(
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        peek(quoted_end),
    )(input)
}

fn quoted_end(input: &str) -> IResult<&str, ()> {
    value(
        (),
        alt((
            multispace1,
            tag(">"),
            tag("/>"),
            recognize(pair(take_while(is_word_char), char('='))),
        )),
    )(input)
}

/// Unquoted value, up to whitespace or `>`. A trailing `/` right before `>` is
/// the self-closing marker, not part of the value.
fn bare_value(input: &str) -> IResult<&str, &str> {
    let (rest, raw) = take_while(|c: char| !c.is_whitespace() && c != '>')(input)?;
    match raw.strip_suffix('/') {
        Some(trimmed) if rest.starts_with('>') => Ok((&input[trimmed.len()..], trimmed)),
        _ => Ok((rest, raw)),
    }
}
