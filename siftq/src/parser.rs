//! Tokenizer using nom
//!
//! Splits raw input on whitespace and classifies each token as a filter
//! token or a free-text term.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    sequence::terminated,
    IResult,
};

use crate::query::Query;

/// Parse a raw query string into filters and terms
pub(crate) fn parse_query(input: &str) -> Query {
    let mut filters = Vec::new();
    let mut terms = Vec::new();

    for token in input.split_whitespace() {
        match filter_name(token) {
            Some(name) => filters.push(name.to_string()),
            None => terms.push(token),
        }
    }

    Query::new(input, filters, terms.join(" "))
}

/// Extract the filter name from a token, if the token is a filter token.
///
/// A filter token is one or more word characters followed by exactly one
/// trailing colon and nothing else. Word characters are ASCII letters,
/// digits, and underscore.
fn filter_name(token: &str) -> Option<&str> {
    let (rest, name) = filter_token(token).ok()?;
    rest.is_empty().then_some(name)
}

fn filter_token(input: &str) -> IResult<&str, &str> {
    terminated(take_while1(is_word_char), char(':'))(input)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
