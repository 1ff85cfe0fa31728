#[allow(unused)]
use tracing::{debug, error, info, span, trace, warn, Instrument, Level};

use lazy_static::lazy_static;
use nom::{
    bytes::complete::{tag, take_till, take_while1},
    character::complete::char,
    combinator::map_res,
    sequence::delimited,
    IResult,
};
use regex::Regex;

lazy_static! {
    // Grammar of the stricter format revision: canonical metric names, label
    // values drawn from an explicit character class.
    pub(super) static ref STRICT_NAME_RE: Regex =
        Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").unwrap();
    pub(super) static ref STRICT_LABEL_VALUE_RE: Regex =
        Regex::new(r"^[\w/\-+.,= ]*$").unwrap();
}

/// ```abnf
/// word = 1*(ALPHA / DIGIT / "_")
/// ```
/// Descriptor comment names and label names are plain words.
pub(super) fn word1(input: &str) -> IResult<&str, &str> {
    take_while1(|item: char| item.is_alphanumeric() || item == '_')(input)
}

/// ```abnf
/// metricname = 1*(ALPHA / DIGIT / "_" / ".")
/// ```
/// Sample names additionally allow dots under the permissive revision.
pub(super) fn metric_name1(input: &str) -> IResult<&str, &str> {
    take_while1(|item: char| item.is_alphanumeric() || item == '_' || item == '.')(input)
}

/// abnf's SP token
pub(super) fn single_space(input: &str) -> IResult<&str, &str> {
    tag(" ")(input)
}

/// The text strictly between the two quote delimiters, taken verbatim.  No
/// escape processing; a value cannot contain the closing quote.
pub(super) fn quoted_value(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|item| item == '"'), char('"'))(input)
}

/// Sample values go through standard float parsing, so `NaN`, `+Inf`, and
/// exponent forms all work.  A token the float parser rejects fails the line.
pub(super) fn float1(input: &str) -> IResult<&str, f64> {
    map_res(
        take_while1(|item: char| item.is_alphanumeric() || matches!(item, '_' | '-' | '.' | '+')),
        str::parse,
    )(input)
}

/// Scrape timestamps are integral; captured by the lexer, not retained
/// downstream.
pub(super) fn integer1(input: &str) -> IResult<&str, i64> {
    nom::character::complete::i64(input)
}
