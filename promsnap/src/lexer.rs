#[allow(unused)]
use tracing::{debug, error, info, span, trace, warn, Instrument, Level};

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, map, opt, rest, value},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};
use serde_derive::Serialize;

mod types;
use types::*;

/// Which grammar revision to apply.  The permissive revision is what live
/// scrape endpoints emit and is the behavioral default; [`Dialect::Strict`]
/// re-checks classified samples against the older, narrower character
/// classes and downgrades any miss to an unrecognized line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Permissive,
    Strict,
}

/// Which metadata comment a descriptor line carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DescriptorKind {
    Help,
    Type,
}

#[derive(Clone, Debug, Serialize)]
pub struct Label<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Sample<'a> {
    pub name: &'a str,
    pub labels: Vec<Label<'a>>,
    pub number: f64,
    pub timestamp: Option<i64>,
}

/// One classified line of an exposition document.
#[derive(Clone, Debug, Serialize)]
pub enum Line<'a> {
    Descriptor {
        kind: DescriptorKind,
        name: &'a str,
        text: &'a str,
    },
    Sample(Sample<'a>),
    Blank,
    Invalid,
}

/// Diagnostic for a line the classifier could not place.  Feeds the skip
/// warnings; it never escapes a parse.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LineError<'a> {
    #[error("unmatched line «{0}»")]
    Unmatched(&'a str),
}

impl<'a> Label<'a> {
    /// ```abnf
    /// label = label-name "=" DQUOTE *value-char DQUOTE
    /// ```
    fn nom(input: &'a str) -> IResult<&str, Self> {
        map(
            tuple((word1, tag("="), quoted_value)),
            |(name, _, value)| Self { name, value },
        )(input)
    }
}

impl<'a> Sample<'a> {
    /// ```abnf
    /// sample = metricname [labels] SP number [SP timestamp]
    /// labels = "{" [label *("," label) [","]] "}"
    /// ```
    fn nom(input: &'a str) -> IResult<&str, Self> {
        let (input, name) = metric_name1(input)?;
        let (input, labels) = map(
            opt(delimited(
                tag("{"),
                terminated(separated_list0(tag(","), Label::nom), opt(tag(","))),
                tag("}"),
            )),
            |labels| labels.unwrap_or_default(),
        )(input)?;
        let (input, number) = preceded(single_space, float1)(input)?;
        let (input, timestamp) = opt(preceded(single_space, integer1))(input)?;

        // Trailing unparsed content is tolerated on sample lines.
        Ok((
            input,
            Self {
                name,
                labels,
                number,
                timestamp,
            },
        ))
    }

    fn conforms_strict(&self) -> bool {
        STRICT_NAME_RE.is_match(self.name)
            && self
                .labels
                .iter()
                .all(|label| STRICT_LABEL_VALUE_RE.is_match(label.value))
    }
}

impl<'a> Line<'a> {
    /// ```abnf
    /// help = %d72.69.76.80
    /// type = %d84.89.80.69
    /// descriptor = HASH SP (help / type) SP word SP *CHAR
    /// ```
    /// The free text after the name is taken verbatim.
    fn nom_descriptor(input: &'a str) -> IResult<&str, Self> {
        map(
            tuple((
                tag("# "),
                alt((
                    value(DescriptorKind::Help, tag("HELP")),
                    value(DescriptorKind::Type, tag("TYPE")),
                )),
                single_space,
                word1,
                single_space,
                rest,
            )),
            |(_, kind, _, name, _, text)| Self::Descriptor { kind, name, text },
        )(input)
    }

    /// Descriptor first, then sample, then blank; a line matching none of
    /// them is the caller's problem.
    fn nom(input: &'a str) -> IResult<&str, Self> {
        alt((
            Self::nom_descriptor,
            map(Sample::nom, Line::Sample),
            value(Line::Blank, eof),
        ))(input)
    }
}

fn classify(line: &str, dialect: Dialect) -> Result<Line<'_>, LineError<'_>> {
    match Line::nom(line) {
        Ok((_, Line::Sample(sample))) => {
            if dialect == Dialect::Strict && !sample.conforms_strict() {
                Err(LineError::Unmatched(line))
            } else {
                Ok(Line::Sample(sample))
            }
        }
        Ok((_, parsed)) => Ok(parsed),
        Err(_) => Err(LineError::Unmatched(line)),
    }
}

/// Splits an exposition document into classified lines.  Unmatched lines are
/// logged and come back as [`Line::Invalid`]; classification never fails.
#[tracing::instrument(skip(input))]
pub(super) fn exposition<'a>(input: &'a str, dialect: Dialect) -> Vec<Line<'a>> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            classify(line, dialect).unwrap_or_else(|err| {
                warn!(%err, "skipping line");
                Line::Invalid
            })
        })
        .collect()
}
