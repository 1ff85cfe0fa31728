#[allow(unused)]
use tracing::{debug, error, info, span, trace, warn, Instrument, Level};

use std::collections::HashMap;

use serde_derive::Serialize;

use crate::lexer::{self, DescriptorKind, Line};

// Component series folded into their parent family, checked in this order
// against the end of the sample name.  At most one suffix is stripped, and
// only from the end of the name.
const SUB_METRIC_SUFFIXES: &[(&str, &str)] = &[
    ("_bucket", "bucket"),
    ("_sum", "sum"),
    ("_count", "count"),
];

// Tag injected on folded samples; a literal label of the same name loses.
const PART_KEY: &str = "part";

/// Output of a parse: one entry per metric family, keyed by family name.
pub type MetricDataMap<'a> = HashMap<&'a str, MetricFamily<'a>>;

/// Metadata accumulated from `# HELP` and `# TYPE` descriptor comments.
/// Either field may stay unset when the scrape never carried the comment,
/// which a truncated payload legitimately does.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Description<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'a str>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'a str>,
}

/// A metric family: descriptor metadata plus every sample observed for it,
/// in source order, component series folded in.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct MetricFamily<'a> {
    pub description: Description<'a>,
    pub values: Vec<Sample<'a>>,
}

/// One observed value.  `tags["part"]` marks a folded sample as `bucket`,
/// `sum`, or `count`.
#[derive(Debug, PartialEq, Serialize)]
pub struct Sample<'a> {
    pub tags: HashMap<&'a str, &'a str>,
    pub value: f64,
}

impl<'a> Sample<'a> {
    fn from_lexer(sample: lexer::Sample<'a>, part: Option<&'static str>) -> Self {
        // The lexed timestamp stops here; the data model reserves it.
        let mut tags: HashMap<_, _> = sample
            .labels
            .into_iter()
            .map(|label| (label.name, label.value))
            .collect();

        if let Some(part) = part {
            tags.insert(PART_KEY, part);
        }

        Self {
            tags,
            value: sample.number,
        }
    }
}

/// Strips at most one recognized component suffix, yielding the family name
/// and the `part` tag to inject.  A name that is nothing but a suffix stays
/// whole; family names must be non-empty.
fn fold_name(name: &str) -> (&str, Option<&'static str>) {
    for &(suffix, part) in SUB_METRIC_SUFFIXES {
        match name.strip_suffix(suffix) {
            Some(family) if !family.is_empty() => return (family, Some(part)),
            _ => {}
        }
    }

    (name, None)
}

/// Folds classified lines into the family map.  Blank and unrecognized lines
/// contribute nothing; there is no failure mode.
#[tracing::instrument(skip_all)]
pub fn parse<'a>(lines: Vec<Line<'a>>) -> MetricDataMap<'a> {
    lines
        .into_iter()
        .fold(MetricDataMap::new(), |mut families, line| {
            match line {
                Line::Descriptor { kind, name, text } => {
                    // Descriptor names are taken literally, no suffix folding.
                    // Repeats overwrite.
                    let description = &mut families.entry(name).or_default().description;
                    match kind {
                        DescriptorKind::Help => description.help = Some(text),
                        DescriptorKind::Type => description.kind = Some(text),
                    }
                }
                Line::Sample(sample) => {
                    let (family, part) = fold_name(sample.name);
                    families
                        .entry(family)
                        .or_default()
                        .values
                        .push(Sample::from_lexer(sample, part));
                }
                Line::Blank | Line::Invalid => {}
            }

            families
        })
}
