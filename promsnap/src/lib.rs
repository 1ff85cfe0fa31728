//! `promsnap` parses a Prometheus text exposition scrape into a map of
//! metric families.
//!
//! Histogram and summary component series (`_bucket`, `_sum`, `_count`) are
//! folded into their parent family, each folded sample carrying a `part`
//! tag of `bucket`, `sum`, or `count`.  Lines that match no rule are logged
//! and skipped, so a parse always yields a map, however mangled the payload.

#[allow(unused)]
use tracing::{debug, error, info, span, trace, warn, Instrument, Level};

/// Classifies each line of an exposition document
pub mod lexer;

/// Folds classified lines into the family map
pub mod parser;

/// Bounded windows of polled values, for charting
pub mod series;


pub use lexer::Dialect;
pub use parser::{Description, MetricDataMap, MetricFamily, Sample};

/// Parses an exposition document into a [`MetricDataMap`] containing an
/// entry per [`MetricFamily`], under the permissive grammar.
pub fn parse(data: &str) -> MetricDataMap<'_> {
    parse_with(data, Dialect::default())
}

/// Parses an exposition document, validating samples against the requested
/// grammar revision.
pub fn parse_with(data: &str, dialect: Dialect) -> MetricDataMap<'_> {
    parser::parse(lexer::exposition(data, dialect))
}
