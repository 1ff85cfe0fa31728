use std::collections::VecDeque;
use std::time::SystemTime;

use serde_derive::Serialize;

use crate::parser::MetricDataMap;

/// One charted observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub at: SystemTime,
    pub value: f64,
}

/// Rolling window of charted values for one tracked metric, fed with the
/// first sample of its family once per poll.  The oldest point falls off
/// when the window is full.
#[derive(Debug, Serialize)]
pub struct SeriesBuffer {
    display_name: String,
    max_points: usize,
    points: VecDeque<SeriesPoint>,
}

impl SeriesBuffer {
    pub fn new(display_name: impl Into<String>, max_points: usize) -> Self {
        Self {
            display_name: display_name.into(),
            max_points: max_points.max(1),
            points: VecDeque::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Appends the first value of `metric` from a parsed scrape, evicting
    /// the oldest point at capacity.  A scrape missing the family, or
    /// carrying it with no samples, leaves the window untouched.
    pub fn record(
        &mut self,
        at: SystemTime,
        snapshot: &MetricDataMap<'_>,
        metric: &str,
    ) -> Option<f64> {
        let value = snapshot.get(metric)?.values.first()?.value;

        if self.points.len() == self.max_points {
            self.points.pop_front();
        }
        self.points.push_back(SeriesPoint { at, value });

        Some(value)
    }

    /// Drops every point.  The dashboard does this when charting resumes
    /// after a pause, so the window restarts from live data.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }
}
