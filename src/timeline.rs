//! Align two series onto a shared timeline for side-by-side comparison.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Reading;

// ---

/// AQI values of both series at one instant; `None` where a series has no reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub first: Option<u32>,
    pub second: Option<u32>,
}

/// Merge two series on the sorted union of their timestamps.
///
/// When a series repeats a timestamp, its first matching reading wins.
pub fn merge_timelines(first: &[Reading], second: &[Reading]) -> Vec<TimelinePoint> {
    // ---
    let mut timestamps: Vec<DateTime<Utc>> = first
        .iter()
        .chain(second)
        .map(|r| r.timestamp)
        .collect();
    timestamps.sort();
    timestamps.dedup();

    let aqi_at = |series: &[Reading], ts: DateTime<Utc>| {
        series.iter().find(|r| r.timestamp == ts).map(|r| r.aqi)
    };

    timestamps
        .into_iter()
        .map(|timestamp| TimelinePoint {
            timestamp,
            first: aqi_at(first, timestamp),
            second: aqi_at(second, timestamp),
        })
        .collect()
}
