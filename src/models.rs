//! Simple data models for the air-quality dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// A single air-quality observation for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    // ---
    pub city: String,
    pub timestamp: DateTime<Utc>,
    pub aqi: u32,
    /// µg/m³
    pub pm25: f64,
    /// µg/m³
    pub pm10: f64,
}

/// Direction of change between the first and last reading of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Aggregate statistics over a series of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    // ---
    pub avg_aqi: u32,
    pub max_aqi: u32,
    pub min_aqi: u32,
    pub trend: Trend,
    /// Absolute change from first to last reading, one decimal place.
    pub percent_change: f64,
}

impl StatsSummary {
    // ---
    /// Summary reported for a series with no readings.
    pub fn empty() -> Self {
        // ---
        StatsSummary {
            avg_aqi: 0,
            max_aqi: 0,
            min_aqi: 0,
            trend: Trend::Stable,
            percent_change: 0.0,
        }
    }
}

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reading_json_shape() {
        // ---
        let reading = Reading {
            city: "delhi".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 26, 18, 0, 0).unwrap(),
            aqi: 120,
            pm25: 48.0,
            pm10: 84.0,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["city"], "delhi");
        assert_eq!(json["timestamp"], "2025-03-26T18:00:00Z");
        assert_eq!(json["aqi"], 120);
        assert_eq!(json["pm25"], 48.0);
        assert_eq!(json["pm10"], 84.0);
    }

    #[test]
    fn test_stats_summary_field_names() {
        // ---
        let json = serde_json::to_value(StatsSummary::empty()).unwrap();
        assert_eq!(json["avgAqi"], 0);
        assert_eq!(json["maxAqi"], 0);
        assert_eq!(json["minAqi"], 0);
        assert_eq!(json["trend"], "stable");
        assert_eq!(json["percentChange"], 0.0);
    }

    #[test]
    fn test_round1() {
        // ---
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(12.96), 13.0);
        assert_eq!(round1(0.0), 0.0);
    }
}
