//! Aggregate statistics over a series of readings.

use crate::models::{round1, Reading, StatsSummary, Trend};

// ---

/// Compute average, extrema and trend for a series in timestamp order.
///
/// Trend and percent change compare the first and last readings, not the
/// extrema. A zero first reading reports a percent change of 0.
pub fn compute_stats(series: &[Reading]) -> StatsSummary {
    // ---
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first.aqi, last.aqi),
        _ => return StatsSummary::empty(),
    };

    let total: u64 = series.iter().map(|r| u64::from(r.aqi)).sum();
    let avg_aqi = (total as f64 / series.len() as f64).round() as u32;
    let max_aqi = series.iter().map(|r| r.aqi).max().unwrap_or(0);
    let min_aqi = series.iter().map(|r| r.aqi).min().unwrap_or(0);

    let difference = i64::from(last) - i64::from(first);
    let trend = match difference {
        d if d > 0 => Trend::Up,
        d if d < 0 => Trend::Down,
        _ => Trend::Stable,
    };
    let percent_change = if first == 0 {
        0.0
    } else {
        (difference as f64 / f64::from(first) * 100.0).abs()
    };

    StatsSummary {
        avg_aqi,
        max_aqi,
        min_aqi,
        trend,
        percent_change: round1(percent_change),
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(values: &[u32]) -> Vec<Reading> {
        // ---
        let start = Utc.with_ymd_and_hms(2025, 3, 26, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &aqi)| Reading {
                city: "mumbai".to_string(),
                timestamp: start + Duration::hours(i as i64),
                aqi,
                pm25: 0.0,
                pm10: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_empty_series() {
        // ---
        assert_eq!(compute_stats(&[]), StatsSummary::empty());
    }

    #[test]
    fn test_flat_series() {
        // ---
        let stats = compute_stats(&series(&[50, 50]));
        assert_eq!(stats.avg_aqi, 50);
        assert_eq!(stats.max_aqi, 50);
        assert_eq!(stats.min_aqi, 50);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.percent_change, 0.0);
    }

    #[test]
    fn test_rising_series() {
        // ---
        let stats = compute_stats(&series(&[100, 150]));
        assert_eq!(
            stats,
            StatsSummary {
                avg_aqi: 125,
                max_aqi: 150,
                min_aqi: 100,
                trend: Trend::Up,
                percent_change: 50.0,
            }
        );
    }

    #[test]
    fn test_zero_first_value() {
        // ---
        let stats = compute_stats(&series(&[0, 80]));
        assert_eq!(stats.trend, Trend::Up);
        assert_eq!(stats.percent_change, 0.0);
    }

    #[test]
    fn test_trend_uses_endpoints_not_extrema() {
        // ---
        // Peak in the middle, but the series ends lower than it starts.
        let stats = compute_stats(&series(&[90, 200, 60]));
        assert_eq!(stats.trend, Trend::Down);
        assert_eq!(stats.max_aqi, 200);
        assert_eq!(stats.min_aqi, 60);
        assert_eq!(stats.avg_aqi, 117);
        assert_eq!(stats.percent_change, 33.3);
    }

    #[test]
    fn test_single_reading() {
        // ---
        let stats = compute_stats(&series(&[73]));
        assert_eq!(stats.avg_aqi, 73);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.percent_change, 0.0);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // ---
        // 301 / 3 = 100.33
        assert_eq!(compute_stats(&series(&[100, 100, 101])).avg_aqi, 100);
        // 302 / 3 = 100.67
        assert_eq!(compute_stats(&series(&[100, 101, 101])).avg_aqi, 101);
    }
}
