//! Synthetic readings used when no real data is available.
//!
//! Both generators take the random source and the current instant as
//! arguments; neither reads the clock or a global RNG.

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::{round1, Reading};

// ---

const BASE_AQI: f64 = 80.0;
const DAILY_AMPLITUDE: f64 = 30.0;
const NOISE: f64 = 10.0;

const PM25_PER_AQI: f64 = 0.4;
const PM10_PER_AQI: f64 = 0.7;

/// Generate `hours + 1` hourly readings ending at `now`, oldest first.
///
/// Each AQI follows a 24-hour sine around 80 with ±10 of uniform noise,
/// clamped at zero. PM values are fixed ratios of the AQI.
pub fn generate_series<R: Rng + ?Sized>(
    city: &str,
    hours: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Reading> {
    // ---
    (0..=hours)
        .rev()
        .map(|i| {
            let hours_ago = f64::from(i);
            let base = BASE_AQI + (PI * hours_ago / 12.0).sin() * DAILY_AMPLITUDE;
            let variation = rng.gen_range(-NOISE..NOISE);
            let aqi = (base + variation).max(0.0).round() as u32;

            Reading {
                city: city.to_string(),
                timestamp: now - Duration::hours(i64::from(i)),
                aqi,
                pm25: round1(f64::from(aqi) * PM25_PER_AQI),
                pm10: round1(f64::from(aqi) * PM10_PER_AQI),
            }
        })
        .collect()
}

/// Generate a single "current" reading.
///
/// Unlike [`generate_series`], values are drawn independently and uniformly:
/// AQI in [50, 200), PM2.5 in [10, 60) and PM10 in [20, 120), all whole numbers.
pub fn generate_current<R: Rng + ?Sized>(city: &str, now: DateTime<Utc>, rng: &mut R) -> Reading {
    // ---
    Reading {
        city: city.to_string(),
        timestamp: now,
        aqi: rng.gen_range(50..200),
        pm25: f64::from(rng.gen_range(10u32..60)),
        pm10: f64::from(rng.gen_range(20u32..120)),
    }
}
