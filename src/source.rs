//! Data-source collaborator for the HTTP layer.
//!
//! Routes only see [`AirQualitySource`]; the shipped implementation is
//! [`MockSource`], which synthesizes readings from a seedable RNG.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};

use crate::mock;
use crate::models::Reading;

// ---

/// Provider of current and historical readings.
///
/// `now` is supplied by the caller; implementations must not read the clock.
pub trait AirQualitySource: Send + Sync {
    // ---
    fn current(&self, city: &str, now: DateTime<Utc>) -> Result<Reading>;

    /// Readings for the last `hours` hours, oldest first. May be empty.
    fn historical(&self, city: &str, hours: u32, now: DateTime<Utc>) -> Result<Vec<Reading>>;
}

/// Shared handle stored in router state.
pub type SharedSource = Arc<dyn AirQualitySource>;

/// Source backed by the mock generators.
#[derive(Debug)]
pub struct MockSource {
    rng: Mutex<StdRng>,
}

impl MockSource {
    // ---
    /// Build a source seeded with `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        // ---
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MockSource {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        // ---
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| anyhow!("Mock RNG lock poisoned: {}", e))?;
        Ok(f(&mut *rng))
    }
}

impl AirQualitySource for MockSource {
    // ---
    fn current(&self, city: &str, now: DateTime<Utc>) -> Result<Reading> {
        // ---
        tracing::debug!("Generating mock current reading for {}", city);
        self.with_rng(|rng| mock::generate_current(city, now, rng))
    }

    fn historical(&self, city: &str, hours: u32, now: DateTime<Utc>) -> Result<Vec<Reading>> {
        // ---
        tracing::debug!("Generating {}h mock series for {}", hours, city);
        self.with_rng(|rng| mock::generate_series(city, hours, now, rng))
    }
}
