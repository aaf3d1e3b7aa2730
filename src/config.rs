//! Configuration loader for the `aqi-dashboard` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
use std::{env, net::SocketAddr};

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Hard ceiling for `MAX_HOURS`: one year of hourly readings.
pub const MAX_HOURS_CEILING: u32 = 8760;

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// City used when a request does not name one.
    pub default_city: String,

    /// History window used when a request does not give `hours`.
    pub default_hours: u32,

    /// Upper limit on the history window (safety limit).
    pub max_hours: u32,

    /// Seed for the mock data RNG; `None` seeds from entropy.
    pub mock_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        // ---
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_city: "bangalore".to_string(),
            default_hours: 24,
            max_hours: 720,
            mock_seed: None,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `BIND_ADDR` – listen address (default: `0.0.0.0:8080`)
/// - `DEFAULT_CITY` – city when none is requested (default: `bangalore`)
/// - `DEFAULT_HOURS` – history window when none is requested (default: 24)
/// - `MAX_HOURS` – cap on the history window (default: 720, at most 8760)
/// - `MOCK_SEED` – fixed seed for mock data (default: random)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();

    let bind_addr = env_or!("BIND_ADDR", defaults.bind_addr)
        .parse::<SocketAddr>()
        .map_err(|e| anyhow!("Invalid BIND_ADDR: {}", e))?;
    let default_city = env_or!("DEFAULT_CITY", defaults.default_city);
    let default_hours = parse_env_u32!("DEFAULT_HOURS", defaults.default_hours);
    let max_hours = parse_env_u32!("MAX_HOURS", defaults.max_hours);
    let mock_seed = env::var("MOCK_SEED")
        .ok()
        .map(|v| v.parse::<u64>())
        .transpose()
        .map_err(|e| anyhow!("Invalid MOCK_SEED: {}", e))?;

    let cfg = Config {
        bind_addr,
        default_city,
        default_hours,
        max_hours,
        mock_seed,
    };
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    // ---
    /// Check cross-field limits that parsing alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        // ---
        if self.max_hours > MAX_HOURS_CEILING {
            return Err(anyhow!(
                "MAX_HOURS ({}) must not exceed {}",
                self.max_hours,
                MAX_HOURS_CEILING
            ));
        }
        if self.default_hours > self.max_hours {
            return Err(anyhow!(
                "DEFAULT_HOURS ({}) must not exceed MAX_HOURS ({})",
                self.default_hours,
                self.max_hours
            ));
        }
        Ok(())
    }

    /// Resolve a requested history window, applying the default and the cap.
    pub fn hours_or_default(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_hours)
            .min(self.max_hours)
            .min(MAX_HOURS_CEILING)
    }

    /// Resolve a requested city, applying the default.
    pub fn city_or_default(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.default_city.clone())
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        let seed = match self.mock_seed {
            Some(seed) => seed.to_string(),
            None => "<entropy>".to_string(),
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  BIND_ADDR     : {}", self.bind_addr);
        tracing::info!("  DEFAULT_CITY  : {}", self.default_city);
        tracing::info!("  DEFAULT_HOURS : {}", self.default_hours);
        tracing::info!("  MAX_HOURS     : {}", self.max_hours);
        tracing::info!("  MOCK_SEED     : {}", seed);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_hours_default_and_cap() {
        // ---
        let cfg = Config::default();
        assert_eq!(cfg.hours_or_default(None), 24);
        assert_eq!(cfg.hours_or_default(Some(0)), 0);
        assert_eq!(cfg.hours_or_default(Some(48)), 48);
        assert_eq!(cfg.hours_or_default(Some(100_000)), 720);

        // Unvalidated configs still never exceed the ceiling.
        let loose = Config {
            max_hours: u32::MAX,
            ..Config::default()
        };
        assert_eq!(loose.hours_or_default(Some(u32::MAX)), MAX_HOURS_CEILING);
    }

    #[test]
    fn test_validate_limits() {
        // ---
        assert!(Config::default().validate().is_ok());

        let at_ceiling = Config {
            max_hours: MAX_HOURS_CEILING,
            ..Config::default()
        };
        assert!(at_ceiling.validate().is_ok());

        let too_large = Config {
            max_hours: MAX_HOURS_CEILING + 1,
            ..Config::default()
        };
        assert!(too_large.validate().is_err());

        let unbounded = Config {
            max_hours: u32::MAX,
            ..Config::default()
        };
        assert!(unbounded.validate().is_err());

        let default_over_cap = Config {
            default_hours: 48,
            max_hours: 24,
            ..Config::default()
        };
        assert!(default_over_cap.validate().is_err());
    }

    #[test]
    fn test_city_default() {
        // ---
        let cfg = Config::default();
        assert_eq!(cfg.city_or_default(None), "bangalore");
        assert_eq!(cfg.city_or_default(Some("pune".into())), "pune");
    }
}
