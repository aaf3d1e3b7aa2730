//! Air-quality dashboard backend.
//!
//! The pure core (`classifier`, `stats`, `mock`, `timeline`) has no I/O and
//! never reads the clock. `routes` wraps it in an Axum HTTP surface backed by
//! an injectable [`AirQualitySource`].
//!
//! This crate follows the Explicit Module Boundary Pattern (EMBP): sibling
//! modules import shared types from the crate root, not from each other's
//! internals.

pub mod cities;
pub mod classifier;
pub mod config;
pub mod mock;
pub mod models;
pub mod routes;
pub mod source;
pub mod stats;
pub mod timeline;

pub use classifier::{classify, insight_text, Category};
pub use config::Config;
pub use models::{Reading, StatsSummary, Trend};
pub use source::{AirQualitySource, MockSource, SharedSource};
pub use stats::compute_stats;
