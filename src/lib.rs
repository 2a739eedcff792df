//! Good bike weather
//!
//! Checks the hourly forecast for upcoming daytime hours that are mild, dry
//! and calm enough to ride, and pushes a summary of them to the phone.

pub mod config;
pub mod error;
pub mod forecast;
pub mod horizon;
pub mod logging;
pub mod message;
pub mod models;
pub mod notifier;
pub mod pipeline;
pub mod selector;
pub mod wind;

// Re-export core types for public API
pub use crate::config::{BikeWeatherConfig, Credentials, Thresholds};
pub use error::BikeWeatherError;
pub use forecast::{ForecastSource, NwsForecastClient};
pub use models::{ForecastPeriod, QualifyingPeriod, WindRange};
pub use notifier::{Notifier, PushoverClient};
pub use pipeline::{RunOutcome, run};
pub use selector::{merge_adjacent, select_bike_periods};
pub use wind::parse_wind_speed;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BikeWeatherError>;
