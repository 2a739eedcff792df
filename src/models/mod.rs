//! Data models for the bike weather checker
//!
//! - Forecast: the hourly forecast as delivered by the weather API
//! - Window: values derived while picking good bike times

pub mod forecast;
pub mod window;

pub use forecast::{ForecastPeriod, ForecastProperties, ForecastResponse, PrecipitationValue};
pub use window::{QualifyingPeriod, WindRange};
