//! Configuration management for the bike weather checker
//!
//! Settings come from an optional TOML file and `BIKEWEATHER__*` environment
//! overrides. Pushover credentials are read separately, once, at startup.

use crate::{BikeWeatherError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest forecast horizon accepted, in hours (the hourly feed covers about a week)
pub const MAX_HORIZON_HOURS: u32 = 24 * 16;

/// Environment variable holding the Pushover application token
pub const PUSHOVER_TOKEN_VAR: &str = "PUSHOVER_TOKEN";
/// Environment variable holding the Pushover user key
pub const PUSHOVER_USER_VAR: &str = "PUSHOVER_USER";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BikeWeatherConfig {
    /// Forecast endpoint settings
    pub forecast: ForecastConfig,
    /// Notification endpoint settings
    pub notification: NotificationConfig,
    /// Bike weather thresholds
    pub thresholds: Thresholds,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Forecast API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Hourly forecast URL
    pub url: String,
    /// User agent sent to the forecast API
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Push notification configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Pushover messages endpoint
    pub url: String,
    /// Merge back-to-back windows into one block before notifying
    pub merge_adjacent: bool,
}

/// Limits a forecast period must stay strictly within to be good bike weather
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Exclusive lower temperature bound, in the forecast's own unit
    pub min_temperature: i64,
    /// Exclusive upper temperature bound, in the forecast's own unit
    pub max_temperature: i64,
    /// Exclusive upper bound on precipitation probability (percent)
    pub max_precipitation: i64,
    /// Exclusive upper bound on the high end of the wind range (mph)
    pub max_wind_mph: u32,
    /// How far ahead periods are considered, in hours
    pub horizon_hours: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

fn default_forecast_url() -> String {
    "https://api.weather.gov/gridpoints/LWX/97,75/forecast/hourly".to_string()
}

fn default_user_agent() -> String {
    "github.com/kingishb/good-bike-weather".to_string()
}

fn default_pushover_url() -> String {
    "https://api.pushover.net/1/messages.json".to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            url: default_forecast_url(),
            user_agent: default_user_agent(),
            timeout_seconds: 30,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            url: default_pushover_url(),
            merge_adjacent: false,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_temperature: 50,
            max_temperature: 85,
            max_precipitation: 30,
            max_wind_mph: 15,
            horizon_hours: 72,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl BikeWeatherConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            tracing::debug!("Reading configuration from {}", config_file.display());
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("BIKEWEATHER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| BikeWeatherError::config(format!("Failed to build configuration: {e}")))?;

        let config: BikeWeatherConfig = settings.try_deserialize().map_err(|e| {
            BikeWeatherError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("good-bike-weather").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_thresholds()?;
        self.validate_endpoints()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_thresholds(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.min_temperature >= t.max_temperature {
            return Err(BikeWeatherError::config(format!(
                "Minimum temperature ({}) must be below maximum temperature ({})",
                t.min_temperature, t.max_temperature
            )));
        }

        if !(0..=100).contains(&t.max_precipitation) {
            return Err(BikeWeatherError::config(
                "Precipitation threshold must be a percentage between 0 and 100",
            ));
        }

        if t.horizon_hours == 0 {
            return Err(BikeWeatherError::config("Forecast horizon must be at least one hour"));
        }

        if t.horizon_hours > MAX_HORIZON_HOURS {
            return Err(BikeWeatherError::config(format!(
                "Forecast horizon cannot exceed {MAX_HORIZON_HOURS} hours"
            )));
        }

        Ok(())
    }

    fn validate_endpoints(&self) -> Result<()> {
        if self.forecast.timeout_seconds > 300 {
            return Err(BikeWeatherError::config(
                "Forecast timeout cannot exceed 300 seconds",
            ));
        }

        for (name, url) in [
            ("Forecast", &self.forecast.url),
            ("Notification", &self.notification.url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(BikeWeatherError::config(format!(
                    "{name} URL must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BikeWeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(BikeWeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}

/// Pushover credentials
#[derive(Clone)]
pub struct Credentials {
    /// Application token
    pub token: String,
    /// User key
    pub user: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("user", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// A variable that is unset or blank is reported by name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| BikeWeatherError::config(format!("{name} required")))
        };

        let user = required(PUSHOVER_USER_VAR)?;
        let token = required(PUSHOVER_TOKEN_VAR)?;
        Ok(Self { token, user })
    }
}
