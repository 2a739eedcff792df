//! Error types for the bike weather checker

use thiserror::Error;

/// Main error type for the bike weather checker
#[derive(Error, Debug)]
pub enum BikeWeatherError {
    /// Missing credentials or invalid settings
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The forecast could not be retrieved or decoded
    #[error("Forecast error: {message}")]
    Forecast { message: String },

    /// The push notification could not be delivered
    #[error("Notification error: {message}")]
    Notification { message: String },

    /// HTTP client construction errors
    #[error("HTTP client error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
}

impl BikeWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new forecast error
    pub fn forecast<S: Into<String>>(message: S) -> Self {
        Self::Forecast {
            message: message.into(),
        }
    }

    /// Create a new notification error
    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BikeWeatherError::Config { message } => {
                format!("Configuration error: {message}")
            }
            BikeWeatherError::Forecast { message } => {
                format!("Unable to fetch the weather forecast: {message}")
            }
            BikeWeatherError::Notification { message } => {
                format!("Unable to send the push notification: {message}")
            }
            BikeWeatherError::Http { source } => {
                format!("Unable to set up the HTTP client: {source}")
            }
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = BikeWeatherError::config("PUSHOVER_USER required");
        assert!(matches!(config_err, BikeWeatherError::Config { .. }));

        let forecast_err = BikeWeatherError::forecast("status 503");
        assert!(matches!(forecast_err, BikeWeatherError::Forecast { .. }));

        let notify_err = BikeWeatherError::notification("status 400");
        assert!(matches!(notify_err, BikeWeatherError::Notification { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = BikeWeatherError::config("PUSHOVER_TOKEN required");
        assert!(config_err.user_message().contains("PUSHOVER_TOKEN required"));

        let forecast_err = BikeWeatherError::forecast("status 500");
        assert!(forecast_err.user_message().contains("weather forecast"));

        let notify_err = BikeWeatherError::notification("bad token");
        assert!(notify_err.user_message().contains("bad token"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        assert_eq!(BikeWeatherError::config("x").exit_code(), 1);
        assert_eq!(BikeWeatherError::forecast("x").exit_code(), 1);
        assert_eq!(BikeWeatherError::notification("x").exit_code(), 1);
    }
}
