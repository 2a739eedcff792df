//! Values derived while looking for bike windows

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Window start, e.g. `Wednesday, May 01 10:00AM`
pub const START_TIME_FORMAT: &str = "%A, %B %d %I:%M%p";
/// Window end, e.g. `11:00AM`
pub const END_TIME_FORMAT: &str = "%I:%M%p";

/// Render a forecast timestamp in its own UTC offset.
/// Text that is not RFC 3339 is shown as given.
#[must_use]
pub fn display_time(text: &str, format: &str) -> String {
    DateTime::parse_from_rfc3339(text)
        .map_or_else(|_| text.to_string(), |dt| dt.format(format).to_string())
}

/// Wind speed bounds in mph parsed from text such as `"5 to 10 mph"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindRange {
    pub low: u32,
    pub high: u32,
}

/// A forecast period that passed every bike weather threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingPeriod {
    pub start_time: String,
    pub end_time: String,
    pub temperature: i64,
    /// Fraction between 0 and 1
    pub precipitation_probability: f64,
    /// High end of the wind range, mph
    pub max_wind_speed: u32,
}

impl QualifyingPeriod {
    /// Precipitation probability as a whole-number percentage
    #[must_use]
    pub fn precipitation_percent(&self) -> i64 {
        (self.precipitation_probability * 100.0).round() as i64
    }
}

impl fmt::Display for QualifyingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} Temp {} F Precipitation {}% Wind Speed {} mph",
            display_time(&self.start_time, START_TIME_FORMAT),
            display_time(&self.end_time, END_TIME_FORMAT),
            self.temperature,
            self.precipitation_percent(),
            self.max_wind_speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precipitation_percent_rounds() {
        let period = QualifyingPeriod {
            start_time: "a".to_string(),
            end_time: "b".to_string(),
            temperature: 70,
            precipitation_probability: 0.29,
            max_wind_speed: 10,
        };
        assert_eq!(period.precipitation_percent(), 29);
    }

    #[test]
    fn test_display_contains_every_field() {
        let period = QualifyingPeriod {
            start_time: "2024-05-01T10:00:00-04:00".to_string(),
            end_time: "2024-05-01T11:00:00-04:00".to_string(),
            temperature: 72,
            precipitation_probability: 0.1,
            max_wind_speed: 8,
        };
        assert_eq!(
            period.to_string(),
            "Wednesday, May 01 10:00AM - 11:00AM Temp 72 F Precipitation 10% Wind Speed 8 mph"
        );
    }

    #[test]
    fn test_display_keeps_unparseable_times() {
        let period = QualifyingPeriod {
            start_time: "this afternoon".to_string(),
            end_time: "2024-05-01T15:30:00-04:00".to_string(),
            temperature: 65,
            precipitation_probability: 0.0,
            max_wind_speed: 4,
        };
        assert_eq!(
            period.to_string(),
            "this afternoon - 03:30PM Temp 65 F Precipitation 0% Wind Speed 4 mph"
        );
    }
}
