//! Hourly forecast model for the weather.gov gridpoint API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top level forecast document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

/// The `properties` object of a forecast document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default, deserialize_with = "deserialize_periods")]
    pub periods: Vec<ForecastPeriod>,
}

/// Decode each period on its own so one malformed element is dropped
/// instead of failing the whole document.
fn deserialize_periods<'de, D>(deserializer: D) -> Result<Vec<ForecastPeriod>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    let periods = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(period) => Some(period),
            Err(e) => {
                tracing::debug!("Skipping malformed forecast period #{}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(periods)
}

/// One hourly forecast period.
///
/// Fields the selector relies on are optional so a single malformed period
/// still deserializes and is simply never selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastPeriod {
    pub number: u32,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_daytime: Option<bool>,
    pub temperature: Option<i64>,
    pub temperature_unit: Option<String>,
    pub probability_of_precipitation: Option<PrecipitationValue>,
    pub wind_speed: Option<String>,
    pub wind_direction: Option<String>,
    pub icon: Option<String>,
    pub short_forecast: Option<String>,
    pub detailed_forecast: Option<String>,
}

/// Quantitative value wrapper used by the API, e.g. `{"unitCode": "wmoUnit:percent", "value": 20}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationValue {
    #[serde(default)]
    pub unit_code: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
}

impl ForecastPeriod {
    /// Precipitation probability in percent, if the API reported one
    #[must_use]
    pub fn precipitation_percent(&self) -> Option<i64> {
        self.probability_of_precipitation
            .as_ref()
            .and_then(|p| p.value)
    }
}
