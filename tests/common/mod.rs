#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};

/// One hourly period in the weather.gov JSON shape
pub fn period_json(
    number: u32,
    start: DateTime<Utc>,
    temperature: i64,
    precipitation: i64,
    wind: &str,
) -> Value {
    json!({
        "number": number,
        "name": "",
        "startTime": start.to_rfc3339(),
        "endTime": (start + Duration::hours(1)).to_rfc3339(),
        "isDaytime": true,
        "temperature": temperature,
        "temperatureUnit": "F",
        "temperatureTrend": "",
        "probabilityOfPrecipitation": {"unitCode": "wmoUnit:percent", "value": precipitation},
        "windSpeed": wind,
        "windDirection": "W",
        "icon": "https://api.weather.gov/icons/land/day/few?size=small",
        "shortForecast": "Sunny",
        "detailedForecast": ""
    })
}

/// Wrap periods in a forecast document
pub fn forecast_json(periods: Vec<Value>) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "units": "us",
            "forecastGenerator": "HourlyForecastGenerator",
            "periods": periods
        }
    })
}
