//! Bike weather selection
//!
//! Applies the threshold rules to raw forecast periods. The result keeps the
//! input order and never invents periods; a malformed period is skipped.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::debug;

use crate::config::Thresholds;
use crate::horizon::within_horizon;
use crate::models::{ForecastPeriod, QualifyingPeriod};
use crate::wind::parse_wind_speed;

/// Why a forecast period is not good bike weather
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Night time, or the daytime flag is missing
    NotDaytime,
    /// Temperature missing or outside the open interval
    Temperature,
    /// Precipitation probability missing or too high
    Precipitation,
    /// Wind speed missing or its high end too strong
    Wind,
    /// Start time beyond the horizon or unparseable
    OutsideHorizon,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::NotDaytime => "not daytime",
            Rejection::Temperature => "temperature out of range",
            Rejection::Precipitation => "precipitation too likely",
            Rejection::Wind => "too windy",
            Rejection::OutsideHorizon => "outside forecast horizon",
        };
        f.write_str(reason)
    }
}

/// Check a single period against every threshold.
pub fn evaluate_period(
    period: &ForecastPeriod,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Result<QualifyingPeriod, Rejection> {
    if period.is_daytime != Some(true) {
        return Err(Rejection::NotDaytime);
    }

    let temperature = period
        .temperature
        .filter(|t| thresholds.min_temperature < *t && *t < thresholds.max_temperature)
        .ok_or(Rejection::Temperature)?;

    let precipitation = period
        .precipitation_percent()
        .filter(|p| *p < thresholds.max_precipitation)
        .ok_or(Rejection::Precipitation)?;

    let wind = period
        .wind_speed
        .as_deref()
        .map(parse_wind_speed)
        .filter(|w| w.high < thresholds.max_wind_mph)
        .ok_or(Rejection::Wind)?;

    let horizon = Duration::hours(i64::from(thresholds.horizon_hours));
    if !within_horizon(&period.start_time, now, horizon) {
        return Err(Rejection::OutsideHorizon);
    }

    Ok(QualifyingPeriod {
        start_time: period.start_time.clone(),
        end_time: period.end_time.clone(),
        temperature,
        precipitation_probability: precipitation as f64 / 100.0,
        max_wind_speed: wind.high,
    })
}

/// Pick the periods that are good bike weather, in forecast order.
#[must_use]
pub fn select_bike_periods(
    periods: &[ForecastPeriod],
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Vec<QualifyingPeriod> {
    periods
        .iter()
        .filter_map(|period| match evaluate_period(period, now, thresholds) {
            Ok(qualifying) => Some(qualifying),
            Err(reason) => {
                debug!(
                    "Skipping period {} starting {}: {}",
                    period.number, period.start_time, reason
                );
                None
            }
        })
        .collect()
}

/// Join back-to-back periods into longer blocks.
///
/// Two periods are adjacent when the first ends exactly when the next starts.
/// A merged block reports the worst case: the highest temperature,
/// precipitation probability and wind speed of its parts.
#[must_use]
pub fn merge_adjacent(periods: Vec<QualifyingPeriod>) -> Vec<QualifyingPeriod> {
    let mut merged: Vec<QualifyingPeriod> = Vec::with_capacity(periods.len());

    for period in periods {
        match merged.last_mut() {
            Some(prev) if prev.end_time == period.start_time => {
                prev.end_time = period.end_time;
                prev.temperature = prev.temperature.max(period.temperature);
                prev.precipitation_probability = prev
                    .precipitation_probability
                    .max(period.precipitation_probability);
                prev.max_wind_speed = prev.max_wind_speed.max(period.max_wind_speed);
            }
            _ => merged.push(period),
        }
    }

    merged
}
