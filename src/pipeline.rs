//! One check: fetch the forecast, pick bike windows, notify.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::BikeWeatherConfig;
use crate::forecast::ForecastSource;
use crate::message::{NO_TIMES_FOUND, format_message, format_period_line};
use crate::notifier::Notifier;
use crate::selector::{merge_adjacent, select_bike_periods};
use crate::Result;

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing qualified, no notification was sent
    NoWindows,
    /// A notification listing `windows` bike windows was sent
    Notified { windows: usize },
}

/// Run the whole check once.
///
/// Any fetch or delivery failure ends the run; nothing is retried.
pub async fn run(
    config: &BikeWeatherConfig,
    source: &dyn ForecastSource,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<RunOutcome> {
    let periods = source.fetch_periods().await?;

    let mut windows = select_bike_periods(&periods, now, &config.thresholds);
    info!(
        "{} of {} forecast periods are good bike weather",
        windows.len(),
        periods.len()
    );

    if config.notification.merge_adjacent {
        windows = merge_adjacent(windows);
    }

    if windows.is_empty() {
        println!("{NO_TIMES_FOUND}");
        return Ok(RunOutcome::NoWindows);
    }

    for window in &windows {
        println!("{}", format_period_line(window));
    }

    let message = format_message(&windows);
    notifier.send(&message).await?;

    Ok(RunOutcome::Notified {
        windows: windows.len(),
    })
}
