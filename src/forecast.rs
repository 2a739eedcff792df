//! Forecast retrieval from the weather.gov hourly forecast endpoint

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::config::ForecastConfig;
use crate::models::{ForecastPeriod, ForecastResponse};
use crate::{BikeWeatherError, Result};

/// Source of raw hourly forecast periods
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the forecast periods in the order the source provides them.
    ///
    /// Either every period is returned or an error; never partial data.
    async fn fetch_periods(&self) -> Result<Vec<ForecastPeriod>>;
}

/// Build the HTTP client shared by the forecast and notification clients
pub fn build_http_client(config: &ForecastConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Client for the National Weather Service gridpoint hourly forecast
pub struct NwsForecastClient {
    client: Client,
    url: String,
}

impl NwsForecastClient {
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Ok(Self::new(build_http_client(config)?, config.url.clone()))
    }
}

#[async_trait]
impl ForecastSource for NwsForecastClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_periods(&self) -> Result<Vec<ForecastPeriod>> {
        let start_time = Instant::now();
        debug!("Requesting hourly forecast");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|e| BikeWeatherError::forecast(format!("request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() > 299 {
            let body = response.text().await.unwrap_or_default();
            return Err(BikeWeatherError::forecast(format!(
                "forecast request returned {status}: {body}"
            )));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| BikeWeatherError::forecast(format!("invalid forecast response: {e}")))?;

        let periods = forecast.properties.periods;
        info!(
            "Fetched {} forecast periods in {:?}",
            periods.len(),
            start_time.elapsed()
        );
        Ok(periods)
    }
}
