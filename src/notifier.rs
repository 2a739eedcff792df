//! Push notification delivery through Pushover

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::{Credentials, NotificationConfig};
use crate::{BikeWeatherError, Result};

/// Delivers a text message to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}

#[derive(Serialize)]
struct PushoverMessage<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
}

/// Pushover messages API client
pub struct PushoverClient {
    client: Client,
    url: String,
    credentials: Credentials,
}

impl PushoverClient {
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client,
            url: url.into(),
            credentials,
        }
    }

    #[must_use]
    pub fn from_config(client: Client, config: &NotificationConfig, credentials: Credentials) -> Self {
        Self::new(client, config.url.clone(), credentials)
    }
}

#[async_trait]
impl Notifier for PushoverClient {
    #[instrument(skip(self, message), fields(url = %self.url))]
    async fn send(&self, message: &str) -> Result<()> {
        let body = PushoverMessage {
            token: &self.credentials.token,
            user: &self.credentials.user,
            message,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BikeWeatherError::notification(format!("request failed: {e}")))?;

        let status = response.status();
        // Error bodies are usually JSON but not guaranteed to be
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Pushover rejected the message with {}", status);
            return Err(BikeWeatherError::notification(format!(
                "Pushover returned {status}: {text}"
            )));
        }

        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(reply) => info!("Notification sent: {}", reply),
            Err(_) => info!("Notification sent"),
        }
        Ok(())
    }
}
