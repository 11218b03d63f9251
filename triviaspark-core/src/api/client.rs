//! HTTP client for the TriviaSpark events API

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::DashboardInsights;

use super::dto::{EventDto, EventSnapshot};

/// HTTP client for the TriviaSpark backend
pub struct EventsClient {
    config: ApiConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    /// Create a new events client from configuration
    ///
    /// Returns an error if the configuration is invalid or missing required fields.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| Error::Config("api.base_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Organizer endpoints authenticate with a session cookie
        if let Some(cookie) = &config.session_cookie {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(cookie)
                    .map_err(|e| Error::Config(format!("invalid session_cookie: {}", e)))?,
            );
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            base_url,
        })
    }

    /// Fetch the organizer's full event collection.
    ///
    /// Records with unparseable dates are dropped from the snapshot and
    /// reported in its `warnings`.
    pub async fn list_events(&self) -> Result<EventSnapshot> {
        let dtos: Vec<EventDto> = self.get_json_with_retry("/api/events").await?;
        Ok(EventSnapshot::from_dtos(dtos))
    }

    /// Fetch only the currently active events.
    pub async fn active_events(&self) -> Result<EventSnapshot> {
        let dtos: Vec<EventDto> = self.get_json_with_retry("/api/events/active").await?;
        Ok(EventSnapshot::from_dtos(dtos))
    }

    /// Fetch backend-computed dashboard figures.
    pub async fn dashboard_insights(&self) -> Result<DashboardInsights> {
        self.get_json_with_retry("/api/dashboard/insights").await
    }

    /// Check if the client can reach the backend
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/health", self.base_url);

        match self.http_client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// GET a JSON resource once.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Api(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| Error::Api(format!("failed to parse response: {}", e)))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            Err(Error::Api(format!("API error ({}): {}", status, error_text)))
        }
    }

    /// GET a JSON resource with retry logic
    ///
    /// Retries transient failures (5xx, timeouts) with exponential backoff.
    async fn get_json_with_retry<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut last_error = None;
        let mut delay = Duration::from_millis(500);

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "Retrying GET {} (attempt {}/{}), waiting {:?}",
                    path,
                    attempt + 1,
                    self.config.max_retries + 1,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_secs(30));
            }

            match self.get_json(path).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if is_retryable_error(&e) {
                        tracing::warn!("Transient error fetching {}: {}", path, e);
                        last_error = Some(e);
                        continue;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Api("max retries exceeded".to_string())))
    }
}

/// Check if an error is retryable (transient)
fn is_retryable_error(error: &Error) -> bool {
    match error {
        Error::Api(msg) => {
            // Retry on 5xx errors
            msg.contains("50") && (msg.contains("API error") || msg.contains("HTTP"))
                // Retry on network/timeout errors
                || msg.contains("timeout")
                || msg.contains("connection")
                || msg.contains("request failed")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_valid_config() {
        let config = ApiConfig::default();
        assert!(EventsClient::new(config).is_err());
    }

    #[test]
    fn test_client_with_valid_config() {
        let config = ApiConfig {
            base_url: Some("https://triviaspark.example.com/".to_string()),
            session_cookie: Some("connect.sid=s%3Aabc123".to_string()),
            ..Default::default()
        };
        let client = EventsClient::new(config).unwrap();
        assert_eq!(client.base_url, "https://triviaspark.example.com");
    }

    #[test]
    fn test_is_retryable_error() {
        assert!(is_retryable_error(&Error::Api(
            "API error (500): internal error".to_string()
        )));
        assert!(is_retryable_error(&Error::Api(
            "HTTP request failed: timeout".to_string()
        )));
        assert!(!is_retryable_error(&Error::Api(
            "API error (401): unauthorized".to_string()
        )));
        assert!(!is_retryable_error(&Error::Api(
            "API error (404): not found".to_string()
        )));
    }
}
