//! HTTP client for the forecast service.
//!
//! One round trip per call, no retry and no caller-side cancellation; the
//! only timeout is the client-wide request timeout from configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use skycast_core::{ClientConfig, FetchError, Language};

use crate::types::{Forecast, HistoryEntry, HistoryResponse};

/// Client for the forecast service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: Url,
    http: Client,
}

impl WeatherClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid forecast service URL: {}", config.base_url))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { base_url, http })
    }

    /// Fetch the multi-day forecast for a city.
    ///
    /// The city travels as a path segment and is not validated locally; an
    /// empty or unknown city comes back as an error status from the service.
    pub async fn forecast(&self, city: &str, language: Language) -> Result<Forecast, FetchError> {
        tracing::debug!(city, lang = language.lang_code(), "Fetching forecast");

        let url = self
            .base_url
            .join(&format!("forecast/{city}"))
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = match self
            .http
            .get(url)
            .query(&[("lang", language.lang_code())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(city, error = %e, "Forecast request did not complete");
                return Err(FetchError::from(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(city, %status, "Forecast request rejected");
            return Err(FetchError::from_status(status));
        }

        let forecast: Forecast = response.json().await.map_err(|e| {
            tracing::error!(city, error = %e, "Forecast body could not be decoded");
            FetchError::from(e)
        })?;

        tracing::info!(
            city = %forecast.city,
            days = forecast.forecast.len(),
            from_cache = forecast.from_cache,
            "Forecast received"
        );
        Ok(forecast)
    }

    /// Fetch the most recent lookup records, newest first as the service
    /// returns them.
    pub async fn history(&self, limit: u32) -> Result<Vec<HistoryEntry>, FetchError> {
        tracing::debug!(limit, "Fetching lookup history");

        let url = self
            .base_url
            .join("weather_history")
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = match self
            .http
            .get(url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "History request did not complete");
                return Err(FetchError::from(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            // 404 here is not a missing city; keep the generic class.
            tracing::warn!(%status, "History request rejected");
            return Err(FetchError::Server(status.as_u16()));
        }

        let payload: HistoryResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "History body could not be decoded");
            FetchError::from(e)
        })?;

        tracing::info!(records = payload.history.len(), "History received");
        Ok(payload.history)
    }
}
