// src/services/relay_client.rs
// DOCUMENTATION: Places port and its HTTP adapter
// PURPOSE: How the selector reaches the relay's two search routes

use crate::errors::SelectorError;
use crate::models::{NearbySearchResponse, PlaceDetailsResponse, Position, SearchCriteria};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Default relay location for a local setup
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";

/// Remote places lookups used by one attempt
#[allow(async_fn_in_trait)]
pub trait PlacesApi {
    async fn nearby_search(
        &self,
        position: &Position,
        criteria: &SearchCriteria,
    ) -> Result<NearbySearchResponse, SelectorError>;

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, SelectorError>;
}

/// Error envelope returned by the relay
#[derive(Debug, Default, Deserialize)]
struct RelayErrorEnvelope {
    error: Option<String>,
    details: Option<String>,
}

/// reqwest client for the relay
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    /// `timeout` bounds each relay call; a call that exceeds it fails the attempt
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /health on the relay
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Relay health check failed: {}", e);
                false
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, SelectorError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("Fetching {} with {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Relay request to {} failed: {}", url, e);
                SelectorError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let envelope: RelayErrorEnvelope = response.json().await.unwrap_or_default();
            let message = envelope
                .details
                .or(envelope.error)
                .unwrap_or_else(|| format!("Relay responded with status {}", status.as_u16()));
            log::error!("Relay error {} from {}: {}", status, url, message);
            return Err(SelectorError::Upstream(message));
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Unreadable relay response from {}: {}", url, e);
            SelectorError::Upstream(format!("Parse error: {}", e))
        })
    }
}

impl PlacesApi for RelayClient {
    async fn nearby_search(
        &self,
        position: &Position,
        criteria: &SearchCriteria,
    ) -> Result<NearbySearchResponse, SelectorError> {
        let params = [
            ("location", position.to_query()),
            ("radius", criteria.radius.to_string()),
            ("type", criteria.category.to_string()),
            ("keyword", criteria.keyword.clone()),
        ];

        self.get_json("/api/places/nearby", &params).await
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[&str],
    ) -> Result<PlaceDetailsResponse, SelectorError> {
        let params = [
            ("place_id", place_id.to_string()),
            ("fields", fields.join(",")),
        ];

        self.get_json("/api/places/details", &params).await
    }
}
