// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API forwarder
// PURPOSE: Relay nearby-search and detail calls upstream with the server-held key

use crate::config::Config;
use crate::errors::RelayError;
use crate::models::{NearbySearchQuery, PlaceDetailsQuery};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const NEARBY_CONTEXT: &str = "Failed to fetch data from Google Places API";
const DETAILS_CONTEXT: &str = "Failed to fetch data from Google Places Details API";

/// Google Places API client
/// DOCUMENTATION: Stateless; one instance is shared by every relay worker
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key, appended to every forwarded call
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: `timeout` bounds each upstream call end to end
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.google_places_api_key.clone(),
            config.places_base_url.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// Forward a nearby search
    /// DOCUMENTATION: Caller values are passed through untouched; absent ones are omitted
    ///
    /// # Returns
    /// The upstream JSON body, whatever its `status` field says
    pub async fn nearby_search(&self, query: &NearbySearchQuery) -> Result<Value, RelayError> {
        log::info!(
            "Proxying request to Google Places API with params: location={:?}, radius={:?}, type={:?}, keyword={:?}",
            query.location,
            query.radius,
            query.place_type,
            query.keyword
        );

        let params = [
            ("location", query.location.as_deref()),
            ("radius", query.radius.as_deref()),
            ("type", query.place_type.as_deref()),
            ("keyword", query.keyword.as_deref()),
        ];

        let body = self.forward("nearbysearch/json", &params, NEARBY_CONTEXT).await?;
        log::info!("Google Places API response status: {}", upstream_status(&body));
        Ok(body)
    }

    /// Forward a place-details lookup
    pub async fn place_details(&self, query: &PlaceDetailsQuery) -> Result<Value, RelayError> {
        log::info!(
            "Proxying request to Google Places Details API for place_id: {:?}",
            query.place_id
        );

        let params = [
            ("place_id", query.place_id.as_deref()),
            ("fields", query.fields.as_deref()),
        ];

        let body = self.forward("details/json", &params, DETAILS_CONTEXT).await?;
        log::info!(
            "Google Places Details API response status: {}",
            upstream_status(&body)
        );
        Ok(body)
    }

    /// Issue one GET against `{base_url}/{path}` with the key appended
    async fn forward(
        &self,
        path: &str,
        params: &[(&str, Option<&str>)],
        context: &'static str,
    ) -> Result<Value, RelayError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(name, value)| value.map(|v| (*name, v)))
            .collect();
        query.push(("key", &self.api_key));

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                log::error!("Error proxying to {}: {}", url, e);
                RelayError::upstream(context, e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Error proxying to {}: upstream responded {}", url, status);
            return Err(RelayError::upstream(
                context,
                format!("Request failed with status code {}", status.as_u16()),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            log::error!("Failed to parse response from {}: {}", url, e);
            RelayError::upstream(context, format!("Parse error: {}", e))
        })
    }
}

fn upstream_status(body: &Value) -> &str {
    body.get("status").and_then(Value::as_str).unwrap_or("<missing>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GooglePlacesClient::new(
            "test_key".to_string(),
            "http://localhost:9999/api/place/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/api/place");
    }

    #[test]
    fn test_upstream_status() {
        assert_eq!(upstream_status(&json!({"status": "ZERO_RESULTS"})), "ZERO_RESULTS");
        assert_eq!(upstream_status(&json!({})), "<missing>");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_envelope_error() {
        let client = GooglePlacesClient::new(
            "test_key".to_string(),
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let query = NearbySearchQuery {
            location: Some("40,-74".to_string()),
            ..Default::default()
        };

        match client.nearby_search(&query).await {
            Err(RelayError::Upstream { context, details }) => {
                assert_eq!(context, NEARBY_CONTEXT);
                assert!(!details.is_empty());
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
