//! HTTP implementation of [`BreedGateway`] for TheDogAPI.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::gateway::BreedGateway;
use super::types::{Breed, BreedImage};

/// Header the API expects the key in.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the remote breed API.
pub struct DogApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl DogApiClient {
    /// Build a client from config. Timeouts come from the config as well.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` joined with `segments`, each percent-encoded as a single
    /// path segment.
    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidUrl {
            url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `url` and decode the body, mapping 404 to `NotFound { resource }`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T, ApiError> {
        let url_text = url.to_string();
        let mut builder = self.client.get(url);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        tracing::debug!(url = %url_text, "Sending API request");

        let start = Instant::now();
        let response = builder.send().await.map_err(|e| ApiError::Connection {
            url: url_text.clone(),
            source: e,
        })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url_text, latency_ms, "API resource not found");
            return Err(ApiError::NotFound {
                resource: resource.to_string(),
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!(
                url = %url_text,
                status = %status,
                latency_ms,
                "API returned error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(url = %url_text, status = %status, latency_ms, "API response received");

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url_text,
            source: e,
        })
    }
}

#[async_trait]
impl BreedGateway for DogApiClient {
    async fn fetch_breeds(&self, page: u32, limit: u32) -> Result<Vec<Breed>, ApiError> {
        let url = self.url(
            &["breeds"],
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )?;
        self.get_json(url, "Breed page").await
    }

    async fn search_breeds(&self, query: &str, limit: usize) -> Result<Vec<Breed>, ApiError> {
        let url = self.url(&["breeds", "search"], &[("q", query.to_string())])?;
        let mut breeds: Vec<Breed> = self.get_json(url, "Breed search").await?;
        breeds.truncate(limit);
        Ok(breeds)
    }

    async fn fetch_breed(&self, id: u32) -> Result<Breed, ApiError> {
        let resource = format!("Breed {}", id);
        let id_segment = id.to_string();
        let url = self.url(&["breeds", id_segment.as_str()], &[])?;
        let url_text = url.to_string();
        let value: Value = self.get_json(url, &resource).await?;

        // Unknown ids come back as `200 {}` rather than a 404.
        if value.as_object().is_some_and(|obj| obj.is_empty()) {
            return Err(ApiError::NotFound { resource });
        }

        serde_json::from_value(value).map_err(|e| ApiError::InvalidPayload {
            url: url_text,
            source: e,
        })
    }

    async fn fetch_image(&self, image_id: &str) -> Result<BreedImage, ApiError> {
        let url = self.url(&["images", image_id], &[])?;
        self.get_json(url, &format!("Image {}", image_id)).await
    }
}
