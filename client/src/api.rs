//! Typed access to the three PokeAPI endpoints.
//!
//! No retries happen here; callers decide whether to try again.

use async_trait::async_trait;
use pokedex_wire::{DetailResponse, ListResponse, SpeciesResponse};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// The API surface the paging and repository layers depend on.
///
/// [`HttpApi`] is the real implementation; tests substitute their own.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// `GET /pokemon?limit=N&offset=M`
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListResponse, ApiError>;

    /// `GET /pokemon/{id}`
    async fn fetch_detail(&self, id: u32) -> Result<DetailResponse, ApiError>;

    /// `GET /pokemon-species/{id}`
    async fn fetch_species(&self, id: u32) -> Result<SpeciesResponse, ApiError>;
}

/// [`PokeApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    api_base: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(http, &config.api_base))
    }

    /// Use an already configured `reqwest` client
    pub fn with_client(http: reqwest::Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.api_base, limit, offset)
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.api_base, id)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.api_base, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(pokedex_wire::decode(&body)?)
    }
}

#[async_trait]
impl PokeApi for HttpApi {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListResponse, ApiError> {
        self.get_json(self.list_url(limit, offset)).await
    }

    async fn fetch_detail(&self, id: u32) -> Result<DetailResponse, ApiError> {
        self.get_json(self.detail_url(id)).await
    }

    async fn fetch_species(&self, id: u32) -> Result<SpeciesResponse, ApiError> {
        self.get_json(self.species_url(id)).await
    }
}
