// ABOUTME: HTTP client for the track statistics API
// ABOUTME: Implements the discipline and bestlist source traits over reqwest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Statistics API Client
//!
//! Client for the two endpoints of the track statistics backend:
//! `GET /disciplines/` and `GET /bestlist/`. Both take their parameters as
//! a query string; the serde representation of [`DisciplineQuery`] and
//! [`BestlistQuery`] already matches the wire names, so the payload types
//! encode themselves.
//!
//! Connection pooling and timeouts come from [`ApiConfig`]; a non-success
//! status or an undecodable body is mapped to a fetch failure carrying the
//! endpoint name.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::errors::{EngineError, EngineResult};
use crate::external::{DisciplineSource, ResultsSource};
use crate::models::{
    BestlistQuery, BestlistResponse, DisciplineDescriptor, DisciplineQuery, DisciplinesResponse,
};

/// HTTP client for the track statistics API
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    config: ApiConfig,
    http_client: Client,
}

impl StatsApiClient {
    /// Create a client with pooled connections and the configured timeouts
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            config,
            http_client,
        }
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<Q, T>(&self, endpoint: &str, query: &Q) -> EngineResult<T>
    where
        Q: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{endpoint}/", self.config.base_url);
        debug!(%url, "requesting");
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| EngineError::fetch(endpoint, e.to_string()))?;

        check_status(endpoint, response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| EngineError::fetch(endpoint, format!("JSON parse error: {e}")))
    }
}

async fn check_status(endpoint: &str, response: Response) -> EngineResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(EngineError::fetch(
        endpoint,
        format!("HTTP {status}: {body}"),
    ))
}

#[async_trait]
impl DisciplineSource for StatsApiClient {
    async fn fetch_disciplines(
        &self,
        query: &DisciplineQuery,
    ) -> EngineResult<Vec<DisciplineDescriptor>> {
        let response: DisciplinesResponse = self.get_json("disciplines", query).await?;
        Ok(response.disciplines)
    }
}

#[async_trait]
impl ResultsSource for StatsApiClient {
    async fn fetch_bestlist(&self, query: &BestlistQuery) -> EngineResult<BestlistResponse> {
        self.get_json("bestlist", query).await
    }
}
