//! HTTP client for the homework-status endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

use crate::core::{PollError, Result};

/// Production endpoint; tests and deployments can override it via config.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework-status API: authenticated GET with a `from_date`
/// query parameter.
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StatusClient {
    /// Creates a client for `endpoint`, authenticating with the OAuth `token`.
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            token,
        }
    }

    /// Fetches homework statuses changed since `since` (epoch seconds).
    ///
    /// Network-layer failures map to [`PollError::Unreachable`], a non-200
    /// answer to [`PollError::UnexpectedStatus`], a body that is not JSON to
    /// [`PollError::Json`].
    pub async fn fetch(&self, since: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %self.endpoint, "Endpoint unreachable");
                PollError::Unreachable {
                    url: self.endpoint.clone(),
                    source: e,
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(url = %self.endpoint, status = %status, "Unexpected status code from endpoint");
            return Err(PollError::UnexpectedStatus {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response.text().await.map_err(|e| PollError::Unreachable {
            url: self.endpoint.clone(),
            source: e,
        })?;
        debug!(bytes = body.len(), "Endpoint answered");
        serde_json::from_str(&body).map_err(PollError::Json)
    }
}
