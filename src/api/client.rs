//! Blocking HTTP client for the compute API
//!
//! Each invocation authenticates once; the bearer token lives only inside
//! the client for the lifetime of the process.

use crate::config::ApiConfig;
use crate::error::CollectionsError;
use anyhow::{Context as _, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Login request payload
#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Expected response from the authenticate endpoint
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// Status and body of a collections-endpoint exchange
///
/// The protocol decisions (report, fall back, give up) belong to the
/// operations layer, so non-200 statuses are data here, not errors.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Whether the endpoint reported success
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// The `err` field of the JSON error body, or the raw body when the
    /// response has some other shape
    #[must_use]
    pub fn err_message(&self) -> String {
        serde_json::from_str::<Value>(&self.body)
            .ok()
            .and_then(|value| value.get("err").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| self.body.clone())
    }
}

/// Client for the compute API
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the runtime configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .danger_accept_invalid_certs(config.skip_verify)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: None,
        })
    }

    /// Exchange username and password for a bearer token and keep it for
    /// subsequent calls
    ///
    /// # Errors
    ///
    /// Returns [`CollectionsError::Auth`] carrying the response body when
    /// the endpoint answers with a non-200 status; transport failures
    /// surface as [`CollectionsError::Transport`]. Neither is retried.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/api/v1/authenticate", self.endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { username, password })
            .send()
            .map_err(CollectionsError::from)?;

        if response.status() != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(CollectionsError::auth(body).into());
        }

        let auth: AuthResponse = response
            .json()
            .context("Failed to parse authenticate response")?;
        self.token = Some(auth.token);

        Ok(())
    }

    /// POST a new collection record
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when called before
    /// [`ApiClient::authenticate`].
    pub fn create_collection(&self, record: &Value) -> Result<ApiResponse> {
        let url = format!("{}/api/v1/collections", self.endpoint);
        debug!("POST {}", url);
        self.exchange(self.authorized(self.client.post(&url))?.json(record))
    }

    /// PUT a collection record over an existing name (idempotent
    /// replace-by-name)
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when called before
    /// [`ApiClient::authenticate`].
    pub fn update_collection(&self, name: &str, record: &Value) -> Result<ApiResponse> {
        let url = format!("{}/api/v1/collections/{}", self.endpoint, name);
        debug!("PUT {}", url);
        self.exchange(self.authorized(self.client.put(&url))?.json(record))
    }

    /// DELETE a collection by name
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when called before
    /// [`ApiClient::authenticate`].
    pub fn delete_collection(&self, name: &str) -> Result<ApiResponse> {
        let url = format!("{}/api/v1/collections/{}", self.endpoint, name);
        debug!("DELETE {}", url);
        self.exchange(self.authorized(self.client.delete(&url))?)
    }

    /// Attach the bearer token and the Accept header
    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| CollectionsError::auth("no bearer token held, authenticate first"))?;

        Ok(builder
            .bearer_auth(token)
            .header(ACCEPT, "application/json"))
    }

    /// Send a request and capture status plus body
    fn exchange(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().map_err(CollectionsError::from)?;
        let status = response.status();
        let body = response.text().unwrap_or_default();
        debug!("{} {}", status, body);

        Ok(ApiResponse { status, body })
    }
}
