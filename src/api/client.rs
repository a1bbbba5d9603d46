//! HTTP client for the marketplace REST backend.
//!
//! Wraps `reqwest` with:
//! - bearer authentication from the session token
//! - a fresh `x-request-id` per call
//! - uniform mapping of error statuses into `ClientError`
//! - tolerant decoding of bare or `{ "data": ... }` bodies

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::envelope::Envelope;
use crate::config::Settings;
use crate::error::{ClientError, ClientResult, ErrorBody};

/// Header name for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the marketplace backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client from settings.
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api_timeout_seconds))
            .build()?;

        Self::with_http_client(client, settings)
    }

    /// Create a client around an existing `reqwest::Client`, sharing its
    /// connection pool.
    pub fn with_http_client(client: Client, settings: &Settings) -> ClientResult<Self> {
        let base_url = Url::parse(&settings.api_base_url)
            .map_err(|e| ClientError::BadRequest(format!("Invalid API base URL: {}", e)))?;

        tracing::info!(base_url = %settings.api_base_url, "API client initialized");

        Ok(Self {
            client,
            base_url,
            token: settings.api_token.clone(),
        })
    }

    /// Same client, authenticated with another token.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build an absolute URL from path segments. Segments are percent-encoded.
    pub fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BadRequest("API base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request_id = Uuid::new_v4().to_string();
        debug!(method = %method, url = %url, request_id = %request_id, "API request");

        let req = self
            .client
            .request(method, url)
            .header(X_REQUEST_ID, request_id)
            .header(reqwest::header::ACCEPT, "application/json");

        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and map non-success statuses to errors.
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await.map_err(|e| {
            warn!(error = %e, "API request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.ok();
        if let Some(rid) = body.as_ref().and_then(|b| b.request_id.as_deref()) {
            warn!(status = %status, request_id = %rid, "API error response");
        } else {
            warn!(status = %status, "API error response");
        }

        Err(ClientError::from_status(status, body))
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> ClientResult<R> {
        let bytes = response.bytes().await?;
        serde_json::from_slice::<Envelope<R>>(&bytes)
            .map(Envelope::into_inner)
            .map_err(|e| {
                warn!(error = %e, "Failed to parse API response");
                ClientError::Decode(e.to_string())
            })
    }

    /// GET a JSON resource.
    pub async fn get<R: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<R> {
        let url = self.url(segments)?;
        let response = self.execute(self.request(Method::GET, url)).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> ClientResult<R> {
        let url = self.url(segments)?;
        let response = self
            .execute(self.request(Method::POST, url).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST for side effects only. Any response body is discarded.
    pub async fn post_unit<T: Serialize>(&self, segments: &[&str], body: &T) -> ClientResult<()> {
        let url = self.url(segments)?;
        self.execute(self.request(Method::POST, url).json(body))
            .await?;
        Ok(())
    }

    /// Check backend health.
    pub async fn health_check(&self) -> ClientResult<()> {
        let url = self.url(&["health"])?;
        self.execute(self.request(Method::GET, url).timeout(Duration::from_secs(5)))
            .await?;
        Ok(())
    }
}
