use std::time::Duration;

use openclaw_core::{keys_to_camel, keys_to_snake};
use reqwest::{Method, StatusCode, header};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Request wrapper for the OpenClaw REST API.
///
/// Holds the base URL and a pooled `reqwest::Client`; safe to share across
/// tasks via `Arc`. Request bodies are converted camelCase→snake_case on the
/// way out, response bodies snake_case→camelCase on the way in, so callers
/// only ever see the application format.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    /// Returns the configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request.
    ///
    /// Params with empty-string values are omitted from the query string;
    /// the rest are URL-encoded and appended.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>, ApiError> {
        self.send(Method::GET, path, params, None).await
    }

    /// Issue a POST request, optionally with a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Option<Value>, ApiError> {
        self.send(Method::POST, path, &[], body).await
    }

    /// Issue a PUT request with a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put(&self, path: &str, body: &Value) -> Result<Option<Value>, ApiError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Issue a PATCH request with a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Option<Value>, ApiError> {
        self.send(Method::PATCH, path, &[], Some(body)).await
    }

    /// Issue a DELETE request. A 204 response resolves with no value.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, &[], None).await.map(|_| ())
    }

    /// Issue a DELETE request carrying a JSON body.
    ///
    /// A few endpoints (swarm agent removal) take their payload on DELETE;
    /// the body goes through the same case conversion as POST/PUT/PATCH.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete_with_body(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<Option<Value>, ApiError> {
        self.send(Method::DELETE, path, &[], Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        let query: Vec<(&str, &str)> =
            params.iter().filter(|(_, value)| !value.is_empty()).copied().collect();
        if !query.is_empty() {
            request = request.query(&query);
        }

        if let Some(body) = body {
            request = request.json(&keys_to_snake(body.clone()));
        }

        tracing::debug!(%method, %url, "issuing API request");
        let response = request.send().await?;
        Self::handle_response(path, response).await
    }

    async fn handle_response(
        path: &str,
        response: reqwest::Response,
    ) -> Result<Option<Value>, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let code = status.as_u16();
            let detail = match response.json::<Value>().await {
                Ok(body) => body
                    .get("detail")
                    .and_then(Value::as_str)
                    .filter(|detail| !detail.is_empty())
                    .map_or_else(|| format!("HTTP {code}"), str::to_owned),
                Err(_) => format!("HTTP {code}"),
            };
            tracing::warn!(status = code, path, detail = %detail, "API request failed");
            return Err(ApiError::Status { status: code, detail });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|source| ApiError::MalformedResponse { status: status.as_u16(), source })?;
        Ok(Some(keys_to_camel(parsed)))
    }
}
