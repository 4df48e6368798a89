//! API client for communicating with the FitLink backend.
//!
//! Every operation is a single round trip returning an `ApiResult`
//! envelope; nothing here propagates an error or panics.

use anyhow::Result;
use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::models::{Exercise, LoginRequest, LoginResponse, RegisterRequest, User};

use super::{ApiError, ApiResult};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s fails fast enough for good UX while tolerating slow backends.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the FitLink backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    ///
    /// A missing base URL is not validated here: requests are still
    /// attempted against the bare path and fail naturally at the
    /// transport layer, surfacing in the result envelope.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single round trip with the uniform envelope contract:
    /// transport failures and malformed bodies become
    /// `{success: false, error}`, non-2xx statuses additionally carry
    /// the status code, and 2xx bodies are parsed into `T`.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, method = %method, "sending request");

        let mut request = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "request failed to complete");
                return ApiResult::transport_error(ApiError::Network(e).to_string());
            }
        };

        let status = response.status();
        let declared_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("json"))
            .unwrap_or(false);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, error = %e, "failed to read response body");
                return ApiResult::transport_error(ApiError::Network(e).to_string());
            }
        };

        if !status.is_success() {
            let error = ApiError::from_status(status, &text);
            debug!(%url, status = status.as_u16(), "request rejected");
            return ApiResult::http_error(status.as_u16(), error.to_string());
        }

        Self::parse_success(status, declared_json, text)
    }

    /// Parse a 2xx body. Content declared as JSON must parse as JSON;
    /// anything else is read as plain text and wrapped as a JSON string
    /// so `Value`-typed operations still see it.
    fn parse_success<T: DeserializeOwned>(
        status: StatusCode,
        declared_json: bool,
        text: String,
    ) -> ApiResult<T> {
        let parsed = if declared_json {
            serde_json::from_str::<serde_json::Value>(&text)
                .map_err(|e| ApiError::InvalidResponse(format!("malformed JSON body: {e}")))
        } else {
            Ok(serde_json::Value::String(text))
        };

        match parsed.and_then(|value| {
            serde_json::from_value::<T>(value)
                .map_err(|e| ApiError::InvalidResponse(format!("unexpected body shape: {e}")))
        }) {
            Ok(data) => ApiResult::ok(data, status.as_u16()),
            Err(error) => {
                warn!(status = status.as_u16(), %error, "unusable success response");
                ApiResult::transport_error(error.to_string())
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }

    // ===== Authentication =====

    /// Authenticate with email and password.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.request(Method::POST, "/api/auth/login", Some(credentials))
            .await
    }

    /// Create an account. Registration does not log the user in.
    pub async fn register(&self, user: &RegisterRequest) -> ApiResult<User> {
        self.request(Method::POST, "/api/register", Some(user)).await
    }

    // ===== Users =====

    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get("/api/allUsers").await
    }

    /// Backend liveness probe.
    pub async fn health_check(&self) -> ApiResult<serde_json::Value> {
        self.get("/health/db").await
    }

    // ===== Exercises =====
    // The backend spells the resource "exercice".

    pub async fn list_exercises(&self) -> ApiResult<Vec<Exercise>> {
        self.get("/api/exercice/all").await
    }

    pub async fn get_exercise(&self, id: &str) -> ApiResult<Exercise> {
        self.get(&format!("/api/exercice/get/{}", id)).await
    }

    pub async fn create_exercise(&self, exercise: &Exercise) -> ApiResult<Exercise> {
        self.request(Method::POST, "/api/exercice/create", Some(exercise))
            .await
    }

    pub async fn update_exercise(&self, exercise: &Exercise) -> ApiResult<Exercise> {
        self.request(Method::PUT, "/api/exercice/update", Some(exercise))
            .await
    }

    pub async fn delete_exercise(&self, id: &str) -> ApiResult<serde_json::Value> {
        self.delete(&format!("/api/exercice/delete/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_json_body() {
        let result: ApiResult<Vec<i32>> =
            ApiClient::parse_success(StatusCode::OK, true, "[1, 2, 3]".to_string());
        assert!(result.success);
        assert_eq!(result.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_success_malformed_json_is_transport_failure() {
        let result: ApiResult<Vec<i32>> =
            ApiClient::parse_success(StatusCode::OK, true, "{not json".to_string());
        assert!(!result.success);
        assert!(result.status_code.is_none());
        assert!(result.error_message().contains("malformed JSON body"));
    }

    #[test]
    fn test_parse_success_plain_text_wraps_as_string() {
        let result: ApiResult<serde_json::Value> =
            ApiClient::parse_success(StatusCode::OK, false, "deleted".to_string());
        assert!(result.success);
        assert_eq!(result.data, Some(serde_json::Value::String("deleted".into())));
    }

    #[test]
    fn test_parse_success_plain_text_fails_for_typed_endpoint() {
        let result: ApiResult<Vec<i32>> =
            ApiClient::parse_success(StatusCode::OK, false, "deleted".to_string());
        assert!(!result.success);
        assert!(result.error_message().contains("unexpected body shape"));
    }
}
