//! HTTP adapter for the activities API
//!
//! Desktop builds use `reqwest` against a configured base URL. Web builds
//! use `gloo-net` with paths relative to the page origin, so the base URL
//! is normally empty there.
//!
//! Every response body is parsed as JSON before the status is looked at;
//! a body that is not JSON is a `ParseError` whatever the status.

use mergington_domain::ErrorBody;
use serde_json::Value;

use crate::ports::outbound::ApiError;

/// Connection settings for [`ApiAdapter`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// Prepended to every request path; no trailing slash
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>, request_timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a status code and raw body into the port's result
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

    if (200..300).contains(&status) {
        return Ok(value);
    }

    let detail = serde_json::from_value::<ErrorBody>(value)
        .ok()
        .and_then(ErrorBody::into_detail);
    Err(ApiError::Http { status, detail })
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::time::Duration;

    use reqwest::{Client, Method};
    use serde_json::Value;

    use super::{interpret_response, HttpConfig};
    use crate::ports::outbound::{ApiError, RawApiPort};

    #[derive(Clone)]
    pub struct ApiAdapter {
        client: Client,
        config: HttpConfig,
    }

    impl ApiAdapter {
        pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
            let client = Client::builder()
                .timeout(Duration::from_millis(config.request_timeout_ms))
                .build()
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            Ok(Self { client, config })
        }

        async fn send(&self, method: Method, path: &str) -> Result<Value, ApiError> {
            let url = self.config.url(path);
            tracing::debug!(%method, %url, "Sending request");

            let response = self
                .client
                .request(method, &url)
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            interpret_response(status, &body)
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Method::GET, path).await
        }

        async fn post_empty_with_response_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Method::POST, path).await
        }

        async fn delete_with_response_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Method::DELETE, path).await
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use gloo_net::http::{Request, RequestBuilder};
    use serde_json::Value;

    use super::{interpret_response, HttpConfig};
    use crate::ports::outbound::{ApiError, RawApiPort};

    /// The browser applies its own network timeout; `request_timeout_ms`
    /// is not enforced here.
    #[derive(Clone)]
    pub struct ApiAdapter {
        config: HttpConfig,
    }

    impl ApiAdapter {
        pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
            Ok(Self { config })
        }

        async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

            interpret_response(status, &body)
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for ApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Request::get(&self.config.url(path))).await
        }

        async fn post_empty_with_response_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Request::post(&self.config.url(path))).await
        }

        async fn delete_with_response_json(&self, path: &str) -> Result<Value, ApiError> {
            self.send(Request::delete(&self.config.url(path))).await
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::RawApiPort;
    use serde_json::json;

    #[test]
    fn test_success_returns_body() {
        let value = interpret_response(200, r#"{"message": "Signed up"}"#).unwrap();
        assert_eq!(value, json!({"message": "Signed up"}));
    }

    #[test]
    fn test_rejection_carries_detail() {
        let err = interpret_response(400, r#"{"detail": "Already registered"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                detail: Some("Already registered".to_string()),
            }
        );
    }

    #[test]
    fn test_rejection_without_detail() {
        let err = interpret_response(500, r#"{"error": "boom"}"#).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500, detail: None });
    }

    #[test]
    fn test_non_json_body_is_parse_error_even_on_success() {
        assert!(matches!(
            interpret_response(200, "<html>oops</html>"),
            Err(ApiError::ParseError(_))
        ));
        assert!(matches!(
            interpret_response(502, "Bad Gateway"),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = HttpConfig::new("http://127.0.0.1:8000/", 30_000);
        assert_eq!(config.url("/activities"), "http://127.0.0.1:8000/activities");
    }

    #[test]
    fn test_empty_base_keeps_relative_paths() {
        let config = HttpConfig::new("", 30_000);
        assert_eq!(config.url("/activities"), "/activities");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_unreachable_server_is_request_failure() {
        // Bind and release a port so nothing is listening on it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .unwrap()
            .port();
        let adapter =
            ApiAdapter::new(HttpConfig::new(format!("http://127.0.0.1:{port}"), 2_000)).unwrap();

        let result = adapter.get_json("/activities").await;

        assert!(matches!(result, Err(ApiError::RequestFailed(_))));
    }
}
