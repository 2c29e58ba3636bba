//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters implement `RawApiPort` and are stored behind `Arc<dyn ...>`.
//! Every method resolves to the parsed JSON body on a 2xx response. Non-2xx
//! responses become `ApiError::Http` carrying the server's `detail`.
//! The application layer provides a typed wrapper on top (`Api`).

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_empty_with_response_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn delete_with_response_json(&self, path: &str) -> Result<Value, ApiError>;
}
