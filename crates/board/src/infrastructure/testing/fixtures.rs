//! Simple test fixtures used across unit tests.

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn http_rejection(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Http {
        status,
        detail: detail.map(str::to_string),
    }
}
