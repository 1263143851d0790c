//! Error Types
//!
//! Failures crossing the network boundary.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Build a network error from a JS exception value
    pub fn network(value: &wasm_bindgen::JsValue) -> Self {
        ApiError::Network(format!("{:?}", value))
    }
}
