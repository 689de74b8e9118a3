//! HTTP-specific error types for the JewelShop API SDK.
//!
//! This module contains error types for HTTP operations, covering
//! backend-reported failures, request validation failures, and transport
//! or decoding failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e.detail.as_deref().unwrap_or("?"));
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//!     Err(HttpError::Json(e)) => {
//!         println!("Body was not usable JSON: {}", e);
//!     }
//! }
//! ```

use crate::clients::http_response::HttpResponse;
use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the HTTP status code, the backend's `detail` message when the
/// body included one, and the full parsed error body so callers can
/// inspect any other backend-supplied field.
///
/// # Example
///
/// ```rust
/// use jewelshop_api::clients::ApiResponseError;
/// use serde_json::json;
///
/// let error = ApiResponseError {
///     status: 404,
///     detail: Some("Product not found".to_string()),
///     body: json!({"detail": "Product not found"}),
/// };
///
/// assert_eq!(error.status, 404);
/// assert_eq!(error.field("detail").and_then(|v| v.as_str()), Some("Product not found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("JewelShop API responded with status {status}: {}", .detail.as_deref().unwrap_or("no detail provided"))]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The backend's `detail` message, if the error body carried one.
    pub detail: Option<String>,
    /// The full parsed error body.
    pub body: serde_json::Value,
}

impl ApiResponseError {
    /// Builds an error from a parsed non-2xx response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            status: response.code,
            detail: response.detail().map(ToString::to_string),
            body: response.body.clone(),
        }
    }

    /// Returns a field of the backend's error body, if present.
    ///
    /// Useful for backend-specific payloads beyond `detail`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.body.get(name)
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks.
///
/// # Example
///
/// ```rust
/// use jewelshop_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBodyType;
/// println!("{}", error); // "Cannot set a body without also setting body_type."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty or otherwise unusable.
    #[error("Invalid request path '{path}'. A server-relative path like '/api/products/' is required.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// # Example
///
/// ```rust,ignore
/// use jewelshop_api::HttpError;
///
/// let result = client.request(request).await;
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* backend reported a failure */ }
///     Err(HttpError::InvalidRequest(e)) => { /* request never left the client */ }
///     Err(HttpError::Network(e)) => { /* transport failure */ }
///     Err(HttpError::Json(e)) => { /* body could not be decoded */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// A backend-reported failure (non-2xx status code).
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body could not be encoded to, or decoded from, JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
