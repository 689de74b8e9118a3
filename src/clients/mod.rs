//! HTTP client types for JewelShop API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the JewelShop API. It handles request/response
//! processing, bearer-token attachment, and typed error mapping.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client (the request gateway)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies (JSON only)
//! - [`HttpError`]: Unified error type for all HTTP operations
//!
//! The typed operations built on top of this layer live in [`crate::api`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jewelshop_api::{BaseUrl, SessionStore, StoreConfig};
//! use jewelshop_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config, Arc::new(SessionStore::new()));
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! The client never retries and never times out on its own; a request
//! awaits until the transport resolves or rejects. Non-2xx responses come
//! back as [`HttpError::Response`] carrying the status code and whatever
//! fields the backend's error payload included, after being logged through
//! `tracing`.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiResponseError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
