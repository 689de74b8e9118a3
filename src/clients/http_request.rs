//! HTTP request types for the JewelShop API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the JewelShop API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the JewelShop API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
///
/// The JewelShop API speaks JSON exclusively; no other wire format is
/// supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent to the JewelShop API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use jewelshop_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/api/cart/add")
///     .body(json!({"product_id": 42, "quantity": 1}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The server-relative path for this request (e.g., `/api/cart/`).
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// When `true`, the client skips attaching the session bearer token.
    ///
    /// Used by login, which runs before any token exists.
    pub anonymous: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `path` - The server-relative path for the request
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `body` is `Some` but `body_type` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        Ok(())
    }
}

/// Normalizes a server-relative request path.
///
/// Ensures the path carries exactly one leading `/` so it can be appended
/// to the base URL directly.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("api/cart/"), "/api/cart/");
/// assert_eq!(normalize_path("/api/cart/"), "/api/cart/");
/// assert_eq!(normalize_path("//api/cart/"), "/api/cart/");
/// ```
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    anonymous: bool,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
            anonymous: false,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via
    /// [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Marks the request as anonymous, skipping the session bearer token.
    #[must_use]
    pub const fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    /// Builds the [`HttpRequest`], normalizing the path and validating it
    /// in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: normalize_path(&self.path),
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
            anonymous: self.anonymous,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/api/products/");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
        assert!(!request.anonymous);
    }

    #[test]
    fn test_builder_normalizes_missing_leading_slash() {
        let request = HttpRequest::builder(HttpMethod::Get, "api/products/")
            .build()
            .unwrap();
        assert_eq!(request.path, "/api/products/");
    }

    #[test]
    fn test_builder_normalizes_doubled_leading_slash() {
        let request = HttpRequest::builder(HttpMethod::Get, "//api/products/")
            .build()
            .unwrap();
        assert_eq!(request.path, "/api/products/");
    }

    #[test]
    fn test_builder_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { .. })
        ));

        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/cart/add")
            .body(json!({"product_id": 1, "quantity": 2}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(request.body.is_some());
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_put_without_body_is_valid() {
        // Cart quantity updates are a PUT with the quantity in the query
        // string and no body at all.
        let request = HttpRequest::builder(HttpMethod::Put, "/api/cart/update/7")
            .query_param("quantity", "3")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Put);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "/api/orders/checkout".to_string(),
            body: Some(json!({"shipping_address": "Riyadh"})),
            body_type: None,
            query: None,
            extra_headers: None,
            anonymous: false,
        };

        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
            .query_param("material", "gold")
            .query_param("karat", "21k")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("material"), Some(&"gold".to_string()));
        assert_eq!(query.get("karat"), Some(&"21k".to_string()));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_anonymous_flag() {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/auth/login")
            .body(json!({"username": "u", "password": "p"}))
            .body_type(DataType::Json)
            .anonymous()
            .build()
            .unwrap();

        assert!(request.anonymous);
    }
}
