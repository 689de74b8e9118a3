//! HTTP client for JewelShop API communication.
//!
//! This module provides the [`HttpClient`] type, the single gateway all
//! backend calls are funneled through.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::SessionStore;
use crate::clients::errors::{ApiResponseError, HttpError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, StoreConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the JewelShop API.
///
/// The client handles:
/// - URL construction from the configured base URL and a server-relative path
/// - Default headers including User-Agent and Accept
/// - Bearer-token attachment, re-reading the session store on every call
/// - Header merging with caller-supplied headers winning on conflicts
/// - JSON response parsing and typed error mapping
///
/// The client deliberately does **not** retry, cache, de-duplicate or time
/// out requests; every failure is surfaced verbatim to the caller after
/// being logged.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The session store is shared behind an `Arc`, so a login performed through
/// one client is visible to every client holding the same store.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use jewelshop_api::{BaseUrl, HttpClient, SessionStore, StoreConfig};
/// use jewelshop_api::clients::{HttpMethod, HttpRequest};
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config, Arc::new(SessionStore::new()));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/products/")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The backend base URL (e.g., `http://localhost:8000`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// The session store consulted for the bearer token before each call.
    store: Arc<SessionStore>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and session
    /// store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use jewelshop_api::{BaseUrl, SessionStore, StoreConfig};
    /// use jewelshop_api::clients::HttpClient;
    ///
    /// let config = StoreConfig::builder()
    ///     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config, Arc::new(SessionStore::new()));
    /// ```
    #[must_use]
    pub fn new(config: &StoreConfig, store: Arc<SessionStore>) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}JewelShop API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            store,
        }
    }

    /// Returns the backend base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the session store consulted by this client.
    #[must_use]
    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    /// Sends an HTTP request to the JewelShop API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Bearer-token attachment (unless the request is anonymous)
    /// - Header merging (caller wins on conflicts)
    /// - JSON response parsing
    ///
    /// Every failure is logged through `tracing` before being returned.
    /// There is no retry, no caching, and no timeout beyond the transport's
    /// own; the call awaits until the transport resolves or rejects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - A success response body is not valid JSON (`Json`)
    /// - Non-2xx response received (`Response`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "/api/cart/")
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// println!("Cart: {}", response.body);
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify().map_err(|err| {
            tracing::error!(path = %request.path, "invalid JewelShop API request: {err}");
            err
        })?;

        // Build full URL
        let url = format!("{}{}", self.base_url.as_ref(), request.path);

        // Merge headers; the session token is re-read on every call, so a
        // login or logout between two requests is observed by the second.
        let mut headers = self.default_headers.clone();
        if !request.anonymous {
            if let Some(token) = self.store.access_token() {
                headers.insert(
                    "Authorization".to_string(),
                    format!("Bearer {}", token.as_ref()),
                );
            }
        }
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await.map_err(|err| {
            tracing::error!(path = %request.path, "network error calling JewelShop API: {err}");
            HttpError::Network(err)
        })?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON. An empty body parses as an empty object; a
        // non-JSON body on a success status is a decode failure, while on
        // an error status the raw text is preserved for the error body.
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                Err(err) if (200..=299).contains(&code) => {
                    tracing::error!(
                        path = %request.path,
                        status = code,
                        "JewelShop API returned a non-JSON success body: {err}"
                    );
                    return Err(HttpError::Json(err));
                }
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error = ApiResponseError::from_response(&response);
        tracing::error!(
            path = %request.path,
            status = error.status,
            "request to JewelShop API failed: {error}"
        );
        Err(HttpError::Response(error))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> HttpClient {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .build()
            .unwrap();
        HttpClient::new(&config, Arc::new(SessionStore::new()))
    }

    #[test]
    fn test_client_construction() {
        let client = create_test_client();
        assert_eq!(client.base_url().as_ref(), "http://localhost:8000");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("JewelShop API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config, Arc::new(SessionStore::new()));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("JewelShop API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_in_default_headers() {
        // The bearer token is attached per-request from the session store,
        // never baked into the default header set.
        let client = create_test_client();
        client.session_store().set_token("abc");

        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_session_store_is_shared() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .build()
            .unwrap();
        let store = Arc::new(SessionStore::new());
        let client_a = HttpClient::new(&config, Arc::clone(&store));
        let client_b = HttpClient::new(&config, Arc::clone(&store));

        client_a.session_store().set_token("shared-token");
        assert!(client_b.session_store().has_session());

        store.clear();
        assert!(!client_a.session_store().has_session());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
