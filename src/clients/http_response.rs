//! HTTP response types for the JewelShop API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing parsed
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the JewelShop API.
///
/// Contains the response status code, headers, and the body parsed as JSON.
/// The backend's shape is trusted as-is; no schema validation happens here.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the backend's `detail` message, if the body carries one.
    ///
    /// The JewelShop backend reports failures as `{"detail": "..."}`; the
    /// same accessor works on any body that happens to include the field.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.body.get("detail").and_then(serde_json::Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        let response_400 = HttpResponse::new(400, HashMap::new(), json!({}));
        assert!(!response_400.is_ok());

        let response_404 = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response_404.is_ok());

        let response_500 = HttpResponse::new(500, HashMap::new(), json!({}));
        assert!(!response_500.is_ok());
    }

    #[test]
    fn test_detail_extraction() {
        let response =
            HttpResponse::new(404, HashMap::new(), json!({"detail": "Product not found"}));
        assert_eq!(response.detail(), Some("Product not found"));
    }

    #[test]
    fn test_detail_absent_for_plain_bodies() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"id": 1}));
        assert!(response.detail().is_none());

        // Non-string details are not surfaced through this accessor
        let response = HttpResponse::new(422, HashMap::new(), json!({"detail": [{"msg": "x"}]}));
        assert!(response.detail().is_none());
    }
}
