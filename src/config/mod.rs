//! Configuration types for the JewelShop API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with a JewelShop backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all SDK settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`BaseUrl`]: A validated backend base URL newtype
//! - [`AccessToken`]: A bearer token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use jewelshop_api::{StoreConfig, BaseUrl};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
//!     .user_agent_prefix("MyStorefront/1.0")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the JewelShop API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// backend base URL and optional HTTP client settings.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use jewelshop_api::{StoreConfig, BaseUrl};
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8000");
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// The only required field is `base_url`; all other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use jewelshop_api::{StoreConfig, BaseUrl};
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
///     .user_agent_prefix("MyApp/2.1")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StoreConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = StoreConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap();

        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("https://shop.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.base_url().as_ref(), "https://shop.example.com");
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("StoreConfig"));
    }
}
