//! # JewelShop API Rust SDK
//!
//! A Rust SDK for the JewelShop jewelry e-commerce API, providing type-safe
//! configuration, session handling, and an async HTTP client with typed
//! operations for the catalog, cart, orders and AI design endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - Validated newtypes for the backend base URL and bearer token
//! - An explicit, shareable [`SessionStore`] consulted before every request
//! - A single request gateway ([`HttpClient`]) all calls are funneled through
//! - Typed operations and models in [`api`] for every backend resource
//! - `ar-SA` price formatting via [`money::format_sar`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use jewelshop_api::{BaseUrl, HttpClient, SessionStore, StoreConfig};
//!
//! // Create configuration using the builder pattern
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // The session store is passed explicitly; share one Arc across clients
//! let store = Arc::new(SessionStore::new());
//! let client = HttpClient::new(&config, store);
//! ```
//!
//! ## Authentication
//!
//! Login posts credentials without a token and stores the returned bearer
//! token in the session store; every other operation attaches it
//! automatically:
//!
//! ```rust,ignore
//! use jewelshop_api::api::auth::{self, Credentials};
//!
//! auth::login(&client, &Credentials::new("layla", "secret")).await?;
//! assert!(client.session_store().has_session());
//!
//! let me = auth::current_user(&client).await?;
//! println!("Hello {}", me.username);
//!
//! // Logging out removes the token and cached user data and runs the
//! // registered logout hook exactly once.
//! client.session_store().clear();
//! ```
//!
//! ## Catalog, Cart and Orders
//!
//! ```rust,ignore
//! use jewelshop_api::api::{cart, orders, products};
//! use jewelshop_api::api::products::ProductFilter;
//!
//! let rings = products::list(&client, &ProductFilter {
//!     material: Some("gold".to_string()),
//!     karat: Some("21k".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! cart::add(&client, rings[0].id, 1).await?;
//! let order = orders::checkout(&client, &Default::default()).await?;
//! ```
//!
//! ## Error Handling
//!
//! Backend-reported failures surface as a typed error carrying the HTTP
//! status code plus whatever fields the backend's error payload included:
//!
//! ```rust,ignore
//! use jewelshop_api::HttpError;
//!
//! match products::find(&client, 999).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(HttpError::Response(e)) => {
//!         eprintln!("status {}: {}", e.status, e.detail.as_deref().unwrap_or("?"));
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the session lives in an explicitly passed store
//! - **Fail-fast validation**: config newtypes validate on construction
//! - **Typed failures**: errors are result values, never panics
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **No hidden policy**: no retries, caching, de-duplication or timeouts;
//!   every failure is logged and surfaced verbatim

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod money;

// Re-export public types at crate root for convenience
pub use auth::SessionStore;
pub use config::{AccessToken, BaseUrl, StoreConfig, StoreConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponseError, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError,
};
