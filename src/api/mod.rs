//! Typed operations over the JewelShop API.
//!
//! Every function in this module tree is a thin parameterization of the
//! request gateway ([`crate::clients::HttpClient`]) with a fixed path and
//! method, plus serde models for the backend's request and response
//! shapes. One submodule per backend resource:
//!
//! - [`auth`]: login, registration, current-user profile
//! - [`products`]: catalog listing (with filters), single product, categories
//! - [`cart`]: cart read and item add/update/remove/clear
//! - [`orders`]: order history and checkout
//! - [`designs`]: AI-assisted design generation and listing
//!
//! All operations except [`auth::login`] carry the session bearer token
//! automatically.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jewelshop_api::{api, BaseUrl, SessionStore, StoreConfig};
//! use jewelshop_api::clients::HttpClient;
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config, Arc::new(SessionStore::new()));
//!
//! let credentials = api::auth::Credentials::new("layla", "secret");
//! api::auth::login(&client, &credentials).await?;
//!
//! let cart = api::cart::add(&client, 42, 1).await?;
//! println!("cart total: {}", cart.total_amount);
//! ```

pub mod auth;
pub mod cart;
pub mod designs;
pub mod orders;
pub mod products;

use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpResponse};

/// Deserializes a successful response body into the operation's typed model.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, HttpError> {
    serde_json::from_value(response.body).map_err(HttpError::Json)
}
