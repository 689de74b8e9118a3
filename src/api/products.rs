//! Product catalog operations: listing with filters, single product,
//! categories.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::api::products::{self, ProductFilter};
//!
//! // All gold rings between 500 and 2000 SAR
//! let filter = ProductFilter {
//!     material: Some("gold".to_string()),
//!     min_price: Some(500.0),
//!     max_price: Some(2000.0),
//!     ..Default::default()
//! };
//! let products = products::list(&client, &filter).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};

use super::decode;

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// The unique identifier of the image.
    pub id: i64,
    /// The product this image belongs to.
    pub product_id: i64,
    /// Server-relative path of the image file.
    pub image_path: String,
    /// Position of the image in the product's gallery.
    #[serde(default)]
    pub display_order: i64,
}

/// A product in the JewelShop catalog.
///
/// Prices are in Saudi Riyal; use [`crate::money::format_sar`] for
/// locale-correct display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    pub id: i64,
    /// The display name of the product.
    pub name: String,

    /// The metal the piece is made of (e.g., "gold", "silver").
    #[serde(default)]
    pub material: Option<String>,

    /// The purity grade (e.g., "18k", "21k", "24k").
    #[serde(default)]
    pub karat: Option<String>,

    /// Weight in grams.
    #[serde(default)]
    pub weight: Option<f64>,

    /// Price in Saudi Riyal.
    pub price: f64,

    /// Units currently in stock.
    #[serde(default)]
    pub stock_quantity: i64,

    #[serde(default)]
    pub description: Option<String>,

    /// Server-relative path of the primary image.
    #[serde(default)]
    pub image_path: Option<String>,

    /// The jeweler offering this product.
    pub jeweler_id: i64,

    /// The product's image gallery.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// A catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// The unique identifier of the category.
    pub id: i64,
    /// The display name of the category.
    pub name: String,
    /// The parent category, for nested categories.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Optional filters for [`list`].
///
/// Only the whitelisted fields below ever reach the query string, and each
/// is sent only when present and non-empty, so an all-default filter
/// produces a bare `GET /api/products/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    /// Restrict to products in the given category.
    pub category_id: Option<i64>,
    /// Substring match on the product material.
    pub material: Option<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<f64>,
    /// Maximum price, inclusive.
    pub max_price: Option<f64>,
    /// Exact match on the purity grade.
    pub karat: Option<String>,
}

impl ProductFilter {
    /// Serializes the set filters into query parameters.
    ///
    /// Unset fields and blank strings are skipped; nothing outside the
    /// whitelist is ever emitted.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();

        if let Some(category_id) = self.category_id {
            query.insert("category_id".to_string(), category_id.to_string());
        }
        if let Some(material) = self.material.as_deref().filter(|m| !m.trim().is_empty()) {
            query.insert("material".to_string(), material.to_string());
        }
        if let Some(min_price) = self.min_price {
            query.insert("min_price".to_string(), min_price.to_string());
        }
        if let Some(max_price) = self.max_price {
            query.insert("max_price".to_string(), max_price.to_string());
        }
        if let Some(karat) = self.karat.as_deref().filter(|k| !k.trim().is_empty()) {
            query.insert("karat".to_string(), karat.to_string());
        }

        query
    }
}

/// Lists catalog products, optionally filtered.
///
/// Sends `GET /api/products/` with only the set, non-empty filter fields
/// in the query string.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn list(client: &HttpClient, filter: &ProductFilter) -> Result<Vec<Product>, HttpError> {
    let query = filter.to_query();

    let mut builder = HttpRequest::builder(HttpMethod::Get, "/api/products/");
    if !query.is_empty() {
        builder = builder.query(query);
    }

    let response = client.request(builder.build()?).await?;
    decode(response)
}

/// Fetches a single product by id.
///
/// Sends `GET /api/products/{id}`.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 404 when the product does
/// not exist.
pub async fn find(client: &HttpClient, product_id: i64) -> Result<Product, HttpError> {
    let request =
        HttpRequest::builder(HttpMethod::Get, format!("/api/products/{product_id}")).build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Lists all catalog categories.
///
/// Sends `GET /api/products/categories/`.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn categories(client: &HttpClient) -> Result<Vec<Category>, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/api/products/categories/").build()?;

    let response = client.request(request).await?;
    decode(response)
}
