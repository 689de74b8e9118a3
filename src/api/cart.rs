//! Shopping cart operations.
//!
//! The backend keeps one cart per user and returns the full, re-totaled
//! cart from every mutation, so each function here resolves to the updated
//! [`Cart`]. Two concurrent mutations race independently against the
//! backend; the SDK does not serialize them.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::api::cart;
//!
//! let updated = cart::add(&client, 42, 2).await?;
//! println!("{} items, total {}", updated.items.len(), updated.total_amount);
//!
//! cart::clear(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};

use super::decode;

/// A line in the cart, enriched with display fields of its product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The unique identifier of the cart line.
    pub id: i64,
    /// The cart this line belongs to.
    pub cart_id: i64,
    /// The product in this line.
    pub product_id: i64,
    /// Number of units.
    pub quantity: u32,

    /// Display name of the product, when still available.
    #[serde(default)]
    pub product_name: Option<String>,

    /// Unit price of the product in Saudi Riyal.
    #[serde(default)]
    pub product_price: Option<f64>,

    /// Server-relative path of the product's primary image.
    #[serde(default)]
    pub product_image: Option<String>,
}

/// A user's shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// The unique identifier of the cart.
    pub id: i64,
    /// The owning user.
    pub user_id: i64,

    /// When the cart was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The cart lines.
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Sum of unit price times quantity over all lines, in Saudi Riyal.
    #[serde(default)]
    pub total_amount: f64,
}

#[derive(Debug, Serialize)]
struct AddItemBody {
    product_id: i64,
    quantity: u32,
}

/// Fetches the current user's cart.
///
/// Sends `GET /api/cart/`. The backend creates an empty cart on first
/// access, so this never 404s for an authenticated user.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn fetch(client: &HttpClient) -> Result<Cart, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/api/cart/").build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Adds a product to the cart.
///
/// Sends `POST /api/cart/add`. Adding a product already in the cart
/// increments its quantity instead of creating a second line.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 404 for an unknown product
/// or 400 when the requested quantity exceeds the available stock.
pub async fn add(client: &HttpClient, product_id: i64, quantity: u32) -> Result<Cart, HttpError> {
    let body = AddItemBody {
        product_id,
        quantity,
    };
    let request = HttpRequest::builder(HttpMethod::Post, "/api/cart/add")
        .body(serde_json::to_value(body)?)
        .body_type(DataType::Json)
        .build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Adds a single unit of a product to the cart.
///
/// Convenience wrapper over [`add`] with a quantity of 1.
///
/// # Errors
///
/// See [`add`].
pub async fn add_one(client: &HttpClient, product_id: i64) -> Result<Cart, HttpError> {
    add(client, product_id, 1).await
}

/// Sets the quantity of an existing cart line.
///
/// Sends `PUT /api/cart/update/{item_id}?quantity=N` — the quantity rides
/// in the query string and the request carries no body. A quantity of 0
/// removes the line.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 404 for an unknown cart or
/// cart line.
pub async fn update_item(
    client: &HttpClient,
    item_id: i64,
    quantity: u32,
) -> Result<Cart, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Put, format!("/api/cart/update/{item_id}"))
        .query_param("quantity", quantity.to_string())
        .build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Removes a line from the cart.
///
/// Sends `DELETE /api/cart/remove/{item_id}`.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 404 for an unknown cart or
/// cart line.
pub async fn remove_item(client: &HttpClient, item_id: i64) -> Result<Cart, HttpError> {
    let request =
        HttpRequest::builder(HttpMethod::Delete, format!("/api/cart/remove/{item_id}")).build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Removes every line from the cart.
///
/// Sends `DELETE /api/cart/clear`.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn clear(client: &HttpClient) -> Result<Cart, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Delete, "/api/cart/clear").build()?;

    let response = client.request(request).await?;
    decode(response)
}
