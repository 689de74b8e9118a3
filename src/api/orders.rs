//! Order operations: history, single order, checkout.
//!
//! Checkout converts the whole cart into an order server-side; the SDK
//! sends only the payment and shipping details.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::api::orders::{self, CheckoutRequest};
//!
//! let order = orders::checkout(&client, &CheckoutRequest {
//!     shipping_address: Some("King Fahd Rd, Riyadh".to_string()),
//!     ..Default::default()
//! }).await?;
//! println!("order {} placed, total {}", order.id, order.total_amount);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};

use super::decode;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// The order was placed and awaits processing.
    #[default]
    Pending,
    /// The order is being prepared.
    Processing,
    /// The order was handed to the courier.
    Shipped,
    /// The order reached the customer.
    Delivered,
    /// The order was cancelled.
    Cancelled,
}

/// A line of an order, priced at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// The unique identifier of the order line.
    pub id: i64,
    /// The order this line belongs to.
    pub order_id: i64,
    /// The product that was ordered.
    pub product_id: i64,
    /// Number of units.
    pub quantity: u32,
    /// Unit price at checkout time, in Saudi Riyal.
    pub unit_price: f64,
    /// `unit_price * quantity`, in Saudi Riyal.
    pub subtotal: f64,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    pub id: i64,
    /// The ordering user.
    pub user_id: i64,

    /// When the order was placed.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,

    /// Current lifecycle state.
    #[serde(default)]
    pub status: OrderStatus,

    /// Sum of all line subtotals, in Saudi Riyal.
    #[serde(default)]
    pub total_amount: f64,

    /// The order lines.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// The payment method chosen at checkout, if any.
    #[serde(default)]
    pub payment_method_id: Option<i64>,

    #[serde(default)]
    pub shipping_address: Option<String>,

    /// Reference to an uploaded bank-transfer receipt, if any.
    #[serde(default)]
    pub transfer_receipt: Option<String>,
}

/// Payment and shipping details for [`checkout`].
///
/// All fields are optional; unset fields are omitted from the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// The payment method to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,

    /// Reference to an uploaded bank-transfer receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_receipt: Option<String>,
}

/// Lists the current user's orders.
///
/// Sends `GET /api/orders/`.
///
/// # Errors
///
/// Returns [`HttpError`] for transport, decoding or backend failures.
pub async fn list(client: &HttpClient) -> Result<Vec<Order>, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/api/orders/").build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Fetches one of the current user's orders by id.
///
/// Sends `GET /api/orders/{id}`. Orders belonging to other users are
/// reported as not found.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 404 when the order does not
/// exist for this user.
pub async fn find(client: &HttpClient, order_id: i64) -> Result<Order, HttpError> {
    let request =
        HttpRequest::builder(HttpMethod::Get, format!("/api/orders/{order_id}")).build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Places an order from the current cart.
///
/// Sends `POST /api/orders/checkout`. The backend prices every cart line,
/// decrements stock and empties the cart as part of the same operation.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 400 when the cart is empty
/// or a line exceeds the available stock.
pub async fn checkout(client: &HttpClient, order: &CheckoutRequest) -> Result<Order, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/api/orders/checkout")
        .body(serde_json::to_value(order)?)
        .body_type(DataType::Json)
        .build()?;

    let response = client.request(request).await?;
    decode(response)
}
