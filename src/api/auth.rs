//! Authentication operations: login, registration, current-user profile.
//!
//! Login is the one operation that bypasses the gateway's automatic
//! bearer-token attachment (no token exists yet); on success it stores the
//! returned token in the client's session store so every subsequent call
//! is authenticated.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewelshop_api::api::auth::{self, Credentials};
//!
//! let token = auth::login(&client, &Credentials::new("layla", "secret")).await?;
//! assert!(client.session_store().has_session());
//!
//! let me = auth::current_user(&client).await?;
//! println!("logged in as {}", me.username);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};

use super::decode;

/// Username/password credentials for [`login`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The account's username.
    pub username: String,
    /// The account's password, sent as-is over the wire.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A bearer token issued by the backend on successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The opaque bearer token value.
    pub access_token: String,
    /// The token scheme; the backend always issues `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Payload for registering a new account.
///
/// Only `username`, `email` and `password` are required; the profile
/// fields are optional and omitted from the wire format when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewUser {
    /// The desired username; must be unique.
    pub username: String,
    /// The account email; must be unique.
    pub email: String,
    /// The account password.
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A user profile as returned by registration and `/api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// The unique identifier of the user.
    pub id: i64,
    pub username: String,
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Date of birth.
    #[serde(default)]
    pub dob: Option<DateTime<Utc>>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Logs in with the given credentials.
///
/// Sends `POST /api/auth/login` anonymously (no bearer token, even when a
/// stale one is still stored) and, on success, overwrites the client's
/// session store with the returned `access_token`.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 401 for a wrong username or
/// password, or any other [`HttpError`] for transport/decoding failures.
/// The session store is left untouched on failure.
pub async fn login(client: &HttpClient, credentials: &Credentials) -> Result<Token, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/api/auth/login")
        .body(serde_json::to_value(credentials)?)
        .body_type(DataType::Json)
        .anonymous()
        .build()?;

    let response = client.request(request).await?;
    let token: Token = decode(response)?;

    client.session_store().set_token(token.access_token.clone());
    Ok(token)
}

/// Registers a new account.
///
/// Sends `POST /api/auth/register`. Registration does not log the new
/// account in; call [`login`] afterwards.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 400 when the username or
/// email is already registered.
pub async fn register(client: &HttpClient, user: &NewUser) -> Result<UserProfile, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/api/auth/register")
        .body(serde_json::to_value(user)?)
        .body_type(DataType::Json)
        .build()?;

    let response = client.request(request).await?;
    decode(response)
}

/// Fetches the profile of the currently authenticated user.
///
/// Sends `GET /api/auth/me`.
///
/// # Errors
///
/// Returns [`HttpError::Response`] with status 401 when no valid session
/// token is attached.
pub async fn current_user(client: &HttpClient) -> Result<UserProfile, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/api/auth/me").build()?;

    let response = client.request(request).await?;
    decode(response)
}
