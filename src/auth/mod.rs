//! Session handling for JewelShop API authentication.
//!
//! The JewelShop backend authenticates every call (except login itself)
//! with a bearer token issued by `POST /api/auth/login`. This module holds
//! the [`SessionStore`] that keeps that token, and the login/register/
//! current-user operations live in [`crate::api::auth`].

mod session;

pub use session::SessionStore;
