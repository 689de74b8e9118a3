//! Session state for JewelShop API authentication.
//!
//! This module provides the [`SessionStore`] type, the single shared holder
//! of the bearer token and cached user data consulted by the HTTP client
//! before each request.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::config::AccessToken;

type LogoutHook = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct SessionState {
    token: Option<AccessToken>,
    user_data: Option<serde_json::Value>,
}

/// Holds the client-side session for JewelShop API calls.
///
/// The store keeps at most one bearer token and one opaque user-data blob.
/// The token is written by login, read before every outgoing request, and
/// removed together with the user data on [`clear`](Self::clear). There is
/// no expiry or refresh handling; the token is treated as opaque.
///
/// The store is passed explicitly to the HTTP client rather than living in
/// ambient global state, so several clients can share one session (or hold
/// independent ones).
///
/// # Thread Safety
///
/// `SessionStore` is `Send + Sync` and uses interior mutability, so it can
/// be shared behind an `Arc` across async tasks. Reads and writes of the
/// token are individually consistent, but nothing serializes a logout
/// against an in-flight request: a request racing a `clear` may observe a
/// stale or absent token and is sent as-is.
///
/// # Logout Hook
///
/// A hook registered via [`with_logout_hook`](Self::with_logout_hook) runs
/// exactly once per [`clear`](Self::clear) call, after the token and user
/// data have been removed. Applications typically use it to switch to
/// their login view.
///
/// # Example
///
/// ```rust
/// use jewelshop_api::SessionStore;
///
/// let store = SessionStore::new();
/// assert!(!store.has_session());
///
/// store.set_token("abc123");
/// assert!(store.has_session());
///
/// store.clear();
/// assert!(!store.has_session());
/// ```
#[derive(Default)]
pub struct SessionStore {
    state: RwLock<SessionState>,
    on_logout: Option<LogoutHook>,
}

impl SessionStore {
    /// Creates an empty session store with no logout hook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session store that runs `hook` once per
    /// [`clear`](Self::clear) call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use jewelshop_api::SessionStore;
    ///
    /// let redirects = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&redirects);
    /// let store = SessionStore::with_logout_hook(move || {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// store.set_token("abc");
    /// store.clear();
    /// assert_eq!(redirects.load(Ordering::SeqCst), 1);
    /// ```
    #[must_use]
    pub fn with_logout_hook(hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            on_logout: Some(Box::new(hook)),
        }
    }

    /// Returns `true` iff a non-empty token is currently held.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.read().token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Overwrites the stored token unconditionally.
    pub fn set_token(&self, token: impl Into<AccessToken>) {
        self.write().token = Some(token.into());
    }

    /// Returns a copy of the current token, or `None` when no session is
    /// active.
    ///
    /// An empty token counts as no session, matching
    /// [`has_session`](Self::has_session).
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.read()
            .token
            .as_ref()
            .filter(|t| !t.is_empty())
            .cloned()
    }

    /// Replaces the cached user-data blob.
    ///
    /// The blob is opaque to the SDK; it is stored as-is and removed on
    /// [`clear`](Self::clear).
    pub fn set_user_data(&self, data: serde_json::Value) {
        self.write().user_data = Some(data);
    }

    /// Returns a copy of the cached user-data blob, if any.
    #[must_use]
    pub fn user_data(&self) -> Option<serde_json::Value> {
        self.read().user_data.clone()
    }

    /// Removes the token and any cached user data, then runs the logout
    /// hook.
    ///
    /// The hook runs exactly once per call, whether or not a session was
    /// active, and callers cannot suppress it once registered.
    pub fn clear(&self) {
        {
            let mut state = self.write();
            state.token = None;
            state.user_data = None;
        }
        if let Some(hook) = &self.on_logout {
            hook();
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_session", &self.has_session())
            .finish_non_exhaustive()
    }
}

// Verify SessionStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionStore>();
};
