//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the login/register forms, and user-aware
//! components to coordinate redirects and identity-dependent rendering.
//! The state is owned by `SessionProvider` and mutated only by its action
//! handlers; consumers get a read-only reactive view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, loading status, and
/// the most recent operation failure.
///
/// `loading` is true only while the initial session resolution is in
/// flight; once it settles the flag never returns to true for the
/// lifetime of the provider mount.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    /// Session resolution, sign-in, or sign-up succeeded.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false, error: None }
    }

    /// Session resolution, sign-in, or sign-up failed: the user is
    /// cleared and the failure message recorded.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self { user: None, loading: false, error: Some(message.into()) }
    }

    /// Sign-out succeeded: no user, no stale error.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, error: None }
    }

    /// Overlay an error message without touching `user` or `loading`.
    ///
    /// Sign-out failure keeps the session live on the client (the server
    /// may not have invalidated it), so only the error field changes.
    /// This asymmetry with sign-in/sign-up failure is intentional.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Whether a signed-in user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
