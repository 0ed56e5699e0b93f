//! Session provider and accessor for authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` owns one `RwSignal<AuthState>` per mount, resolves
//! the current session once against the server, and exposes sign-in /
//! sign-up / sign-out actions through a `Copy` handle provided via Leptos
//! context. Descendants read the handle with [`use_session`] and
//! re-render automatically when the state changes.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser event loop. Actions suspend at the
//! HTTP call and apply their state transition at the resume point; no
//! locking is involved. Overlapping actions are not serialized — the
//! last one to settle wins.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Credentials, Registration, User};
use crate::state::auth::AuthState;

/// Shared handle over the session state and its action methods.
///
/// Cheap to copy; every clone points at the same per-mount signal. The
/// signal itself is private: consumers mutate state only through the
/// action methods.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: RwSignal<AuthState>,
}

impl SessionHandle {
    fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// The signed-in user, if any. Reactive.
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    /// Whether the initial session resolution is still in flight. Reactive.
    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    /// Message from the most recent failed operation, if any. Reactive.
    pub fn last_error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    /// One-time session resolution after mount. The only path that takes
    /// `loading` from true to false.
    #[cfg(feature = "hydrate")]
    async fn resolve_initial_session(self) {
        match api::fetch_current_session().await {
            Ok(user) => self.state.set(AuthState::authenticated(user)),
            Err(message) => self.state.set(AuthState::unauthenticated(message)),
        }
    }

    /// Sign in with the given credentials.
    ///
    /// # Errors
    ///
    /// A failure is recorded in the state (clearing any previous user)
    /// and re-signaled to the caller so forms can show inline feedback.
    pub async fn sign_in(self, credentials: Credentials) -> Result<(), String> {
        match api::sign_in(&credentials).await {
            Ok(user) => {
                self.state.set(AuthState::authenticated(user));
                Ok(())
            }
            Err(message) => {
                self.state.set(AuthState::unauthenticated(message.clone()));
                Err(message)
            }
        }
    }

    /// Create an account and sign the new user in.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionHandle::sign_in`].
    pub async fn sign_up(self, registration: Registration) -> Result<(), String> {
        match api::sign_up(&registration).await {
            Ok(user) => {
                self.state.set(AuthState::authenticated(user));
                Ok(())
            }
            Err(message) => {
                self.state.set(AuthState::unauthenticated(message.clone()));
                Err(message)
            }
        }
    }

    /// Sign the current user out.
    ///
    /// # Errors
    ///
    /// On failure the user is kept (the server may not have invalidated
    /// the session) and only the error field is overlaid; the failure is
    /// re-signaled to the caller.
    pub async fn sign_out(self) -> Result<(), String> {
        match api::sign_out().await {
            Ok(()) => {
                self.state.set(AuthState::signed_out());
                Ok(())
            }
            Err(message) => {
                self.state.update(|state| *state = state.clone().with_error(message.clone()));
                Err(message)
            }
        }
    }
}

/// Provides session state and actions to its subtree.
///
/// While the initial resolution is in flight a loading screen is
/// rendered in place of the children, so no descendant can observe a
/// half-resolved session. Each mount owns an independent state instance.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionHandle::new();
    provide_context(session);

    // The component body runs once per mount, so re-renders cannot
    // restart the resolution. During SSR the call never starts and the
    // loading screen is what gets rendered.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.resolve_initial_session());

    view! {
        <Show when=move || !session.is_loading() fallback=|| view! { <LoadingScreen/> }>
            {children()}
        </Show>
    }
}

/// Full-viewport spinner shown while the session is being resolved.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-label="Loading"></div>
        </div>
    }
}

/// Access the session handle from any descendant of [`SessionProvider`].
///
/// # Panics
///
/// Panics when called outside a mounted provider's subtree; that is a
/// programming error, not a recoverable condition.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be used within a SessionProvider")
}
