use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_loading_with_no_user_or_error() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Resolution / sign-in / sign-up transitions
// =============================================================

#[test]
fn authenticated_sets_user_and_clears_loading_and_error() {
    let state = AuthState::authenticated(make_user());
    assert_eq!(state.user, Some(make_user()));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn unauthenticated_clears_user_and_records_message() {
    let state = AuthState::unauthenticated("session expired");
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("session expired"));
}

#[test]
fn failed_sign_in_replaces_previous_user() {
    // A failed sign-in attempt from an already-authenticated state drops
    // the stale user rather than keeping it alongside the error.
    let _signed_in = AuthState::authenticated(make_user());
    let state = AuthState::unauthenticated("invalid credentials");
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
}

// =============================================================
// Sign-out transitions
// =============================================================

#[test]
fn signed_out_clears_everything() {
    let state = AuthState::signed_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn with_error_preserves_user_and_loading() {
    let state = AuthState::authenticated(make_user()).with_error("logout failed: 502");
    assert_eq!(state.user, Some(make_user()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("logout failed: 502"));
}

#[test]
fn with_error_replaces_an_earlier_error() {
    let state = AuthState::unauthenticated("first").with_error("second");
    assert_eq!(state.error.as_deref(), Some("second"));
}

// =============================================================
// End-to-end transition sequence
// =============================================================

#[test]
fn resolve_then_sign_out_sequence() {
    // Mount: loading with nothing resolved yet.
    let state = AuthState::default();
    assert!(state.loading);

    // Initial resolution settles with a user.
    let state = AuthState::authenticated(make_user());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert!(!state.loading);
    assert!(state.error.is_none());

    // Sign-out succeeds.
    let state = AuthState::signed_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn is_authenticated_tracks_user_presence() {
    assert!(AuthState::authenticated(make_user()).is_authenticated());
    assert!(!AuthState::signed_out().is_authenticated());
    assert!(!AuthState::default().is_authenticated());
}
