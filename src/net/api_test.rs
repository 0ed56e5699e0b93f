use super::*;

// =============================================================
// Status fallback messages
// =============================================================

#[test]
fn session_resolve_failed_message_formats_status() {
    assert_eq!(session_resolve_failed_message(401), "session resolve failed: 401");
}

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(403), "sign in failed: 403");
}

#[test]
fn sign_up_failed_message_formats_status() {
    assert_eq!(sign_up_failed_message(409), "sign up failed: 409");
}

#[test]
fn sign_out_failed_message_formats_status() {
    assert_eq!(sign_out_failed_message(502), "sign out failed: 502");
}

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn error_message_from_body_prefers_server_message() {
    assert_eq!(
        error_message_from_body(r#"{"error":"invalid credentials"}"#, "sign in failed: 401"),
        "invalid credentials"
    );
}

#[test]
fn error_message_from_body_falls_back_on_non_json() {
    assert_eq!(
        error_message_from_body("<html>Bad Gateway</html>", "sign out failed: 502"),
        "sign out failed: 502"
    );
}

#[test]
fn error_message_from_body_falls_back_on_blank_message() {
    assert_eq!(
        error_message_from_body(r#"{"error":"   "}"#, "sign up failed: 400"),
        "sign up failed: 400"
    );
}

#[test]
fn error_message_from_body_falls_back_on_missing_field() {
    assert_eq!(
        error_message_from_body(r#"{"detail":"nope"}"#, "sign in failed: 400"),
        "sign in failed: 400"
    );
}
