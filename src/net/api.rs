//! REST helpers for the server's authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, String>` with a human-readable
//! message. The server's `{ "error": "..." }` body is preferred when one
//! is present; otherwise a formatted status fallback is used. No
//! distinction is made between network, validation, and authorization
//! failures at this layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, Registration, User};

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn session_resolve_failed_message(status: u16) -> String {
    format!("session resolve failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign up failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_failed_message(status: u16) -> String {
    format!("sign out failed: {status}")
}

/// Extract the server-provided error message from a response body,
/// falling back to `fallback` when the body is not the expected shape.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error,
        _ => fallback.to_owned(),
    }
}

/// Resolve the current session via `GET /api/auth/me`.
///
/// # Errors
///
/// Returns an error string if no session exists, the request fails, or
/// the response cannot be decoded.
pub async fn fetch_current_session() -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, &session_resolve_failed_message(status)));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string on invalid credentials, a network failure, or
/// an undecodable response.
pub async fn sign_in(credentials: &Credentials) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, &sign_in_failed_message(status)));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// The server signs the new user in as part of registration, so a
/// successful response carries the authenticated `User`.
///
/// # Errors
///
/// Returns an error string on validation or conflict errors, a network
/// failure, or an undecodable response.
pub async fn sign_up(registration: &Registration) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(registration)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, &sign_up_failed_message(status)));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Invalidate the current session via `POST /api/auth/logout`.
///
/// Not fire-and-forget: the session store records and re-signals a
/// failed sign-out, so the outcome is reported to the caller.
///
/// # Errors
///
/// Returns an error string if the server cannot invalidate the session.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_message_from_body(&body, &sign_out_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}
