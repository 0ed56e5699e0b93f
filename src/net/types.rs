//! Shared wire-protocol DTOs for the client/server auth boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON payloads so serde
//! round-trips stay lossless. The client treats `User` as opaque: field
//! constraints and identity semantics are owned by the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address the account was registered with.
    pub email: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Sign-in request body for `POST /api/auth/login`.
///
/// Passed through verbatim; validation is the server's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up request body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}
