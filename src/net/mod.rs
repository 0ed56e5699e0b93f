//! Networking modules for the server's REST auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the shared wire schema.
//! All authentication work (credential checks, session cookies) lives on
//! the server; this layer only moves requests and responses.

pub mod api;
pub mod types;
