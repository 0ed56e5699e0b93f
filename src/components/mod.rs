//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome while reading session state from
//! the Leptos context provider.

pub mod app_header;
