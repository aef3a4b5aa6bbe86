//! Integration tests for the Courtside root console.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a platform backend and point the console at it
//! CONSOLE_API_BASE_URL=http://localhost:5000 cargo run -p courtside-console
//!
//! # Run integration tests against the live console
//! cargo test -p courtside-integration-tests -- --ignored
//! ```
//!
//! Tests default to `http://localhost:4000`; override with `CONSOLE_BASE_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the running console (configurable via environment).
#[must_use]
pub fn console_base_url() -> String {
    std::env::var("CONSOLE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}
