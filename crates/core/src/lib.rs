//! Courtside Core - Shared types library.
//!
//! This crate provides common types used across Courtside components:
//! - `console` - Root administration console (internal network only)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. It exists so
//! that wire-level entities and their validation rules live in exactly one
//! place.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails and entity statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
