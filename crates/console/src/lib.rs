//! Courtside Console library.
//!
//! This crate provides the root console functionality as a library,
//! allowing it to be tested and reused.
//!
//! The console is the rendering layer only: it holds no data and no
//! sessions. Every page load fetches fresh JSON from the platform API and
//! renders it; every action POSTs to the platform API and redirects back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
