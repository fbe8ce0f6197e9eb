//! HTTP chat backend.
//!
//! Implements `ChatBackend` by POSTing the request as JSON to a single
//! fixed endpoint and validating the JSON reply. There is no auth, no
//! retry, and no status-specific handling beyond reporting it.

mod api;
mod client;
mod config;


pub use client::HttpChatBackend;
pub use config::HttpBackendConfig;
