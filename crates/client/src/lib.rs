//! HTTP client for the OpenClaw REST API.
//!
//! [`ApiClient`] wraps `reqwest` with the conventions every endpoint shares:
//! base-URL prefixing, query building, camelCase/snake_case body and
//! response conversion, no-content handling, and typed errors.

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
