//! Shared constants for openclaw.
//!
//! Centralizes defaults used by the client, the service facades, and the CLI.

/// Default page size for list endpoints when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Default page offset for list endpoints.
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// Base URL (origin plus API prefix) used when `OPENCLAW_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8443/api/v1";

/// Per-request timeout in seconds when `OPENCLAW_HTTP_TIMEOUT_SECS` is not set.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Minimum polling interval for monitor watch mode, in seconds.
///
/// The dashboards this API was built for refresh between 5s and 60s
/// depending on the view; the CLI clamps to the same window.
pub const MIN_WATCH_INTERVAL_SECS: u64 = 5;

/// Maximum polling interval for monitor watch mode, in seconds.
pub const MAX_WATCH_INTERVAL_SECS: u64 = 60;
