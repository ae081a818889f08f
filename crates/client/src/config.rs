use openclaw_core::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, env_parse_with_default,
    env_string_with_default,
};

/// Connection settings for [`crate::ApiClient`].
///
/// Fixed at construction; the client never mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin plus API prefix, e.g. `https://claw.example.com/api/v1`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Read configuration from `OPENCLAW_API_URL` and
    /// `OPENCLAW_HTTP_TIMEOUT_SECS`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_string_with_default("OPENCLAW_API_URL", DEFAULT_API_BASE_URL),
            timeout_secs: env_parse_with_default(
                "OPENCLAW_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            ),
        }
    }

    /// Configuration pointing at an explicit base URL with default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::with_base_url("https://claw.example.com/api/v1");
        assert_eq!(config.base_url, "https://claw.example.com/api/v1");
        assert_eq!(config.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }
}
