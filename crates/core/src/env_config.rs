//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
///
/// This replaces the pattern `env::var("X").ok().and_then(|v| v.parse().ok()).unwrap_or(default)`
/// which silently swallows parse failures.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable with a default fallback.
///
/// Empty values count as unset so that `OPENCLAW_API_URL= openclaw ...`
/// does not produce requests against an empty base URL.
#[must_use]
pub fn env_string_with_default(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses a unique var name; mutating the process environment is
    // unsafe since Rust 2024 and racy across threads.
    fn set_var(var: &str, value: &str) {
        unsafe { std::env::set_var(var, value) };
    }

    fn remove_var(var: &str) {
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "OPENCLAW_TEST_PARSE_VALID_31407";
        set_var(var_name, "42");
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 42);
        remove_var(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "OPENCLAW_TEST_PARSE_INVALID_31408";
        set_var(var_name, "soon");
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
        remove_var(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "OPENCLAW_TEST_PARSE_MISSING_31409";
        remove_var(var_name);
        let result: u64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn test_env_string_present() {
        let var_name = "OPENCLAW_TEST_STRING_31410";
        set_var(var_name, "https://claw.example.com/api/v1");
        assert_eq!(
            env_string_with_default(var_name, "fallback"),
            "https://claw.example.com/api/v1"
        );
        remove_var(var_name);
    }

    #[test]
    fn test_env_string_empty_falls_back() {
        let var_name = "OPENCLAW_TEST_STRING_EMPTY_31411";
        set_var(var_name, "");
        assert_eq!(env_string_with_default(var_name, "fallback"), "fallback");
        remove_var(var_name);
    }
}
