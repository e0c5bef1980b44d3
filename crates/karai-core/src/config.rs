//! Environment-variable helpers for service configuration.
//!
//! Services hand-roll a `Config::from_env()` constructor from these; required
//! variables panic at startup so misconfiguration fails fast and loudly.

/// Read a required env var.
///
/// # Panics
///
/// Panics with the variable name if it is unset.
pub fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

/// Read an optional env var, falling back to `default`.
pub fn or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Read and parse an optional env var, falling back to `default` when unset
/// or unparseable.
pub fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
