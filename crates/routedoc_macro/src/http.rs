//! HTTP method constants and utilities.
//!
//! Verbs in `method = [...]` arguments of `#[controller]` and
//! `#[request_mapping]` are validated here so that an unsupported verb is
//! reported at compile time, at the offending token.
//!
//! # Supported Methods
//!
//! The following HTTP methods are supported (case-insensitive):
//! GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS, TRACE

/// All supported HTTP methods as lowercase strings.
pub const HTTP_METHODS: &[&str] = &[
    "get", "post", "put", "patch", "delete", "head", "options", "trace",
];

/// Check if a string is a valid HTTP method (case-insensitive).
///
/// ```ignore
/// assert!(is_http_method("GET"));
/// assert!(is_http_method("Post"));
/// assert!(!is_http_method("invalid"));
/// ```
pub fn is_http_method(s: &str) -> bool {
    HTTP_METHODS.contains(&s.to_lowercase().as_str())
}
