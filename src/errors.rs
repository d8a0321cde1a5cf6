//! errors.rs - Custom error types for the deep-sanitize library.
//!
//! This module defines a structured error enum for the library. Only the
//! typed round-trip entry point is fallible; the value traversal and the
//! engines themselves never return errors.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `deep-sanitize` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Failed to encode value for sanitization: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode sanitized value: {0}")]
    Decode(#[source] serde_json::Error),
}
