// deep-sanitize/src/engine.rs
//! Defines the core StringSanitizer trait.
//!
//! The `StringSanitizer` trait is the seam between the shape-preserving
//! traversal and the actual string-level sanitization policy. The traversal
//! never inspects string content itself; it hands every string leaf to an
//! engine and splices the result back into the rebuilt value. This keeps
//! the policy pluggable: the ammonia-backed HTML engine is the default,
//! but an escaping engine or a caller-supplied implementation slots in
//! without touching the traversal.
//!
//! License: MIT OR APACHE 2.0

/// A trait that defines the string-level sanitization capability.
///
/// Implementations bind their policy (allow-lists, escaping rules) at
/// construction time; `clean` is then a pure string-in, string-out call.
/// Engines must be infallible: malformed input is sanitized on a
/// best-effort basis, never rejected.
pub trait StringSanitizer: Send + Sync {
    /// A short identifier for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Sanitizes a single string leaf.
    fn clean(&self, input: &str) -> String;
}
