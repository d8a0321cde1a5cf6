// deep-sanitize/src/lib.rs
//! # Deep Sanitize
//!
//! `deep-sanitize` provides deep, shape-preserving HTML/script-injection
//! sanitization for arbitrarily nested data values. It walks a value's
//! shape (scalar / sequence / keyed mapping), rebuilding an equivalent
//! structure with every string leaf replaced by its sanitized form, and
//! delegates the actual string-level policy to a pluggable engine — by
//! default an allow-list HTML sanitizer.
//!
//! The library is pure and stateless: it allocates only new output
//! structures, never mutates its input (the `_in_place` variants mutate
//! only the value the caller hands in exclusively), and is safe to invoke
//! concurrently from multiple call sites.
//!
//! ## Modules
//!
//! * `config`: Defines `SanitizeOptions`, the resolved `EffectiveOptions`, and option layering.
//! * `engine`: Defines the `StringSanitizer` trait, the seam between traversal and policy.
//! * `engines`: Contains concrete `StringSanitizer` implementations (HTML strip, entity escape).
//! * `sanitize`: The recursive traversal and the public entry points.
//! * `errors`: The library's structured error type.
//!
//! ## Public API
//!
//! **Sanitization**
//!
//! * [`sanitize_value`]: Deep-sanitizes a `serde_json::Value`, returning an identically shaped copy.
//! * [`sanitize_value_with`]: Same traversal, generic over the `StringSanitizer` capability.
//! * [`sanitize_value_in_place`] / [`sanitize_value_in_place_with`]: Allocation-avoiding variants.
//! * [`sanitize`]: Typed round-trip for any `Serialize + DeserializeOwned` type.
//!
//! **Configuration**
//!
//! * [`SanitizeOptions`]: Per-call options (allow-list, tag-body stripping, passthroughs).
//! * [`resolve_options`] / [`merge_options`]: Default resolution and option layering.
//! * [`rich_text_white_list`]: A conservative built-in allow-list for formatted text.
//!
//! **Engines**
//!
//! * [`StringSanitizer`]: The pluggable string sanitization capability.
//! * [`HtmlEngine`]: The default, ammonia-backed allow-list engine.
//! * [`EscapeEngine`] / [`escape_html`]: Entity-escaping alternative.
//!
//! ## Usage Example
//!
//! ```rust
//! use deep_sanitize::sanitize_value;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "title": "<script>alert(1)</script>Hello",
//!     "count": 3,
//!     "tags": ["<b>bold</b>", null],
//! });
//!
//! // Default options: empty allow-list, so all tags are stripped and
//! // script bodies are removed.
//! let cleaned = sanitize_value(&payload, None);
//!
//! assert_eq!(cleaned["title"], "Hello");
//! assert_eq!(cleaned["count"], 3);
//! assert_eq!(cleaned["tags"][0], "bold");
//! assert_eq!(cleaned["tags"][1], serde_json::Value::Null);
//! ```
//!
//! ## Error Handling
//!
//! The traversal and both engines are infallible and panic-free for any
//! input shape. Only the typed [`sanitize`] round-trip returns a
//! [`SanitizeError`], and only when serde conversion fails.
//!
//! ## Design Principles
//!
//! * **Shape preservation:** output mirrors input exactly — same nesting,
//!   same keys and key order, same sequence order; only string content changes.
//! * **Pluggable policy:** the `StringSanitizer` trait lets callers swap the
//!   string-level engine without touching the traversal.
//! * **Stateless:** options are honored per call; there is no global
//!   configuration and nothing is persisted.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod sanitize;

/// Re-exports the public configuration types and functions.
pub use config::{
    merge_options,
    resolve_options,
    rich_text_white_list,
    EffectiveOptions,
    SanitizeOptions,
    WhiteList,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SanitizeError;

/// Re-exports the core string sanitization trait.
pub use engine::StringSanitizer;

/// Re-exports the concrete engine implementations from their respective locations.
pub use engines::escape_engine::{escape_html, EscapeEngine};
pub use engines::html_engine::HtmlEngine;

/// Re-exports the sanitization entry points.
pub use sanitize::{
    sanitize,
    sanitize_value,
    sanitize_value_in_place,
    sanitize_value_in_place_with,
    sanitize_value_with,
};
