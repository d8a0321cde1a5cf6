// deep-sanitize/src/sanitize.rs
//! The recursive, shape-preserving traversal and the public sanitization
//! entry points.
//!
//! The traversal walks a `serde_json::Value` depth-first and rebuilds an
//! identically shaped value with every string leaf replaced by the
//! engine's output. Non-string scalars pass through unchanged. The
//! traversal itself never fails and never panics; only the typed
//! round-trip ([`sanitize`]) is fallible, and only on serde conversion.
//!
//! Cyclic values are unrepresentable in `serde_json::Value`. Very deep
//! nesting is bounded only by the thread stack; the intended inputs are
//! deserialized request/response payloads, which stay shallow.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::config::{resolve_options, SanitizeOptions};
use crate::engine::StringSanitizer;
use crate::engines::html_engine::HtmlEngine;
use crate::errors::SanitizeError;

/// Shared engine for the no-options call path, so repeated default calls
/// don't rebuild the resolved option set.
static DEFAULT_ENGINE: Lazy<HtmlEngine> = Lazy::new(HtmlEngine::default);

/// Returns a deep-sanitized copy of `value` with identical shape.
///
/// Every string leaf is passed through the HTML engine built from
/// `options` (resolved against the documented defaults); sequences and
/// mappings are rebuilt with the same length, key set, and order; other
/// scalars are cloned as-is.
///
/// Falsy values short-circuit before shape inspection: `null`, `false`,
/// zero, and the empty string come back unchanged. For non-strings this
/// is harmless since they are unaffected anyway, but note that an empty
/// string is returned as-is rather than handed to the engine. This
/// mirrors long-observed behavior and is deliberately left uncorrected.
pub fn sanitize_value(value: &Value, options: Option<&SanitizeOptions>) -> Value {
    match options {
        None => sanitize_value_with(&*DEFAULT_ENGINE, value),
        Some(_) => {
            let engine = HtmlEngine::new(resolve_options(options));
            sanitize_value_with(&engine, value)
        }
    }
}

/// Like [`sanitize_value`], but generic over the string sanitization
/// capability. The engine receives every non-empty string leaf.
pub fn sanitize_value_with<S: StringSanitizer + ?Sized>(sanitizer: &S, value: &Value) -> Value {
    if is_falsy(value) {
        return value.clone();
    }
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| sanitize_value_with(sanitizer, item))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), sanitize_value_with(sanitizer, item));
            }
            Value::Object(out)
        }
        Value::String(s) => Value::String(sanitizer.clean(s)),
        other => other.clone(),
    }
}

/// In-place counterpart of [`sanitize_value`]: rewrites string leaves
/// directly instead of allocating a rebuilt copy. Same falsy
/// short-circuit, same shape guarantees (trivially, since nothing but
/// string content is touched).
pub fn sanitize_value_in_place(value: &mut Value, options: Option<&SanitizeOptions>) {
    match options {
        None => sanitize_value_in_place_with(&*DEFAULT_ENGINE, value),
        Some(_) => {
            let engine = HtmlEngine::new(resolve_options(options));
            sanitize_value_in_place_with(&engine, value)
        }
    }
}

/// In-place counterpart of [`sanitize_value_with`].
pub fn sanitize_value_in_place_with<S: StringSanitizer + ?Sized>(
    sanitizer: &S,
    value: &mut Value,
) {
    if is_falsy(value) {
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                sanitize_value_in_place_with(sanitizer, item);
            }
        }
        Value::Object(map) => {
            for (_, item) in map.iter_mut() {
                sanitize_value_in_place_with(sanitizer, item);
            }
        }
        Value::String(s) => *s = sanitizer.clean(s),
        _ => {}
    }
}

/// Typed round-trip: encodes `data` to a value tree, deep-sanitizes it,
/// and decodes it back into `T`.
///
/// This is the only fallible operation in the crate; errors come solely
/// from the serde conversions at either end, never from the traversal.
pub fn sanitize<T>(data: &T, options: Option<&SanitizeOptions>) -> Result<T, SanitizeError>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(data).map_err(SanitizeError::Encode)?;
    let cleaned = sanitize_value(&encoded, options);
    serde_json::from_value(cleaned).map_err(SanitizeError::Decode)
}

/// JS-style truthiness over the value variants. Empty sequences and empty
/// mappings are NOT falsy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
