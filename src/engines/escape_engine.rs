// deep-sanitize/src/engines/escape_engine.rs
//! A `StringSanitizer` implementation that neutralizes markup by escaping
//! it rather than stripping it.
//!
//! Useful when the literal text of markup-looking content must survive,
//! e.g. code snippets destined for a frontend that renders via
//! `textContent`.
//!
//! License: MIT OR APACHE 2.0

use crate::engine::StringSanitizer;

/// Escapes HTML special characters as entities.
///
/// Replaces:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

/// An engine that entity-escapes every string leaf. Takes no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeEngine;

impl StringSanitizer for EscapeEngine {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn clean(&self, input: &str) -> String {
        escape_html(input)
    }
}
