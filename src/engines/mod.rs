// deep-sanitize/src/engines/mod.rs
//! This module contains the string sanitization engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `StringSanitizer` trait. The HTML engine strips disallowed markup via
//! an allow-list; the escape engine neutralizes markup by entity-escaping
//! it instead. To add a new engine, create a new file, define its logic,
//! and declare it here using `pub mod <engine_name>;`.
//!
//! License: MIT OR APACHE 2.0

pub mod html_engine;
pub mod escape_engine;
