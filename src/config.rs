//! Configuration management for `deep-sanitize`.
//!
//! This module defines the options structure accepted by every public
//! sanitization entry point, the resolved form the HTML engine consumes,
//! and utilities for layering option sets. Options are honored per call;
//! nothing here is persisted or globally mutable.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use log::{debug, warn};

/// Allow-list mapping a tag name to the attribute names permitted on it.
///
/// Tags absent from the map are stripped; attributes absent from a tag's
/// list are dropped. A `BTreeMap` keeps iteration order deterministic.
pub type WhiteList = BTreeMap<String, Vec<String>>;

/// Per-call options controlling the sanitizer.
///
/// Every field is optional. [`resolve_options`] applies the documented
/// default for anything left unset, so a `SanitizeOptions::default()` (or
/// passing no options at all) means "strip everything".
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// If true, the text content of disallowed raw/container tags (script,
    /// style, iframe, and friends) is removed along with the tag instead of
    /// surviving as plain text. Default: `false`.
    pub strip_ignore_tag_body: Option<bool>,
    /// Tag/attribute allow-list. Default: empty, meaning no tags survive.
    pub white_list: Option<WhiteList>,
    /// Attributes permitted on every allowed tag. Default: none.
    pub generic_attributes: Option<Vec<String>>,
    /// URL schemes permitted in URL-valued attributes such as `href`.
    /// Default: the engine's own scheme set.
    pub url_schemes: Option<Vec<String>>,
    /// Whether HTML comments are removed. Default: `true`.
    pub strip_comments: Option<bool>,
}

impl SanitizeOptions {
    /// Sets whether disallowed raw/container tags lose their text content.
    pub fn with_strip_ignore_tag_body(mut self, strip: bool) -> Self {
        self.strip_ignore_tag_body = Some(strip);
        self
    }

    /// Replaces the tag/attribute allow-list.
    pub fn with_white_list(mut self, white_list: WhiteList) -> Self {
        self.white_list = Some(white_list);
        self
    }

    /// Sets the attributes permitted on every allowed tag.
    pub fn with_generic_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts URL-valued attributes to the given schemes.
    pub fn with_url_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url_schemes = Some(schemes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether HTML comments are removed.
    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = Some(strip);
        self
    }

    /// A preset allowing common formatting tags with conservative attributes.
    pub fn rich_text() -> Self {
        Self::default().with_white_list(rich_text_white_list())
    }
}

/// Builds the allow-list used by [`SanitizeOptions::rich_text`]: common
/// inline/block formatting tags, links restricted to `href` and `title`.
pub fn rich_text_white_list() -> WhiteList {
    let mut list = WhiteList::new();
    let bare_tags = [
        "b", "i", "em", "strong", "u", "s", "sub", "sup", "p", "br", "hr",
        "ul", "ol", "li", "blockquote", "code", "pre", "span",
        "h1", "h2", "h3", "h4", "h5", "h6",
    ];
    for tag in bare_tags {
        list.insert(tag.to_string(), Vec::new());
    }
    list.insert(
        "a".to_string(),
        vec!["href".to_string(), "title".to_string()],
    );
    list
}

/// The resolved, normalized form of [`SanitizeOptions`]: defaults applied,
/// tag and attribute names trimmed and lowercased, duplicates merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub strip_ignore_tag_body: bool,
    pub white_list: WhiteList,
    pub generic_attributes: Vec<String>,
    /// `None` defers to the engine's default scheme set.
    pub url_schemes: Option<Vec<String>>,
    pub strip_comments: bool,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        resolve_options(None)
    }
}

/// Resolves user-supplied options against the documented defaults.
///
/// Unset fields fall back to: `strip_ignore_tag_body = false`, an empty
/// white list, no generic attributes, the engine's URL schemes, and
/// `strip_comments = true`. Tag and attribute names are trimmed and
/// lowercased; entries left empty after trimming are dropped with a warning.
pub fn resolve_options(options: Option<&SanitizeOptions>) -> EffectiveOptions {
    let opts = options.cloned().unwrap_or_default();
    debug!(
        "Resolving sanitize options: {} white-listed tag(s), strip_ignore_tag_body={}.",
        opts.white_list.as_ref().map_or(0, |wl| wl.len()),
        opts.strip_ignore_tag_body.unwrap_or(false)
    );

    let mut white_list = WhiteList::new();
    for (raw_tag, raw_attrs) in opts.white_list.unwrap_or_default() {
        let tag = match normalize_name(&raw_tag) {
            Some(tag) => tag,
            None => {
                warn!("Dropping white-list entry with an empty tag name.");
                continue;
            }
        };
        let attrs = white_list.entry(tag.clone()).or_default();
        for raw_attr in raw_attrs {
            match normalize_name(&raw_attr) {
                Some(attr) => {
                    if !attrs.contains(&attr) {
                        attrs.push(attr);
                    }
                }
                None => warn!("Dropping empty attribute name on white-listed tag '{}'.", tag),
            }
        }
    }

    let generic_attributes = normalize_names(opts.generic_attributes.unwrap_or_default());
    let url_schemes = opts.url_schemes.map(normalize_names);

    EffectiveOptions {
        strip_ignore_tag_body: opts.strip_ignore_tag_body.unwrap_or(false),
        white_list,
        generic_attributes,
        url_schemes,
        strip_comments: opts.strip_comments.unwrap_or(true),
    }
}

/// Layers an optional overlay on top of a base option set.
///
/// Overlay scalar fields win when present. White lists merge per tag name,
/// with overlay entries replacing base entries wholesale. This lets callers
/// hold a base policy and apply per-call overrides, mirroring how the
/// resolved defaults are themselves overridden.
pub fn merge_options(base: SanitizeOptions, overlay: Option<SanitizeOptions>) -> SanitizeOptions {
    let overlay = match overlay {
        Some(overlay) => overlay,
        None => return base,
    };
    debug!("merge_options called with an overlay option set.");

    let white_list = match (base.white_list, overlay.white_list) {
        (Some(mut base_wl), Some(overlay_wl)) => {
            debug!("Merging {} overlay white-list entries.", overlay_wl.len());
            for (tag, attrs) in overlay_wl {
                base_wl.insert(tag, attrs);
            }
            Some(base_wl)
        }
        (base_wl, overlay_wl) => overlay_wl.or(base_wl),
    };

    SanitizeOptions {
        strip_ignore_tag_body: overlay.strip_ignore_tag_body.or(base.strip_ignore_tag_body),
        white_list,
        generic_attributes: overlay.generic_attributes.or(base.generic_attributes),
        url_schemes: overlay.url_schemes.or(base.url_schemes),
        strip_comments: overlay.strip_comments.or(base.strip_comments),
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(names.len());
    for raw in names {
        match normalize_name(&raw) {
            Some(name) => {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
            None => warn!("Dropping empty name from options list."),
        }
    }
    out
}
