// deep-sanitize/src/engines/html_engine.rs
//! A `StringSanitizer` implementation backed by the `ammonia` allow-list
//! HTML sanitizer.
//!
//! The engine owns a resolved option set and maps it onto an
//! `ammonia::Builder` for each clean call. Construction is infallible:
//! option combinations the builder would reject are normalized away up
//! front rather than surfaced as errors or panics.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};

use ammonia::Builder;
use log::debug;

use crate::config::{resolve_options, EffectiveOptions, SanitizeOptions};
use crate::engine::StringSanitizer;

/// Raw/container tags whose text content is removed along with the tag
/// when `strip_ignore_tag_body` is enabled.
const RAW_CONTENT_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template",
    "title", "textarea", "svg", "math",
];

/// Tags whose content is always removed, matching ammonia's own default.
const DEFAULT_CONTENT_TAGS: &[&str] = &["script", "style"];

/// The default string sanitization engine.
#[derive(Debug, Clone, Default)]
pub struct HtmlEngine {
    options: EffectiveOptions,
}

impl HtmlEngine {
    /// Creates an engine from an already-resolved option set.
    pub fn new(options: EffectiveOptions) -> Self {
        debug!(
            "Building HTML engine: {} white-listed tag(s), strip_ignore_tag_body={}.",
            options.white_list.len(),
            options.strip_ignore_tag_body
        );
        Self { options }
    }

    /// Creates an engine by resolving user-supplied options against the
    /// documented defaults.
    pub fn with_options(options: Option<&SanitizeOptions>) -> Self {
        Self::new(resolve_options(options))
    }

    /// Returns the resolved options the engine was built with.
    pub fn options(&self) -> &EffectiveOptions {
        &self.options
    }

    /// The set of tags whose bodies are removed. White-listed tags are
    /// excluded: the builder requires the allowed and content-stripped
    /// sets to be disjoint.
    fn content_tags(&self) -> HashSet<&str> {
        let base = if self.options.strip_ignore_tag_body {
            RAW_CONTENT_TAGS
        } else {
            DEFAULT_CONTENT_TAGS
        };
        base.iter()
            .copied()
            .filter(|tag| !self.options.white_list.contains_key(*tag))
            .collect()
    }

    /// Whether the caller has granted the `rel` attribute anywhere it
    /// collides with the builder's automatic `rel` injection on links.
    fn rel_is_granted(&self) -> bool {
        self.options.generic_attributes.iter().any(|a| a == "rel")
            || self
                .options
                .white_list
                .get("a")
                .map_or(false, |attrs| attrs.iter().any(|a| a == "rel"))
    }
}

impl StringSanitizer for HtmlEngine {
    fn name(&self) -> &'static str {
        "html"
    }

    fn clean(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let opts = &self.options;
        let tags: HashSet<&str> = opts.white_list.keys().map(String::as_str).collect();
        let tag_attributes: HashMap<&str, HashSet<&str>> = opts
            .white_list
            .iter()
            .map(|(tag, attrs)| {
                (tag.as_str(), attrs.iter().map(String::as_str).collect())
            })
            .collect();

        let mut builder = Builder::default();
        builder
            .tags(tags)
            .tag_attributes(tag_attributes)
            .generic_attributes(opts.generic_attributes.iter().map(String::as_str).collect())
            .clean_content_tags(self.content_tags())
            .strip_comments(opts.strip_comments);
        if let Some(schemes) = &opts.url_schemes {
            builder.url_schemes(schemes.iter().map(String::as_str).collect());
        }
        if self.rel_is_granted() {
            // The builder refuses to both inject rel and honor a
            // caller-granted one; the caller's grant wins.
            builder.link_rel(None);
        }

        builder.clean(input).to_string()
    }
}
