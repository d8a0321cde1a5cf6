// deep-sanitize/tests/sanitize_tests.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use deep_sanitize::{
    sanitize, sanitize_value, sanitize_value_in_place, sanitize_value_with, SanitizeOptions,
    StringSanitizer, WhiteList,
};

/// Engine that counts clean calls, for asserting which leaves reach the
/// capability.
#[derive(Default)]
struct CountingEngine {
    calls: AtomicUsize,
}

impl StringSanitizer for CountingEngine {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn clean(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        input.to_string()
    }
}

struct Redactor;

impl StringSanitizer for Redactor {
    fn name(&self) -> &'static str {
        "redactor"
    }

    fn clean(&self, _input: &str) -> String {
        "[REDACTED]".to_string()
    }
}

#[test]
fn test_non_string_scalars_pass_through() {
    assert_eq!(sanitize_value(&json!(5), None), json!(5));
    assert_eq!(sanitize_value(&json!(true), None), json!(true));
    assert_eq!(sanitize_value(&json!(2.5), None), json!(2.5));
    assert_eq!(sanitize_value(&Value::Null, None), Value::Null);
}

#[test]
fn test_falsy_values_short_circuit() {
    assert_eq!(sanitize_value(&json!(0), None), json!(0));
    assert_eq!(sanitize_value(&json!(0.0), None), json!(0.0));
    assert_eq!(sanitize_value(&json!(false), None), json!(false));
    // The empty string is returned as-is, never sanitized.
    assert_eq!(sanitize_value(&json!(""), None), json!(""));
}

#[test]
fn test_empty_string_never_reaches_the_engine() {
    let engine = CountingEngine::default();
    let input = json!(["", "a", { "k": "", "v": "b" }]);
    let out = sanitize_value_with(&engine, &input);
    assert_eq!(out, input);
    // Only "a" and "b" are handed to the capability.
    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_default_options_strip_all_tags() {
    let out = sanitize_value(&json!("<b>x</b>"), None);
    assert_eq!(out, json!("x"));

    // Script bodies are removed entirely, not kept as text.
    let out = sanitize_value(&json!("<script>alert(1)</script>Hello"), None);
    assert_eq!(out, json!("Hello"));
}

#[test]
fn test_nested_structures_sanitize_only_string_leaves() {
    let input = json!({ "a": ["<b>x</b>", 2], "b": null });
    let out = sanitize_value(&input, None);
    assert_eq!(out, json!({ "a": ["x", 2], "b": null }));
}

#[test]
fn test_shape_is_preserved() {
    let input = json!({
        "z": "<i>one</i>",
        "a": [1, ["<u>two</u>", { "deep": "<s>three</s>" }], true],
        "m": { "y": "plain", "x": 9 },
    });
    let out = sanitize_value(&input, None);

    let (in_map, out_map) = (input.as_object().unwrap(), out.as_object().unwrap());
    // Same key set, same insertion order.
    let in_keys: Vec<&String> = in_map.keys().collect();
    let out_keys: Vec<&String> = out_map.keys().collect();
    assert_eq!(in_keys, out_keys);

    let inner_in: Vec<&String> = in_map["m"].as_object().unwrap().keys().collect();
    let inner_out: Vec<&String> = out_map["m"].as_object().unwrap().keys().collect();
    assert_eq!(inner_in, inner_out);

    // Same sequence length and order; non-strings untouched.
    let seq = out_map["a"].as_array().unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq[0], json!(1));
    assert_eq!(seq[1], json!(["two", { "deep": "three" }]));
    assert_eq!(seq[2], json!(true));
}

#[test]
fn test_per_call_white_list_override_is_honored() {
    let mut white_list = WhiteList::new();
    white_list.insert("b".to_string(), Vec::new());
    let options = SanitizeOptions::default().with_white_list(white_list);

    let input = json!("<b>keep</b> <i>drop</i>");
    let out = sanitize_value(&input, Some(&options));
    let text = out.as_str().unwrap();
    assert!(text.contains("<b>keep</b>"), "got: {text}");
    assert!(!text.contains("<i>"), "got: {text}");

    // The override is per-call: a following default call strips <b> again.
    let out = sanitize_value(&json!("<b>keep</b>"), None);
    assert_eq!(out, json!("keep"));
}

#[test]
fn test_custom_engine_plugs_into_the_traversal() {
    let input = json!({ "msg": "hi", "n": 7, "list": ["a", false] });
    let out = sanitize_value_with(&Redactor, &input);
    assert_eq!(
        out,
        json!({ "msg": "[REDACTED]", "n": 7, "list": ["[REDACTED]", false] })
    );
}

#[test]
fn test_in_place_agrees_with_copying_variant() {
    let input = json!({
        "title": "<script>alert(1)</script>ok",
        "items": ["<b>x</b>", 0, "", null],
        "flag": true,
    });
    let copied = sanitize_value(&input, None);
    let mut in_place = input.clone();
    sanitize_value_in_place(&mut in_place, None);
    assert_eq!(copied, in_place);
}

#[test]
fn test_input_is_never_mutated() {
    let input = json!({ "a": "<b>x</b>" });
    let snapshot = input.clone();
    let _ = sanitize_value(&input, None);
    assert_eq!(input, snapshot);
}

#[test]
fn test_typed_round_trip() -> Result<()> {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Comment {
        author: String,
        body: String,
        score: i64,
        pinned: bool,
    }

    let comment = Comment {
        author: "mallory".to_string(),
        body: "<script>alert(1)</script>nice post".to_string(),
        score: 3,
        pinned: false,
    };
    let cleaned = sanitize(&comment, None)?;
    assert_eq!(
        cleaned,
        Comment {
            author: "mallory".to_string(),
            body: "nice post".to_string(),
            score: 3,
            pinned: false,
        }
    );
    Ok(())
}

#[test]
fn test_empty_containers_are_not_falsy() {
    assert_eq!(sanitize_value(&json!([]), None), json!([]));
    assert_eq!(sanitize_value(&json!({}), None), json!({}));
}
