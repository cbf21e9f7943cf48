// datamask/src/strategies/allow.rs
//! Allowlist traversal: everything except the schema's paths is redacted.
//!
//! The schema's paths compile into one anchored alternation: `.` escaped,
//! `*` segments mapped to a single-segment character class, so wildcards
//! match exactly one level, never recursively. The compiled regex is
//! cached under a fingerprint of the sorted path set.

use log::warn;
use regex::Regex;
use serde_json::Value;

use crate::engine::MaskEngine;
use crate::options::{MaskOptions, MaskSchema};
use crate::paths::normalize_path;

pub(crate) fn apply(
    engine: &MaskEngine,
    target: &mut Value,
    schema: &MaskSchema,
    default_mask: &MaskOptions,
) {
    // BTreeMap keys are already sorted, so the fingerprint is stable.
    let fingerprint = format!(
        "allow:{}",
        schema.keys().map(String::as_str).collect::<Vec<_>>().join("|")
    );
    let allow_regex = engine.cached_regex(&fingerprint, || {
        let alternatives: Vec<String> = schema
            .keys()
            .map(|path| {
                let normalized = normalize_path(path);
                format!("^{}$", regex::escape(&normalized).replace(r"\*", "[^.]+"))
            })
            .collect();
        Regex::new(&alternatives.join("|"))
    });
    let Some(allow_regex) = allow_regex else {
        // Fail open: without a usable allowlist we leave the tree as-is
        // rather than guess at what should survive.
        warn!("allow schema failed to compile; leaving tree unmasked");
        return;
    };

    match target {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                visit(engine, value, key.clone(), &allow_regex, default_mask);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter_mut().enumerate() {
                visit(engine, value, index.to_string(), &allow_regex, default_mask);
            }
        }
        _ => {}
    }
}

fn visit(
    engine: &MaskEngine,
    value: &mut Value,
    path: String,
    allow_regex: &Regex,
    default_mask: &MaskOptions,
) {
    // An allowed path keeps its entire subtree.
    if allow_regex.is_match(&path) {
        return;
    }

    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                visit(engine, child, format!("{path}.{key}"), allow_regex, default_mask);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                visit(engine, child, format!("{path}.{index}"), allow_regex, default_mask);
            }
        }
        Value::String(s) => {
            *value = Value::String(engine.mask(s, Some(default_mask)));
        }
        Value::Number(n) => {
            let masked = engine.mask(&n.to_string(), Some(default_mask));
            *value = Value::String(masked);
        }
        Value::Bool(b) => {
            let masked = engine.mask(&b.to_string(), Some(default_mask));
            *value = Value::String(masked);
        }
        Value::Null => {}
    }
}
