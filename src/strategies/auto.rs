// datamask/src/strategies/auto.rs
//! Heuristic traversal: no schema, redaction driven by key names and value
//! content.
//!
//! Key-based redaction takes precedence over content-based: a value under a
//! sensitive key is masked as generic before its content is ever examined.
//! String values under other keys run through the type classifier and are
//! masked when the detected type is in the auto-detect set.

use std::collections::HashSet;

use log::warn;
use regex::Regex;
use serde_json::Value;

use crate::classifier::detect_type;
use crate::engine::MaskEngine;
use crate::options::{AutoMaskOptions, MaskOptions, MaskableType};

/// Key names redacted outright (case-insensitive substring match).
pub(crate) const DEFAULT_SENSITIVE_KEYS: [&str; 15] = [
    "password",
    "secret",
    "token",
    "auth",
    "api_key",
    "apikey",
    "access_token",
    "refresh_token",
    "cvv",
    "cvc",
    "pin",
    "otp",
    "ssn",
    "social_security",
    "credit_card",
];

/// Types the content-based pass is allowed to mask. Address and name are
/// excluded by default: their detectors are too loose for arbitrary data.
pub(crate) const DEFAULT_DETECT_TYPES: [MaskableType; 5] = [
    MaskableType::Email,
    MaskableType::Phone,
    MaskableType::Card,
    MaskableType::Ip,
    MaskableType::Jwt,
];

pub(crate) fn apply(engine: &MaskEngine, target: &mut Value, options: &AutoMaskOptions) {
    let key_list: Vec<String> = options
        .sensitive_keys
        .clone()
        .or_else(|| engine.config().sensitive_keys.clone())
        .unwrap_or_else(|| DEFAULT_SENSITIVE_KEYS.iter().map(|k| k.to_string()).collect());

    let detect_types: HashSet<MaskableType> = options
        .auto_detect_types
        .clone()
        .unwrap_or_else(|| DEFAULT_DETECT_TYPES.to_vec())
        .into_iter()
        .collect();

    // One alternation over the whole key list, cached across calls.
    let cache_key = format!("keys:{}", key_list.join(","));
    let key_regex = engine.cached_regex(&cache_key, || {
        let escaped: Vec<String> = key_list.iter().map(|k| regex::escape(k)).collect();
        Regex::new(&format!("(?i){}", escaped.join("|")))
    });
    let Some(key_regex) = key_regex else {
        warn!("sensitive-key list failed to compile; skipping auto mask");
        return;
    };

    traverse(engine, target, &key_regex, &detect_types, &options.mask);
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn traverse(
    engine: &MaskEngine,
    current: &mut Value,
    key_regex: &Regex,
    detect_types: &HashSet<MaskableType>,
    base_options: &MaskOptions,
) {
    match current {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                // 1. Key name wins over content.
                if key_regex.is_match(key) {
                    if let Some(scalar) = scalar_to_string(value) {
                        let mut opts = base_options.clone();
                        opts.mask_type = Some(MaskableType::Generic);
                        *value = Value::String(engine.mask(&scalar, Some(&opts)));
                        continue;
                    }
                }

                // 2. Content-based detection for string values.
                if let Value::String(s) = value {
                    let detected = detect_type(s);
                    if detect_types.contains(&detected) {
                        let mut opts = base_options.clone();
                        opts.mask_type = Some(detected);
                        *value = Value::String(engine.mask(s, Some(&opts)));
                        continue;
                    }
                }

                // 3. Recurse into containers regardless.
                traverse(engine, value, key_regex, detect_types, base_options);
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Value::String(s) = item {
                    let detected = detect_type(s);
                    if detect_types.contains(&detected) {
                        let mut opts = base_options.clone();
                        opts.mask_type = Some(detected);
                        *item = Value::String(engine.mask(s, Some(&opts)));
                        continue;
                    }
                }
                traverse(engine, item, key_regex, detect_types, base_options);
            }
        }
        _ => {}
    }
}
