// datamask/src/strategies/mask.rs
//! Blocklist traversal: only the paths listed in the schema are redacted.

use serde_json::Value;

use crate::engine::MaskEngine;
use crate::options::{MaskOptions, MaskSchema};

/// Applies each schema entry to the (already cloned) tree. Missing
/// intermediate paths are silently skipped.
pub(crate) fn apply(engine: &MaskEngine, target: &mut Value, schema: &MaskSchema) {
    for (path, options) in schema {
        let segments = engine.cached_segments(path);
        descend(engine, target, &segments, 0, options);
    }
}

fn descend(
    engine: &MaskEngine,
    current: &mut Value,
    segments: &[String],
    depth: usize,
    options: &MaskOptions,
) {
    // Terminal: every segment consumed. Only string values are rewritten.
    if depth == segments.len() {
        if let Value::String(s) = current {
            *current = Value::String(engine.mask(s, Some(options)));
        }
        return;
    }

    let segment = &segments[depth];

    // Wildcards fan out over every array element or object value.
    if segment == "*" {
        match current {
            Value::Array(items) => {
                for item in items {
                    descend(engine, item, segments, depth + 1, options);
                }
            }
            Value::Object(map) => {
                for (_, value) in map.iter_mut() {
                    descend(engine, value, segments, depth + 1, options);
                }
            }
            _ => {}
        }
        return;
    }

    // Arrays accept numeric segments only.
    if let Value::Array(items) = current {
        if let Ok(index) = segment.parse::<usize>() {
            if let Some(item) = items.get_mut(index) {
                descend(engine, item, segments, depth + 1, options);
            }
        }
        return;
    }

    if let Value::Object(map) = current {
        if let Some(next) = map.get_mut(segment) {
            descend(engine, next, segments, depth + 1, options);
        }
    }
}
