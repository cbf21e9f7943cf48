// datamask/src/options.rs
//! Configuration records for masking operations.
//!
//! Every knob is an explicit optional field; layering is explicit
//! field-by-field override resolution with a documented precedence:
//! built-in masker defaults < global config < per-field schema options <
//! explicit call-site options. Records are immutable per call; the engine
//! only ever merges them, never mutates them.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Closed enumeration of the semantic types the engine can classify and
/// mask. Used both as tokenizer output classification and as the dispatch
/// key for masking transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskableType {
    Email,
    Phone,
    Card,
    Address,
    Name,
    Ip,
    Jwt,
    Url,
    Generic,
}

impl MaskableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskableType::Email => "email",
            MaskableType::Phone => "phone",
            MaskableType::Card => "card",
            MaskableType::Address => "address",
            MaskableType::Name => "name",
            MaskableType::Ip => "ip",
            MaskableType::Jwt => "jwt",
            MaskableType::Url => "url",
            MaskableType::Generic => "generic",
        }
    }
}

impl fmt::Display for MaskableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-supplied full override: receives the trimmed value and produces
/// the masked output, bypassing every other option.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling a single masking operation.
///
/// Unset fields fall through to the next configuration layer and finally to
/// each masker's own defaults (mask char `*`, at most 4 mask characters,
/// nothing visible at either end unless the type says otherwise).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    /// Single replacement glyph (default `*`).
    pub mask_char: Option<char>,
    /// Cap on the length of a variable mask run.
    pub max_asterisks: Option<usize>,
    /// Characters preserved at the start of the value.
    pub visible_start: Option<usize>,
    /// Characters preserved at the end of the value.
    pub visible_end: Option<usize>,
    /// Forces a semantic type, skipping detection.
    pub mask_type: Option<MaskableType>,
    /// Infer the type from the value (default true).
    pub auto_detect: Option<bool>,
    /// Template string (`#` reveal, `*` mask, literals, `{n}` repeats).
    /// Takes precedence over every option except `transform`.
    pub pattern: Option<String>,
    /// Key for deterministic (HMAC) masking.
    pub secret: Option<String>,
    /// Full override function; highest precedence of all.
    #[serde(skip)]
    pub transform: Option<TransformFn>,
}

impl MaskOptions {
    /// Layers `over` on top of `self`: fields set in `over` win, everything
    /// else falls through.
    pub fn overlay(&self, over: &MaskOptions) -> MaskOptions {
        MaskOptions {
            mask_char: over.mask_char.or(self.mask_char),
            max_asterisks: over.max_asterisks.or(self.max_asterisks),
            visible_start: over.visible_start.or(self.visible_start),
            visible_end: over.visible_end.or(self.visible_end),
            mask_type: over.mask_type.or(self.mask_type),
            auto_detect: over.auto_detect.or(self.auto_detect),
            pattern: over.pattern.clone().or_else(|| self.pattern.clone()),
            secret: over.secret.clone().or_else(|| self.secret.clone()),
            transform: over.transform.clone().or_else(|| self.transform.clone()),
        }
    }
}

impl fmt::Debug for MaskOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskOptions")
            .field("mask_char", &self.mask_char)
            .field("max_asterisks", &self.max_asterisks)
            .field("visible_start", &self.visible_start)
            .field("visible_end", &self.visible_end)
            .field("mask_type", &self.mask_type)
            .field("auto_detect", &self.auto_detect)
            .field("pattern", &self.pattern)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Mapping from path expressions (dot segments, `*` wildcards, numeric
/// array indices) to the options applied at that location.
pub type MaskSchema = BTreeMap<String, MaskOptions>;

/// Interpretation of a [`MaskSchema`] during tree traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMode {
    /// Blocklist: only listed paths are redacted.
    Mask,
    /// Allowlist: everything except listed paths is redacted.
    Allow,
}

impl Default for SchemaMode {
    fn default() -> Self {
        SchemaMode::Mask
    }
}

/// Options for schema-driven tree masking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeMaskOptions {
    /// Traversal mode; call-site wins over global config, default `mask`.
    pub mode: Option<SchemaMode>,
    /// Options applied to every field masked in allow mode.
    pub default_mask: Option<MaskOptions>,
}

/// Options for heuristic auto-masking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoMaskOptions {
    /// Base masking options applied to everything the strategy redacts.
    #[serde(flatten)]
    pub mask: MaskOptions,
    /// Key names (case-insensitive substring match) redacted outright.
    pub sensitive_keys: Option<Vec<String>>,
    /// Semantic types that content-based detection is allowed to mask.
    pub auto_detect_types: Option<Vec<MaskableType>>,
}

/// Process-wide defaults, normally populated by an external configuration
/// layer and handed to [`crate::MaskEngine::with_config`]. Discovery and
/// loading of config files belongs to the host, not the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Mask options layered under every call's explicit options.
    pub mask_options: MaskOptions,
    /// Default schema mode when the call site does not pick one.
    pub mode: Option<SchemaMode>,
    /// Default sensitive-key list for the auto strategy.
    pub sensitive_keys: Option<Vec<String>>,
    /// Bypass the path/regex caches (compute fresh every call).
    pub disable_cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_prefers_upper_layer() {
        let base = MaskOptions {
            mask_char: Some('#'),
            max_asterisks: Some(5),
            ..Default::default()
        };
        let over = MaskOptions {
            mask_char: Some('$'),
            visible_start: Some(2),
            ..Default::default()
        };
        let merged = base.overlay(&over);
        assert_eq!(merged.mask_char, Some('$'));
        assert_eq!(merged.max_asterisks, Some(5));
        assert_eq!(merged.visible_start, Some(2));
        assert_eq!(merged.visible_end, None);
    }

    #[test]
    fn overlay_threads_pattern_and_secret() {
        let base = MaskOptions {
            secret: Some("k1".into()),
            ..Default::default()
        };
        let over = MaskOptions {
            pattern: Some("##-**".into()),
            ..Default::default()
        };
        let merged = base.overlay(&over);
        assert_eq!(merged.pattern.as_deref(), Some("##-**"));
        assert_eq!(merged.secret.as_deref(), Some("k1"));
    }

    #[test]
    fn maskable_type_serde_round_trip() {
        let json = serde_json::to_string(&MaskableType::Jwt).unwrap();
        assert_eq!(json, "\"jwt\"");
        let back: MaskableType = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(back, MaskableType::Email);
    }

    #[test]
    fn options_deserialize_from_schema_json() {
        let opts: MaskOptions =
            serde_json::from_str(r#"{"mask_type":"phone","visible_start":2,"visible_end":3}"#)
                .unwrap();
        assert_eq!(opts.mask_type, Some(MaskableType::Phone));
        assert_eq!(opts.visible_start, Some(2));
    }
}
