// datamask/src/engine.rs
//! The masking engine: an explicit context object owning the masker
//! registry, the two bounded caches, and the global configuration.
//!
//! Every public operation is a synchronous, bounded computation over its
//! input. The engine is internally synchronized (`RwLock` around both
//! caches), so a shared instance can be called from multiple threads; cache
//! population is idempotent, so racing writers merely recompute.
//!
//! The whole surface is fail-open: when in doubt an operation returns its
//! input unmodified or applies the most generic masking, never an error.
//!
//! License: MIT OR Apache-2.0

use std::sync::RwLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::cache::{BoundedCache, PATH_CACHE_CAPACITY, REGEX_CACHE_CAPACITY};
use crate::classifier::detect_type;
use crate::lexer::tokenize;
use crate::maskers::{self, MaskerRegistry};
use crate::options::{
    AutoMaskOptions, GlobalConfig, MaskOptions, MaskSchema, MaskableType, SchemaMode,
    TreeMaskOptions,
};
use crate::paths::split_path;
use crate::strategies;

pub struct MaskEngine {
    registry: MaskerRegistry,
    config: GlobalConfig,
    path_cache: RwLock<BoundedCache<String, Vec<String>>>,
    regex_cache: RwLock<BoundedCache<String, Regex>>,
}

impl MaskEngine {
    /// An engine with the standard maskers and default configuration.
    pub fn new() -> Self {
        Self::with_config(GlobalConfig::default())
    }

    /// An engine layered on top of externally loaded global configuration.
    pub fn with_config(config: GlobalConfig) -> Self {
        Self {
            registry: MaskerRegistry::with_defaults(),
            config,
            path_cache: RwLock::new(BoundedCache::new(PATH_CACHE_CAPACITY)),
            regex_cache: RwLock::new(BoundedCache::new(REGEX_CACHE_CAPACITY)),
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Replaces the transform dispatched for `mask_type`.
    pub fn register_masker<F>(&mut self, mask_type: MaskableType, masker: F)
    where
        F: Fn(&str, &MaskOptions) -> String + Send + Sync + 'static,
    {
        self.registry.register(mask_type, masker);
    }

    /// Global config sits under the call-site options.
    fn effective_options(&self, options: Option<&MaskOptions>) -> MaskOptions {
        match options {
            Some(opts) => self.config.mask_options.overlay(opts),
            None => self.config.mask_options.clone(),
        }
    }

    /// Masks a single value.
    ///
    /// Precedence: a `transform` override wins outright, then a `pattern`
    /// template, then an explicitly forced type; otherwise the type is
    /// inferred (unless `auto_detect` is false, which forces generic).
    pub fn mask(&self, value: &str, options: Option<&MaskOptions>) -> String {
        if value.is_empty() {
            return String::new();
        }
        let options = self.effective_options(options);
        let trimmed = value.trim();

        if let Some(transform) = &options.transform {
            return transform(trimmed);
        }
        if let Some(template) = &options.pattern {
            return maskers::mask_pattern(trimmed, template, &options);
        }
        if let Some(mask_type) = options.mask_type {
            return self.mask_by_type(trimmed, mask_type, &options);
        }
        if options.auto_detect.unwrap_or(true) {
            let inferred = detect_type(trimmed);
            return self.mask_by_type(trimmed, inferred, &options);
        }
        maskers::mask_generic(trimmed, &options)
    }

    fn mask_by_type(&self, value: &str, mask_type: MaskableType, options: &MaskOptions) -> String {
        if let Some(masker) = self.registry.get(mask_type) {
            return masker(value, options);
        }
        // Unregistered type: deterministic when keyed, generic otherwise.
        if options.secret.is_some() {
            return maskers::mask_deterministic(value, options);
        }
        maskers::mask_generic(value, options)
    }

    /// Tokenizes free text and masks the sensitive spans, preserving every
    /// non-sensitive span exactly.
    pub fn smart_mask(&self, text: &str, options: Option<&MaskOptions>) -> String {
        let mut out = String::with_capacity(text.len());
        for token in tokenize(text) {
            match token.kind.maskable_type() {
                None => out.push_str(&token.value),
                Some(mask_type) => {
                    let mut opts = options.cloned().unwrap_or_default();
                    opts.mask_type = Some(mask_type);
                    opts.auto_detect = Some(false);
                    out.push_str(&self.mask(&token.value, Some(&opts)));
                }
            }
        }
        out
    }

    /// Schema-driven masking of a nested data tree. Returns a masked clone;
    /// the input is never mutated. Primitive roots come back unchanged.
    pub fn mask_sensitive_fields(
        &self,
        data: &Value,
        schema: &MaskSchema,
        options: Option<&TreeMaskOptions>,
    ) -> Value {
        let mut clone = data.clone();
        if !clone.is_object() && !clone.is_array() {
            return clone;
        }

        // Mode: call site > global config > blocklist default.
        let mode = options
            .and_then(|o| o.mode)
            .or(self.config.mode)
            .unwrap_or_default();

        match mode {
            SchemaMode::Allow => {
                let call_site_default = options.and_then(|o| o.default_mask.as_ref());
                let default_mask = match call_site_default {
                    Some(over) => self.config.mask_options.overlay(over),
                    None => self.config.mask_options.clone(),
                };
                strategies::allow::apply(self, &mut clone, schema, &default_mask);
            }
            SchemaMode::Mask => strategies::mask::apply(self, &mut clone, schema),
        }
        clone
    }

    /// Heuristic masking of a nested data tree. Returns a masked clone.
    pub fn auto_mask(&self, data: &Value, options: Option<&AutoMaskOptions>) -> Value {
        let mut clone = data.clone();
        if !clone.is_object() && !clone.is_array() {
            return clone;
        }
        let mut effective = options.cloned().unwrap_or_default();
        effective.mask = self.config.mask_options.overlay(&effective.mask);
        strategies::auto::apply(self, &mut clone, &effective);
        clone
    }

    /// Template-based masking (`#` reveal, `*` mask, `{n}` repeats).
    pub fn pattern(&self, value: &str, template: &str, options: Option<&MaskOptions>) -> String {
        let options = self.effective_options(options);
        maskers::mask_pattern(value, template, &options)
    }

    /// Parsed path segments, cached unless caching is disabled.
    pub(crate) fn cached_segments(&self, path: &str) -> Vec<String> {
        if self.config.disable_cache {
            return split_path(path);
        }
        if let Ok(cache) = self.path_cache.read() {
            if let Some(hit) = cache.get(&path.to_string()) {
                return hit.clone();
            }
        }
        let segments = split_path(path);
        if let Ok(mut cache) = self.path_cache.write() {
            debug!("caching segments for path {path:?}");
            cache.insert(path.to_string(), segments.clone());
        }
        segments
    }

    /// A compiled regex for `key`, cached unless caching is disabled.
    /// Compilation failures are fail-open: the caller gets `None` and is
    /// expected to skip the operation rather than error out.
    pub(crate) fn cached_regex(
        &self,
        key: &str,
        build: impl FnOnce() -> Result<Regex, regex::Error>,
    ) -> Option<Regex> {
        if self.config.disable_cache {
            return build().ok();
        }
        if let Ok(cache) = self.regex_cache.read() {
            if let Some(hit) = cache.get(&key.to_string()) {
                return Some(hit.clone());
            }
        }
        let regex = build().ok()?;
        if let Ok(mut cache) = self.regex_cache.write() {
            debug!("caching compiled regex for key {key:?}");
            cache.insert(key.to_string(), regex.clone());
        }
        Some(regex)
    }

    #[cfg(test)]
    pub(crate) fn regex_cache_len(&self) -> usize {
        self.regex_cache.read().map(|c| c.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn path_cache_len(&self) -> usize {
        self.path_cache.read().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MaskEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn transform_overrides_everything() {
        let engine = MaskEngine::new();
        let opts = MaskOptions {
            transform: Some(Arc::new(|v: &str| v.to_uppercase())),
            mask_type: Some(MaskableType::Email),
            pattern: Some("##".into()),
            ..Default::default()
        };
        assert_eq!(engine.mask("abc", Some(&opts)), "ABC");
    }

    #[test]
    fn pattern_beats_forced_type() {
        let engine = MaskEngine::new();
        let opts = MaskOptions {
            pattern: Some("##-**".into()),
            mask_type: Some(MaskableType::Email),
            ..Default::default()
        };
        assert_eq!(engine.mask("abcd", Some(&opts)), "ab-**");
    }

    #[test]
    fn auto_detect_false_forces_generic() {
        let engine = MaskEngine::new();
        let opts = MaskOptions {
            auto_detect: Some(false),
            ..Default::default()
        };
        assert_eq!(engine.mask("john.doe@example.com", Some(&opts)), "****");
    }

    #[test]
    fn global_config_sits_under_call_site_options() {
        let engine = MaskEngine::with_config(GlobalConfig {
            mask_options: MaskOptions {
                mask_char: Some('#'),
                ..Default::default()
            },
            ..Default::default()
        });
        // Global '#' applies when the call site is silent...
        assert!(engine
            .mask("secret-value", Some(&MaskOptions { mask_type: Some(MaskableType::Generic), ..Default::default() }))
            .contains('#'));
        // ...and the call site wins when it speaks.
        let masked = engine.mask(
            "secret-value",
            Some(&MaskOptions {
                mask_type: Some(MaskableType::Generic),
                mask_char: Some('$'),
                ..Default::default()
            }),
        );
        assert!(masked.contains('$') && !masked.contains('#'));
    }

    #[test]
    fn registered_masker_replaces_dispatch() {
        let mut engine = MaskEngine::new();
        engine.register_masker(MaskableType::Email, |_, _| "[EMAIL]".to_string());
        let opts = MaskOptions {
            mask_type: Some(MaskableType::Email),
            ..Default::default()
        };
        assert_eq!(engine.mask("a@b.com", Some(&opts)), "[EMAIL]");
    }

    #[test]
    fn generic_with_secret_goes_deterministic() {
        let engine = MaskEngine::new();
        let opts = MaskOptions {
            mask_type: Some(MaskableType::Generic),
            secret: Some("k".into()),
            ..Default::default()
        };
        let masked = engine.mask("value", Some(&opts));
        assert_eq!(masked.len(), 12);
        assert!(masked.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test_log::test]
    fn disabled_cache_still_computes() {
        let engine = MaskEngine::with_config(GlobalConfig {
            disable_cache: true,
            ..Default::default()
        });
        assert_eq!(engine.cached_segments("a[0].b"), vec!["a", "0", "b"]);
        assert_eq!(engine.path_cache_len(), 0);
        assert!(engine.cached_regex("k", || Regex::new("x")).is_some());
        assert_eq!(engine.regex_cache_len(), 0);
    }

    #[test_log::test]
    fn caches_populate_on_miss() {
        let engine = MaskEngine::new();
        engine.cached_segments("users[*].email");
        assert_eq!(engine.path_cache_len(), 1);
        engine.cached_regex("k", || Regex::new("x"));
        engine.cached_regex("k", || unreachable!("second lookup must hit the cache"));
        assert_eq!(engine.regex_cache_len(), 1);
    }
}
