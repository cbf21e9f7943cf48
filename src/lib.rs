// datamask/src/lib.rs
//! # Datamask
//!
//! `datamask` provides format-preserving masking for personally identifiable
//! information. It classifies values by shape (emails, phone numbers, card
//! numbers, IP addresses, JWTs, URLs, addresses, names), masks them while
//! keeping their recognizable structure, extracts and masks sensitive spans
//! embedded in free text, and walks nested data trees under blocklist,
//! allowlist, or heuristic strategies.
//!
//! The library is fail-open: no operation panics or errors on
//! malformed input. A value that cannot be classified is masked generically,
//! and a schema path that does not resolve is skipped. Partial redaction of
//! a log line beats aborting it.
//!
//! ## Modules
//!
//! * `options`: Defines [`MaskOptions`], [`MaskableType`], schemas, and global configuration.
//! * `classifier`: Whole-value type inference via [`detect_type`].
//! * `lexer`: A single-pass tokenizer for free text, via [`tokenize`].
//! * `maskers`: Per-type format-preserving maskers and the [`MaskerRegistry`].
//! * `engine`: The [`MaskEngine`] context tying registry, caches, and configuration together.
//! * `paths`: Dot/bracket path normalization for schema keys.
//! * `cache`: The bounded FIFO cache backing path and regex lookups.
//!
//! ## Public API
//!
//! Most callers use the free functions, which share a process-wide default
//! engine:
//!
//! * [`mask`]: Masks a single value, inferring its type unless told otherwise.
//! * [`smart_mask`]: Finds and masks sensitive spans inside free text.
//! * [`mask_sensitive_fields`]: Schema-driven masking of a nested data tree.
//! * [`auto_mask`]: Heuristic masking of a nested data tree by key names and value shapes.
//! * [`pattern`]: Template-based masking (`#` reveals, `*` masks, `{n}` repeats).
//!
//! Callers that need their own configuration or custom maskers construct a
//! [`MaskEngine`] instead; every free function has an engine method of the
//! same name.
//!
//! ## Example
//!
//! ```
//! use datamask::{mask, smart_mask};
//!
//! assert_eq!(mask("john.doe@example.com", None), "****@***.com");
//! assert_eq!(
//!     smart_mask("User john.doe@example.com logged in", None),
//!     "User ****@***.com logged in",
//! );
//! ```
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use serde_json::Value;

pub mod cache;
pub mod classifier;
pub mod engine;
pub mod lexer;
pub mod maskers;
pub mod options;
pub mod paths;

mod patterns;
mod strategies;

pub use cache::BoundedCache;
pub use classifier::detect_type;
pub use engine::MaskEngine;
pub use lexer::{tokenize, Token, TokenKind};
pub use maskers::{
    mask_address, mask_card, mask_deterministic, mask_email, mask_generic, mask_ip, mask_jwt,
    mask_name, mask_pattern, mask_phone, mask_url, MaskerRegistry,
};
pub use options::{
    AutoMaskOptions, GlobalConfig, MaskOptions, MaskSchema, MaskableType, SchemaMode,
    TransformFn, TreeMaskOptions,
};
pub use paths::{normalize_path, split_path};

/// The process-wide engine behind the free functions. Default configuration,
/// standard maskers.
static DEFAULT_ENGINE: Lazy<MaskEngine> = Lazy::new(MaskEngine::new);

/// The shared default engine. Useful for callers that want engine methods
/// without constructing their own instance.
pub fn default_engine() -> &'static MaskEngine {
    &DEFAULT_ENGINE
}

/// Masks a single value with the default engine. See [`MaskEngine::mask`].
pub fn mask(value: &str, options: Option<&MaskOptions>) -> String {
    DEFAULT_ENGINE.mask(value, options)
}

/// Masks sensitive spans inside free text with the default engine. See
/// [`MaskEngine::smart_mask`].
pub fn smart_mask(text: &str, options: Option<&MaskOptions>) -> String {
    DEFAULT_ENGINE.smart_mask(text, options)
}

/// Schema-driven masking of a nested data tree with the default engine. See
/// [`MaskEngine::mask_sensitive_fields`].
pub fn mask_sensitive_fields(
    data: &Value,
    schema: &MaskSchema,
    options: Option<&TreeMaskOptions>,
) -> Value {
    DEFAULT_ENGINE.mask_sensitive_fields(data, schema, options)
}

/// Heuristic masking of a nested data tree with the default engine. See
/// [`MaskEngine::auto_mask`].
pub fn auto_mask(data: &Value, options: Option<&AutoMaskOptions>) -> Value {
    DEFAULT_ENGINE.auto_mask(data, options)
}

/// Template-based masking with the default engine. See
/// [`MaskEngine::pattern`].
pub fn pattern(value: &str, template: &str, options: Option<&MaskOptions>) -> String {
    DEFAULT_ENGINE.pattern(value, template, options)
}
