// datamask/src/maskers/mod.rs
//! Format-preserving masking transforms, one per semantic type.
//!
//! Every masker is a pure function `(value, options) -> String` that keeps
//! the recognisable shape of the value (separators, extension, grouping)
//! while capping the variable masked portion at `max_asterisks`. All of
//! them are fail-open: malformed input comes back unchanged or with a
//! best-effort generic mask, never an error.
//!
//! Dispatch goes through [`MaskerRegistry`], so a host can override the
//! transform for any type without touching the engine.
//!
//! License: MIT OR Apache-2.0

mod address;
mod card;
mod deterministic;
mod email;
mod generic;
mod ip;
mod jwt;
mod name;
mod pattern;
mod phone;
mod url;

pub use address::mask_address;
pub use card::mask_card;
pub use deterministic::mask_deterministic;
pub use email::mask_email;
pub use generic::mask_generic;
pub use ip::mask_ip;
pub use jwt::mask_jwt;
pub use name::mask_name;
pub use pattern::mask_pattern;
pub use phone::mask_phone;
pub use url::mask_url;

use std::collections::HashMap;

use crate::options::{MaskOptions, MaskableType};

/// Shared default for the replacement glyph.
pub(crate) const DEFAULT_MASK_CHAR: char = '*';

/// Shared default cap on variable-length mask runs.
pub(crate) const DEFAULT_MAX_ASTERISKS: usize = 4;

pub(crate) fn mask_run(mask_char: char, count: usize) -> String {
    std::iter::repeat(mask_char).take(count).collect()
}

/// Signature shared by every registered masking transform.
pub type MaskerFn = Box<dyn Fn(&str, &MaskOptions) -> String + Send + Sync>;

/// Maps semantic types to their masking transforms.
///
/// Types without a registered masker fall back at dispatch time:
/// deterministic masking when a secret is configured, generic otherwise.
pub struct MaskerRegistry {
    maskers: HashMap<MaskableType, MaskerFn>,
}

impl MaskerRegistry {
    /// An empty registry. Most callers want [`MaskerRegistry::with_defaults`].
    pub fn new() -> Self {
        Self { maskers: HashMap::new() }
    }

    /// Registry pre-populated with the standard transform for every
    /// specialized type. `generic` stays unregistered so the fallback path
    /// (deterministic-if-keyed, else generic) applies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MaskableType::Email, |v, o| mask_email(v, o));
        registry.register(MaskableType::Phone, |v, o| mask_phone(v, o));
        registry.register(MaskableType::Card, |v, o| mask_card(v, o));
        registry.register(MaskableType::Ip, |v, _| mask_ip(v));
        registry.register(MaskableType::Jwt, |v, o| mask_jwt(v, o));
        registry.register(MaskableType::Url, |v, o| mask_url(v, o));
        registry.register(MaskableType::Address, |v, o| mask_address(v, o));
        registry.register(MaskableType::Name, |v, o| mask_name(v, o));
        registry
    }

    /// Registers (or replaces) the transform dispatched for `mask_type`.
    pub fn register<F>(&mut self, mask_type: MaskableType, masker: F)
    where
        F: Fn(&str, &MaskOptions) -> String + Send + Sync + 'static,
    {
        self.maskers.insert(mask_type, Box::new(masker));
    }

    pub fn get(&self, mask_type: MaskableType) -> Option<&MaskerFn> {
        self.maskers.get(&mask_type)
    }

    pub fn contains(&self, mask_type: MaskableType) -> bool {
        self.maskers.contains_key(&mask_type)
    }
}

impl Default for MaskerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
