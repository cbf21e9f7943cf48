// datamask/src/patterns.rs
//! Single source of truth for every regular expression used across the crate.
//!
//! The classifier, the tokenizer, and several maskers all consume these
//! patterns; keeping them in one place guarantees that what gets detected is
//! exactly what gets masked. Sources are stored as plain `&str` so the
//! tokenizer can splice them into one master alternation, while the anchored
//! `Lazy<Regex>` statics serve the whole-string classification cascade.
//!
//! All patterns use bounded repetition and no look-around, so they are safe
//! from catastrophic backtracking under the `regex` crate's guarantees.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard email addresses (`local@domain.tld`).
pub(crate) const EMAIL_SRC: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// IPv4 addresses: four groups of 1-3 digits separated by dots.
pub(crate) const IPV4_SRC: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";

/// IPv6 addresses (simplified): hex groups separated by colons, including
/// the trailing-`::` and compressed forms.
pub(crate) const IPV6_SRC: &str = r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|(?:[0-9a-fA-F]{1,4}:){1,7}:|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}";

/// Payment card numbers: 13-19 digits with optional space/dash separators.
/// Word boundaries keep timestamps and long IDs from matching.
pub(crate) const CARD_SRC: &str = r"\b(?:\d[ -]*?){13,19}\b";

/// International phone numbers (`+1-555-012-3456`, `(555) 123-4567`).
/// Requires at least ten digits so small numbers stay untouched.
pub(crate) const PHONE_SRC: &str = r"\b(?:\+?\d{1,3})?[-. (]*\d{3}[-. )]*\d{3}[-. ]*\d{4}(?: *x\d+)?\b";

/// JSON Web Tokens: `ey`-prefixed header, payload, signature.
pub(crate) const JWT_SRC: &str = r"ey[A-Za-z0-9_=-]+\.[A-Za-z0-9_=-]+\.[A-Za-z0-9_.+/=-]+";

/// URLs with an explicit http/https scheme.
pub(crate) const URL_SRC: &str = r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)";

fn exact(source: &str) -> Regex {
    // Word boundaries only matter when scanning inside larger text. In the
    // anchored variants they are redundant, and a leading `\b` would reject
    // values starting with a non-word character such as `+`.
    let unbounded = source.replace(r"\b", "");
    Regex::new(&format!("^(?:{unbounded})$")).expect("built-in pattern must compile")
}

/// Anchored variants used by the type classifier. The cascade tests these
/// against the whole (trimmed) value, so partial matches never classify.
pub(crate) static EMAIL_EXACT: Lazy<Regex> = Lazy::new(|| exact(EMAIL_SRC));
pub(crate) static IPV4_EXACT: Lazy<Regex> = Lazy::new(|| exact(IPV4_SRC));
pub(crate) static IPV6_EXACT: Lazy<Regex> = Lazy::new(|| exact(IPV6_SRC));
pub(crate) static CARD_EXACT: Lazy<Regex> = Lazy::new(|| exact(CARD_SRC));
pub(crate) static PHONE_EXACT: Lazy<Regex> = Lazy::new(|| exact(PHONE_SRC));
pub(crate) static JWT_EXACT: Lazy<Regex> = Lazy::new(|| exact(JWT_SRC));
pub(crate) static URL_EXACT: Lazy<Regex> = Lazy::new(|| exact(URL_SRC));

/// General shape of a street address: leading house number, then words.
pub(crate) static ADDRESS_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s+[\w\s,.-]+$").expect("built-in pattern must compile"));

/// Known street-suffix keywords. Required in addition to [`ADDRESS_EXACT`]
/// to cut down false positives on arbitrary "number words" strings.
pub(crate) static ADDRESS_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:road|street|st|rd|ave|lane|close|way|boulevard|crescent)")
        .expect("built-in pattern must compile")
});

/// Valid characters for a personal name: letters, whitespace, dot,
/// apostrophe, dash. Combined with a contains-space check so single words
/// never classify as names.
pub(crate) static NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s.'-]+$").expect("built-in pattern must compile"));
