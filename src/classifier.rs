// datamask/src/classifier.rs
//! The type-detection cascade.
//!
//! Anchored patterns are applied in a fixed priority order; the first match
//! decides the semantic type of an isolated value. Ordering resolves
//! ambiguity: a 16-digit string is a card before it could loosely read as a
//! phone number, and a dotted JWT wins over URL-shaped false positives.
//! Address and name detection are heuristic (any two-word capitalized
//! phrase can classify as a name), so downstream callers treat the result
//! as best effort, never as a PII guarantee.

use crate::options::MaskableType;
use crate::patterns;

/// Classifies an isolated string value. Never fails: anything unmatched is
/// [`MaskableType::Generic`].
pub fn detect_type(value: &str) -> MaskableType {
    let v = value.trim();
    if v.is_empty() {
        return MaskableType::Generic;
    }
    if patterns::EMAIL_EXACT.is_match(v) {
        return MaskableType::Email;
    }
    if patterns::PHONE_EXACT.is_match(v) {
        return MaskableType::Phone;
    }
    if patterns::CARD_EXACT.is_match(v) {
        return MaskableType::Card;
    }
    if patterns::IPV4_EXACT.is_match(v) || patterns::IPV6_EXACT.is_match(v) {
        return MaskableType::Ip;
    }
    if patterns::JWT_EXACT.is_match(v) {
        return MaskableType::Jwt;
    }
    if patterns::URL_EXACT.is_match(v) {
        return MaskableType::Url;
    }
    // An address needs both the leading-number shape and a street suffix.
    if patterns::ADDRESS_EXACT.is_match(v) && patterns::ADDRESS_SUFFIX.is_match(v) {
        return MaskableType::Address;
    }
    // A name is letters/space/dot/apostrophe/dash with at least one space.
    if patterns::NAME_CHARS.is_match(v) && v.contains(' ') {
        return MaskableType::Name;
    }
    MaskableType::Generic
}
