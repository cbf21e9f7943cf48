// datamask/src/paths.rs
//! Path expression normalization for the tree traversal strategies.
//!
//! Schema paths accept both dot and bracket notation; everything is rewritten
//! to plain dot-segments before traversal, so `users[*].email`,
//! `users.*.email` and `.users..*.email.` all address the same location.

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKET_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\*|\d+)\]").expect("built-in pattern must compile"));

static REPEATED_DOTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}").expect("built-in pattern must compile"));

/// Normalizes a path expression into canonical dot notation.
///
/// `[*]` and `[n]` bracket suffixes become `.*` / `.n` segments, runs of dots
/// collapse to one, and leading/trailing dots are stripped. Normalization is
/// idempotent: normalizing an already-normalized path is a no-op.
///
/// ```
/// use datamask::normalize_path;
/// assert_eq!(normalize_path("users[*].email"), "users.*.email");
/// assert_eq!(normalize_path("items[0].id"), "items.0.id");
/// ```
pub fn normalize_path(path: &str) -> String {
    let rewritten = BRACKET_SEGMENT.replace_all(path, ".${1}");
    let collapsed = REPEATED_DOTS.replace_all(&rewritten, ".");
    collapsed.trim_matches('.').to_string()
}

/// Splits a path expression into normalized segments, dropping empties.
pub fn split_path(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_bracket_notation() {
        assert_eq!(normalize_path("users[*].email"), "users.*.email");
        assert_eq!(normalize_path("cards[0].number"), "cards.0.number");
        assert_eq!(normalize_path("a[1][2].b"), "a.1.2.b");
    }

    #[test]
    fn strips_and_collapses_dots() {
        assert_eq!(normalize_path(".user..email."), "user.email");
        assert_eq!(normalize_path("...a...b..."), "a.b");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["users[*].email", ".a..b.", "plain.path", "", "[3]", "x"] {
            let once = normalize_path(raw);
            assert_eq!(normalize_path(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn splits_into_segments() {
        assert_eq!(split_path("groups[*].users[*].email"), vec!["groups", "*", "users", "*", "email"]);
        assert_eq!(split_path(""), Vec::<String>::new());
    }
}
