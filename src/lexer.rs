// datamask/src/lexer.rs
//! Single-pass tokenizer for free-form text.
//!
//! All token patterns are OR-ed into one master alternation, each wrapped in
//! a named capture group; one scan over the input yields an ordered stream
//! of typed spans and the plain-text gaps between them. The token stream is
//! a lossless partition: concatenating token values in order reconstructs
//! the input byte-for-byte.
//!
//! Pattern order matters. The master regex uses leftmost-first alternation,
//! so patterns declared earlier claim ambiguous overlaps; JWT and URL must
//! come before the numeric patterns.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::options::MaskableType;
use crate::patterns;

/// Classification of a tokenized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// Plain text between sensitive spans.
    Text,
    Jwt,
    Url,
    Email,
    Ip,
    Card,
    Phone,
}

impl TokenKind {
    /// Capture group name inside the master alternation.
    fn group_name(&self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Jwt => "jwt",
            TokenKind::Url => "url",
            TokenKind::Email => "email",
            TokenKind::Ip => "ip",
            TokenKind::Card => "card",
            TokenKind::Phone => "phone",
        }
    }

    /// Maps a typed token onto the masking dispatch key. `Text` has none.
    pub fn maskable_type(&self) -> Option<MaskableType> {
        match self {
            TokenKind::Text => None,
            TokenKind::Jwt => Some(MaskableType::Jwt),
            TokenKind::Url => Some(MaskableType::Url),
            TokenKind::Email => Some(MaskableType::Email),
            TokenKind::Ip => Some(MaskableType::Ip),
            TokenKind::Card => Some(MaskableType::Card),
            TokenKind::Phone => Some(MaskableType::Phone),
        }
    }
}

/// A classified span of the source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact substring of the source.
    pub value: String,
    /// Byte offset of the span's start in the source.
    pub index: usize,
}

/// Declaration order defines alternation priority in the master regex.
const TOKEN_PATTERNS: [(TokenKind, &str); 6] = [
    (TokenKind::Jwt, patterns::JWT_SRC),
    (TokenKind::Url, patterns::URL_SRC),
    (TokenKind::Email, patterns::EMAIL_SRC),
    (TokenKind::Ip, patterns::IPV4_SRC),
    (TokenKind::Card, patterns::CARD_SRC),
    (TokenKind::Phone, patterns::PHONE_SRC),
];

static MASTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = TOKEN_PATTERNS
        .iter()
        .map(|(kind, src)| format!("(?P<{}>{})", kind.group_name(), src))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("master token pattern must compile")
});

/// Scans the input in a single pass and produces an ordered token stream.
///
/// Gaps between matches are emitted as [`TokenKind::Text`] tokens, so the
/// stream partitions the input exactly. Each call computes fresh tokens; the
/// compiled master regex is shared process-wide.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for caps in MASTER_REGEX.captures_iter(input) {
        let Some(m) = caps.get(0) else { continue };

        if m.start() > last_end {
            tokens.push(Token {
                kind: TokenKind::Text,
                value: input[last_end..m.start()].to_string(),
                index: last_end,
            });
        }

        let kind = TOKEN_PATTERNS
            .iter()
            .find(|(kind, _)| caps.name(kind.group_name()).is_some())
            .map(|(kind, _)| *kind)
            .unwrap_or(TokenKind::Text);

        tokens.push(Token {
            kind,
            value: m.as_str().to_string(),
            index: m.start(),
        });
        last_end = m.end();
    }

    if last_end < input.len() {
        tokens.push(Token {
            kind: TokenKind::Text,
            value: input[last_end..].to_string(),
            index: last_end,
        });
    }

    tokens
}
