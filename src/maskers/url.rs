// datamask/src/maskers/url.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{mask_run, DEFAULT_MASK_CHAR};
use crate::options::MaskOptions;

/// Query keys treated as sensitive (case-insensitive substring match).
const SENSITIVE_QUERY_KEYS: [&str; 6] = ["token", "key", "password", "secret", "auth", "apikey"];

/// Masked query values are replaced by a fixed-width run so the original
/// length never leaks.
const QUERY_VALUE_MASK_LEN: usize = 8;

static QUERY_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([?&])([^=&#]+)=([^&#]*)").expect("built-in pattern must compile"));

/// Masks the values of sensitive query parameters in a URL, leaving the
/// scheme, host, path, and non-sensitive parameters intact. Strings without
/// an http/https scheme pass through unchanged.
pub fn mask_url(url: &str, options: &MaskOptions) -> String {
    if url.is_empty() {
        return String::new();
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return url.to_string();
    }

    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    QUERY_PAIR
        .replace_all(url, |caps: &Captures| {
            let key = &caps[2];
            let lowered = key.to_ascii_lowercase();
            if SENSITIVE_QUERY_KEYS.iter().any(|k| lowered.contains(k)) {
                format!("{}{}={}", &caps[1], key, mask_run(mask_char, QUERY_VALUE_MASK_LEN))
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_sensitive_params_only() {
        let masked = mask_url(
            "https://api.example.com/v1/login?token=abc12345&user=admin",
            &MaskOptions::default(),
        );
        assert_eq!(masked, "https://api.example.com/v1/login?token=********&user=admin");
    }

    #[test]
    fn key_match_is_substring_and_case_insensitive() {
        let masked = mask_url(
            "https://a.io?Api_Key=v1&refresh_token=v2&page=3",
            &MaskOptions::default(),
        );
        assert_eq!(masked, "https://a.io?Api_Key=********&refresh_token=********&page=3");
    }

    #[test]
    fn non_url_passes_through() {
        assert_eq!(mask_url("not a url", &MaskOptions::default()), "not a url");
    }

    #[test]
    fn url_without_query_is_untouched() {
        assert_eq!(
            mask_url("https://example.com/path", &MaskOptions::default()),
            "https://example.com/path"
        );
    }
}
