// datamask/src/maskers/phone.rs

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

/// Masks a phone number, keeping `visible_start` leading and `visible_end`
/// trailing digits.
///
/// A leading `+` survives only when `visible_start > 0`; otherwise it is
/// masked away with the rest. Numbers too short to honor both windows fall
/// back to "keep the first digit, mask the rest".
///
/// `"+2348012345678"` with defaults becomes `"+23****678"`.
pub fn mask_phone(phone: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);
    let visible_start = options.visible_start.unwrap_or(2);
    let visible_end = options.visible_end.unwrap_or(3);

    if phone.is_empty() {
        return String::new();
    }

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return phone.to_string();
    }

    let keep_plus = phone.starts_with('+') && visible_start > 0;
    let prefix = if keep_plus { "+" } else { "" };
    let len = digits.len();

    // Short numbers: keep the first digit, mask the remainder up to the cap.
    if len <= visible_start + visible_end {
        let masked = mask_run(mask_char, max_asterisks.min(len - 1));
        return format!("{prefix}{}{masked}", &digits[..1]);
    }

    let start = &digits[..visible_start];
    let end = if visible_end > 0 { &digits[len - visible_end..] } else { "" };
    let mask_count = max_asterisks.min((len - visible_start - visible_end).max(3));
    format!("{prefix}{start}{}{end}", mask_run(mask_char, mask_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plus_when_start_is_visible() {
        assert_eq!(mask_phone("+2348012345678", &MaskOptions::default()), "+23****678");
    }

    #[test]
    fn drops_plus_when_start_is_hidden() {
        let opts = MaskOptions {
            visible_start: Some(0),
            ..Default::default()
        };
        let masked = mask_phone("+2348012345678", &opts);
        assert!(!masked.starts_with('+'));
        assert!(masked.ends_with("678"));
    }

    #[test]
    fn short_numbers_keep_first_digit_only() {
        let masked = mask_phone("12345", &MaskOptions::default());
        assert_eq!(masked, "1****");
    }

    #[test]
    fn custom_mask_char() {
        let opts = MaskOptions {
            mask_char: Some('#'),
            ..Default::default()
        };
        assert_eq!(mask_phone("09012345678", &opts), "09####678");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(mask_phone("call me", &MaskOptions::default()), "call me");
    }
}
