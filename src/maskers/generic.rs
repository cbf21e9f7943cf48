// datamask/src/maskers/generic.rs

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

/// Masks any string value by revealing a portion at each end and replacing
/// the middle with a capped mask run.
///
/// When the value is too short to honor both windows, falls back to keeping
/// the first character and masking the rest up to the cap.
///
/// `mask_generic("Temitope", ..visible_start 2, visible_end 2)` → `"Te****pe"`.
pub fn mask_generic(value: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);
    let visible_start = options.visible_start.unwrap_or(0);
    let visible_end = options.visible_end.unwrap_or(0);

    if value.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len <= visible_start + visible_end {
        return format!("{}{}", chars[0], mask_run(mask_char, (len - 1).min(max_asterisks)));
    }

    let start: String = chars[..visible_start].iter().collect();
    let end: String = if visible_end > 0 {
        chars[len - visible_end..].iter().collect()
    } else {
        String::new()
    };
    let mask_count = max_asterisks.min((len - visible_start - visible_end).max(3));
    format!("{start}{}{end}", mask_run(mask_char, mask_count))
}
