// datamask/src/maskers/card.rs

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

/// Masks a payment card number, preserving its grouped shape.
///
/// Digits are regrouped into 4-digit chunks; the first and last chunk stay
/// verbatim while every interior chunk becomes a fixed mask run. Chunks are
/// rejoined with single spaces regardless of the input separators.
///
/// `"1234567812345678"` becomes `"1234 **** **** 5678"`.
pub fn mask_card(card: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);

    if card.is_empty() {
        return String::new();
    }

    let digits: Vec<char> = card.chars().filter(|c| c.is_ascii_digit()).collect();
    let groups: Vec<String> = digits.chunks(4).map(|chunk| chunk.iter().collect()).collect();
    let last = groups.len().saturating_sub(1);

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            if i == 0 || i == last {
                group.clone()
            } else {
                mask_run(mask_char, max_asterisks)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
