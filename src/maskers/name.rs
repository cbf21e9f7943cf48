// datamask/src/maskers/name.rs

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

/// Masks a personal name word by word: words longer than two characters
/// keep their initial and mask the rest (capped), shorter words are fully
/// masked.
///
/// `"John Smith"` becomes `"J*** S****"`.
pub fn mask_name(value: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);

    value
        .split_whitespace()
        .map(|word| {
            let chars: Vec<char> = word.chars().collect();
            if chars.len() > 2 {
                format!("{}{}", chars[0], mask_run(mask_char, max_asterisks.min(chars.len() - 1)))
            } else {
                mask_run(mask_char, chars.len())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_initials() {
        assert_eq!(mask_name("John Smith", &MaskOptions::default()), "J*** S****");
    }

    #[test]
    fn short_words_fully_masked() {
        assert_eq!(mask_name("Jo A Doe", &MaskOptions::default()), "** * D**");
    }
}
