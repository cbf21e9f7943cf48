// datamask/src/maskers/address.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("built-in pattern must compile"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w{3,}\b").expect("built-in pattern must compile"));

/// Masks a postal address: digit runs collapse to a fixed three-character
/// run, and every word of three or more characters keeps only its first and
/// last character around a capped interior run.
///
/// `"123 Main Street"` becomes `"*** M**n S****t"`.
pub fn mask_address(value: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);

    let digits_hidden = DIGIT_RUN.replace_all(value, mask_run(mask_char, 3).as_str());
    WORD.replace_all(&digits_hidden, |caps: &Captures| {
        let word: Vec<char> = caps[0].chars().collect();
        let len = word.len();
        format!(
            "{}{}{}",
            word[0],
            mask_run(mask_char, max_asterisks.min(len - 2)),
            word[len - 1]
        )
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_numbers_and_word_interiors() {
        assert_eq!(mask_address("123 Main Street", &MaskOptions::default()), "*** M**n S****t");
    }

    #[test]
    fn short_words_survive() {
        assert_eq!(mask_address("45 St Q", &MaskOptions::default()), "*** St Q");
    }
}
