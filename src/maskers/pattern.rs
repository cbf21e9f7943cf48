// datamask/src/maskers/pattern.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{mask_run, DEFAULT_MASK_CHAR};
use crate::options::MaskOptions;

/// Source characters beyond the template get at most this many trailing
/// mask characters appended.
const MAX_TAIL: usize = 4;

static REPEAT_EXPANSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([#*])\{(\d+)\}").expect("built-in pattern must compile"));

/// Template-based masking.
///
/// The template is walked in lockstep with the whitespace-stripped source:
/// `#` reveals the next source character, `*` masks it, literals are copied
/// verbatim, and `{n}` expands the preceding `#`/`*` n times. Fault
/// tolerant in both directions: once the source is exhausted, remaining
/// `#`/`*` slots are skipped (literals still emitted); once the template is
/// exhausted, leftover source collapses into a short masked tail.
pub fn mask_pattern(value: &str, template: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);

    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let expanded = REPEAT_EXPANSION.replace_all(template, |caps: &Captures| {
        let symbol = &caps[1];
        let count: usize = caps[2].parse().unwrap_or(0);
        symbol.repeat(count)
    });

    let mut source = stripped.chars();
    let mut out = String::with_capacity(expanded.len());
    for slot in expanded.chars() {
        match slot {
            '#' => {
                if let Some(c) = source.next() {
                    out.push(c);
                }
            }
            '*' => {
                if source.next().is_some() {
                    out.push(mask_char);
                }
            }
            literal => out.push(literal),
        }
    }

    let leftover = source.count();
    if leftover > 0 {
        out.push_str(&mask_run(mask_char, leftover.min(MAX_TAIL)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_template_and_source_in_lockstep() {
        assert_eq!(
            mask_pattern("4111 1111 1111 1234", "####-****-****-####", &MaskOptions::default()),
            "4111-****-****-1234"
        );
    }

    #[test]
    fn expands_repeat_counts() {
        assert_eq!(
            mask_pattern("08012345678", "#{4}-*{4}-#{3}", &MaskOptions::default()),
            "0801-****-678"
        );
    }

    #[test]
    fn short_source_skips_slots_but_keeps_literals() {
        assert_eq!(mask_pattern("ab", "##-##", &MaskOptions::default()), "ab-");
    }

    #[test]
    fn long_source_appends_capped_tail() {
        assert_eq!(mask_pattern("123456789", "###", &MaskOptions::default()), "123****");
    }

    #[test]
    fn custom_mask_char() {
        let opts = MaskOptions {
            mask_char: Some('#'),
            ..Default::default()
        };
        assert_eq!(mask_pattern("abcd", "**##", &opts), "##cd");
    }
}
