// datamask/src/maskers/email.rs

use super::{mask_run, DEFAULT_MASK_CHAR, DEFAULT_MAX_ASTERISKS};
use crate::options::MaskOptions;

/// Masks an email address while preserving its recognisable structure.
///
/// The local part keeps `visible_start` leading characters followed by a
/// capped mask run; the domain name keeps `visible_end` leading characters
/// followed by up to three mask characters; the extension after the first
/// domain dot is preserved verbatim.
///
/// `"john.doe@example.com"` with defaults becomes `"****@***.com"`.
pub fn mask_email(email: &str, options: &MaskOptions) -> String {
    let mask_char = options.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
    let max_asterisks = options.max_asterisks.unwrap_or(DEFAULT_MAX_ASTERISKS);
    let visible_start = options.visible_start.unwrap_or(0);
    let visible_end = options.visible_end.unwrap_or(0);

    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }

    let (domain_name, domain_ext) = match domain.split_once('.') {
        Some((name, ext)) => (name, Some(ext)),
        None => (domain, None),
    };

    let local_len = local.chars().count();
    let safe_start = visible_start.min(local_len.saturating_sub(1));
    let local_mask = max_asterisks.min((local_len - safe_start).max(3));
    let local_visible: String = local.chars().take(safe_start).collect();

    let name_len = domain_name.chars().count();
    let safe_end = visible_end.min(name_len.saturating_sub(1));
    let domain_mask = 3.min((name_len - safe_end).max(1));
    let domain_visible: String = domain_name.chars().take(safe_end).collect();

    let mut out = String::with_capacity(email.len());
    out.push_str(&local_visible);
    out.push_str(&mask_run(mask_char, local_mask));
    out.push('@');
    out.push_str(&domain_visible);
    out.push_str(&mask_run(mask_char, domain_mask));
    if let Some(ext) = domain_ext {
        out.push('.');
        out.push_str(ext);
    }
    out
}
