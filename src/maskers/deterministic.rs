// datamask/src/maskers/deterministic.rs

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::mask_generic;
use crate::options::MaskOptions;

type HmacSha256 = Hmac<Sha256>;

/// Used when the caller supplies no secret. Fine for correlation in logs,
/// not for anything adversarial.
const FALLBACK_SECRET: &str = "datamask-default-secret";

/// Length of the hex digest prefix kept as the mask.
const DIGEST_LEN: usize = 12;

/// Deterministic masking: a keyed HMAC-SHA256 over the value, truncated to
/// a short hex token. The same value and secret always produce the same
/// output, so masked fields remain joinable across records; different
/// secrets diverge with overwhelming probability.
pub fn mask_deterministic(value: &str, options: &MaskOptions) -> String {
    let secret = options.secret.as_deref().unwrap_or(FALLBACK_SECRET);
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        // HMAC accepts keys of any length; stay fail-open regardless.
        return mask_generic(value, options);
    };
    mac.update(value.as_bytes());
    let digest = hex::encode(mac.finalize().into_bytes());
    digest[..DIGEST_LEN.min(digest.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> MaskOptions {
        MaskOptions {
            secret: Some(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn stable_for_same_input_and_secret() {
        let a = mask_deterministic("unique@user.com", &with_secret("my-secret-key"));
        let b = mask_deterministic("unique@user.com", &with_secret("my-secret-key"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn diverges_across_secrets() {
        let a = mask_deterministic("data", &with_secret("key-A"));
        let b = mask_deterministic("data", &with_secret("key-B"));
        assert_ne!(a, b);
    }

    #[test]
    fn falls_back_to_built_in_secret() {
        let a = mask_deterministic("data", &MaskOptions::default());
        let b = mask_deterministic("data", &MaskOptions::default());
        assert_eq!(a, b);
    }
}
