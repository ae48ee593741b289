use sha2::{Digest, Sha256};

/// SHA-256 hex digest of proposal content.
///
/// Editor approvals are recorded against this value, so an approval only covers the
/// exact content it was given for; any later push invalidates it.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_lowercase_hex() {
        let d = content_digest("hello");
        assert_eq!(
            d,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_ne!(content_digest("hello "), d);
    }
}
