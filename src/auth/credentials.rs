/**
 * Credential Verification
 *
 * This module decides whether a submitted plaintext password matches a
 * stored credential without ever mutating the stored value.
 *
 * # Dual-mode verification
 *
 * The deployment is mid-migration from plaintext credentials to bcrypt
 * hashes, so a stored value can be either encoding. The stored string is
 * self-describing: bcrypt hashes carry a recognized `$2…$` version prefix.
 *
 * - Recognized prefix: the value is treated as a bcrypt hash and compared
 *   cryptographically. Any verification failure (malformed hash,
 *   unsupported version) degrades to a non-match, never an error.
 * - No recognized prefix: legacy plaintext mode, exact string equality
 *   (case-sensitive, no trimming).
 *
 * A value with a recognized prefix is never compared by string equality,
 * so a client cannot log in by submitting the hash itself.
 *
 * # Security
 *
 * Submitted passwords and stored values are never logged here and must
 * not be logged by callers.
 */
use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// bcrypt version prefixes recognized as hashed credentials
const HASH_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2y$", "$2x$"];

/// A stored credential, classified by its encoding
///
/// The two-variant split keeps the prefix sniffing in one place; callers
/// match on the variant instead of inspecting the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredCredential<'a> {
    /// A bcrypt hash (recognized version prefix)
    Hashed(&'a str),
    /// A legacy plaintext password (no recognized prefix)
    Plaintext(&'a str),
}

impl<'a> StoredCredential<'a> {
    /// Classify a stored credential string by its prefix
    pub fn parse(stored: &'a str) -> Self {
        if HASH_PREFIXES.iter().any(|p| stored.starts_with(p)) {
            Self::Hashed(stored)
        } else {
            Self::Plaintext(stored)
        }
    }

    /// Check a submitted password against this credential
    ///
    /// Returns `true` on a match. Hash verification failures degrade to
    /// `false` rather than propagating.
    pub fn verify(&self, submitted: &str) -> bool {
        match self {
            Self::Hashed(stored) => verify(submitted, stored).unwrap_or(false),
            Self::Plaintext(stored) => *stored == submitted,
        }
    }
}

/// Check a submitted password against a stored credential string
///
/// Convenience wrapper over [`StoredCredential::parse`] + verify.
pub fn verify_password(stored: &str, submitted: &str) -> bool {
    StoredCredential::parse(stored).verify(submitted)
}

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_exact_match() {
        assert!(verify_password("plain123", "plain123"));
    }

    #[test]
    fn test_plaintext_is_case_sensitive() {
        assert!(!verify_password("plain123", "Plain123"));
    }

    #[test]
    fn test_plaintext_no_trimming() {
        assert!(!verify_password("plain123", " plain123"));
        assert!(!verify_password("plain123", "plain123 "));
    }

    #[test]
    fn test_empty_submitted_password() {
        assert!(!verify_password("plain123", ""));
        assert!(verify_password("", ""));
    }

    #[test]
    fn test_hashed_round_trip() {
        let stored = hash_password("admin1234").unwrap();
        assert!(matches!(
            StoredCredential::parse(&stored),
            StoredCredential::Hashed(_)
        ));
        assert!(verify_password(&stored, "admin1234"));
        assert!(!verify_password(&stored, "wrong"));
    }

    #[test]
    fn test_malformed_hash_degrades_to_false() {
        // Recognized prefix but garbage payload: must be a quiet non-match.
        assert!(!verify_password("$2b$garbled", "anything"));
        assert!(!verify_password("$2b$garbled", "$2b$garbled"));
    }

    #[test]
    fn test_unrecognized_dollar_prefix_is_plaintext() {
        // "$garbled" carries no recognized version token, so it is legacy
        // plaintext and only matches itself.
        assert!(!verify_password("$garbled", "admin1234"));
        assert!(verify_password("$garbled", "$garbled"));
    }

    #[test]
    fn test_hashed_never_falls_through_to_equality() {
        // Submitting the stored hash verbatim must not match.
        let stored = hash_password("admin1234").unwrap();
        assert!(!verify_password(&stored, &stored));
    }

    #[test]
    fn test_all_recognized_prefixes_classify_as_hashed() {
        for prefix in ["$2a$", "$2b$", "$2y$", "$2x$"] {
            let stored = format!("{prefix}12$abcdefghijklmnopqrstuv");
            assert!(matches!(
                StoredCredential::parse(&stored),
                StoredCredential::Hashed(_)
            ));
        }
    }
}
