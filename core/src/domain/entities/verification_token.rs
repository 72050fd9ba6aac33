//! Email verification token entity.
//!
//! A token pairs an irreversible hash of a one-time secret with an expiry
//! time. The plaintext secret leaves the process exactly once, inside the
//! verification link emailed to the dealer contact; only the hash is stored.

use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainResult, OnboardingError};

/// Length of the generated verification secret
pub const SECRET_LENGTH: usize = 32;

/// Token validity window in hours
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// bcrypt cost factor for secret hashing
pub const HASH_COST: u32 = 10;

/// A single-use email verification token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// bcrypt hash of the verification secret
    pub secret_hash: String,

    /// Timestamp after which the token is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Issue a fresh token.
    ///
    /// Returns the plaintext secret alongside the token holding its hash.
    /// The secret must never be logged or persisted. Hashing at cost 10
    /// takes tens of milliseconds; callers should not hold locks or other
    /// resources across this call.
    pub fn issue() -> DomainResult<(String, Self)> {
        let secret = Self::generate_secret();
        let secret_hash = bcrypt::hash(&secret, HASH_COST)
            .map_err(|e| OnboardingError::internal(format!("secret hashing failed: {e}")))?;

        let token = Self {
            secret_hash,
            expires_at: Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS),
        };
        Ok((secret, token))
    }

    /// Generate a cryptographically random alphanumeric secret
    fn generate_secret() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SECRET_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Whether the token has passed its expiry time
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compare a presented secret against the stored hash.
    ///
    /// Uses the bcrypt verify primitive; like issuance this call can take
    /// tens of milliseconds.
    pub fn matches(&self, secret: &str) -> DomainResult<bool> {
        bcrypt::verify(secret, &self.secret_hash)
            .map_err(|e| OnboardingError::internal(format!("secret comparison failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a token from a known secret with a cheap cost for fast tests.
    fn token_for(secret: &str, expires_at: DateTime<Utc>) -> VerificationToken {
        VerificationToken {
            secret_hash: bcrypt::hash(secret, 4).unwrap(),
            expires_at,
        }
    }

    #[test]
    fn test_issue_produces_32_char_secret() {
        let (secret, token) = VerificationToken::issue().unwrap();
        assert_eq!(secret.len(), SECRET_LENGTH);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!token.is_expired());
        // The hash never contains the plaintext secret.
        assert!(!token.secret_hash.contains(&secret));
    }

    #[test]
    fn test_issued_token_matches_its_secret() {
        let (secret, token) = VerificationToken::issue().unwrap();
        assert!(token.matches(&secret).unwrap());
        assert!(!token.matches("not-the-secret").unwrap());
    }

    #[test]
    fn test_secrets_are_unique() {
        let codes: Vec<String> = (0..50)
            .map(|_| VerificationToken::generate_secret())
            .collect();
        let unique = codes.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_expiry_window() {
        let (_, token) = VerificationToken::issue().unwrap();
        let window = token.expires_at - Utc::now();
        assert!(window <= Duration::hours(TOKEN_VALIDITY_HOURS));
        assert!(window > Duration::hours(TOKEN_VALIDITY_HOURS - 1));
    }

    #[test]
    fn test_expired_token_reports_expired() {
        let token = token_for("abc", Utc::now() - Duration::minutes(1));
        assert!(token.is_expired());
        // Expiry does not affect the hash comparison itself.
        assert!(token.matches("abc").unwrap());
    }
}
