//! Email verification service.
//!
//! Owns the unverified -> verified state machine for dealer signups.
//! All state transitions go through `DealerRepository::update_verification`
//! so the token, flag and timestamps change in one store write.

use chrono::Utc;
use std::sync::Arc;
use tracing;

use crate::domain::entities::dealer::{DealerSignup, VerificationUpdate};
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{DomainResult, OnboardingError};
use crate::repositories::DealerRepository;
use crate::services::notification::{EmailSender, VerificationEmail};

use super::config::VerificationConfig;
use super::link::{self, ResendPayload, VerifyPayload};

/// Service handling verify and resend operations
pub struct VerificationService<D: DealerRepository, M: EmailSender> {
    dealers: Arc<D>,
    mailer: Arc<M>,
    config: VerificationConfig,
}

impl<D: DealerRepository, M: EmailSender> VerificationService<D, M> {
    pub fn new(dealers: Arc<D>, mailer: Arc<M>, config: VerificationConfig) -> Self {
        Self {
            dealers,
            mailer,
            config,
        }
    }

    /// Build the clickable verify link for a freshly issued secret
    pub fn verify_url(&self, email: &str, secret: &str) -> DomainResult<String> {
        let data = link::encode_verify(&VerifyPayload {
            email: email.to_string(),
            key: secret.to_string(),
        })?;
        Ok(format!("{}/verify-email?data={}", self.config.base_url, data))
    }

    /// Build the clickable resend link for an address
    pub fn resend_url(&self, email: &str) -> DomainResult<String> {
        let data = link::encode_resend(&ResendPayload {
            email: email.to_string(),
        })?;
        Ok(format!(
            "{}/resend-verification-email?data={}",
            self.config.base_url, data
        ))
    }

    /// Send the verification email carrying both links.
    ///
    /// `secret` is the plaintext one-time secret; it only ever travels
    /// inside the verify link.
    pub async fn send_verification_email(
        &self,
        signup: &DealerSignup,
        secret: &str,
    ) -> DomainResult<()> {
        let email = VerificationEmail {
            to: signup.contact_email.clone(),
            contact_name: signup.contact_full_name.clone(),
            verify_url: self.verify_url(&signup.contact_email, secret)?,
            resend_url: self.resend_url(&signup.contact_email)?,
        };
        self.mailer.send_verification(&email).await?;

        tracing::info!(
            email = %signup.contact_email,
            event = "verification_email_sent",
            "Sent verification email"
        );
        Ok(())
    }

    /// Verify a contact email against a presented one-time secret.
    ///
    /// Checks run in a fixed order: record existence, already-verified,
    /// token presence, expiry, then the bcrypt comparison. Only when all
    /// pass is the record flipped to verified, which also consumes the
    /// token.
    pub async fn verify(&self, email: &str, secret: &str) -> DomainResult<DealerSignup> {
        let signup = self
            .dealers
            .find_by_contact_email(email)
            .await?
            .ok_or_else(|| OnboardingError::not_found("dealer signup"))?;

        if signup.email_verified {
            tracing::info!(
                email = %email,
                event = "verify_already_done",
                "Verification link clicked for an already verified address"
            );
            return Err(OnboardingError::AlreadyVerified);
        }

        let token = signup
            .verification
            .as_ref()
            .ok_or_else(|| OnboardingError::not_found("verification token"))?;

        if token.is_expired() {
            tracing::info!(
                email = %email,
                event = "verify_link_expired",
                "Verification link expired"
            );
            return Err(OnboardingError::LinkExpired);
        }

        if !token.matches(secret)? {
            tracing::warn!(
                email = %email,
                event = "verify_key_mismatch",
                "Presented verification key does not match the stored hash"
            );
            return Err(OnboardingError::TokenMismatch);
        }

        let now = Utc::now();
        let updated = self
            .dealers
            .update_verification(email, VerificationUpdate::verified(now))
            .await?
            .ok_or_else(|| OnboardingError::not_found("dealer signup"))?;

        tracing::info!(
            email = %email,
            event = "email_verified",
            "Contact email verified"
        );
        Ok(updated)
    }

    /// Reissue a verification token and email a fresh link.
    ///
    /// The new token replaces the old one in the same store write that
    /// resets the verified state, so the old secret is dead the moment
    /// this returns.
    pub async fn resend(&self, email: &str) -> DomainResult<DealerSignup> {
        let signup = self
            .dealers
            .find_by_contact_email(email)
            .await?
            .ok_or_else(|| OnboardingError::not_found("dealer signup"))?;

        if signup.email_verified {
            return Err(OnboardingError::AlreadyVerified);
        }

        let (secret, token) = VerificationToken::issue()?;
        let now = Utc::now();
        let updated = self
            .dealers
            .update_verification(email, VerificationUpdate::reissued(token, now))
            .await?
            .ok_or_else(|| OnboardingError::not_found("dealer signup"))?;

        tracing::info!(
            email = %email,
            event = "verification_token_reissued",
            "Issued replacement verification token"
        );

        self.send_verification_email(&updated, &secret).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dealer::{Country, DealerApplication};
    use crate::repositories::MockDealerRepository;
    use crate::services::notification::MockEmailSender;
    use chrono::Duration;

    fn service(
        dealers: Arc<MockDealerRepository>,
        mailer: Arc<MockEmailSender>,
    ) -> VerificationService<MockDealerRepository, MockEmailSender> {
        VerificationService::new(dealers, mailer, VerificationConfig::default())
    }

    /// Issue a token with a low bcrypt cost to keep tests fast
    fn cheap_token(secret: &str) -> VerificationToken {
        VerificationToken {
            secret_hash: bcrypt::hash(secret, 4).unwrap(),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    async fn seed_signup(
        dealers: &MockDealerRepository,
        email: &str,
        secret: &str,
    ) -> DealerSignup {
        let application = DealerApplication {
            dealership_name: "Main Street Motors".to_string(),
            contact_full_name: "Sam Carter".to_string(),
            contact_email: email.to_string(),
            ..Default::default()
        };
        let signup = DealerSignup::new(
            application,
            "mainstreetmotors.com".to_string(),
            Country::Ca,
            cheap_token(secret),
        );
        dealers.put(signup.clone()).await;
        signup
    }

    #[tokio::test]
    async fn test_verify_succeeds_once_then_already_verified() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let secret = "a".repeat(32);
        seed_signup(&dealers, "sam@x.com", &secret).await;
        let service = service(dealers, mailer);

        let updated = service.verify("sam@x.com", &secret).await.unwrap();
        assert!(updated.email_verified);
        assert!(updated.verification.is_none());
        assert!(updated.verified_at > updated.created_at - Duration::seconds(1));

        // same link clicked again
        let result = service.verify("sam@x.com", &secret).await;
        assert!(matches!(result, Err(OnboardingError::AlreadyVerified)));
    }

    #[tokio::test]
    async fn test_verify_unknown_email() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let service = service(dealers, mailer);

        let result = service.verify("nobody@x.com", "whatever").await;
        assert!(matches!(result, Err(OnboardingError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_verify_wrong_secret() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        seed_signup(&dealers, "sam@x.com", &"a".repeat(32)).await;
        let service = service(dealers.clone(), mailer);

        let result = service.verify("sam@x.com", &"b".repeat(32)).await;
        assert!(matches!(result, Err(OnboardingError::TokenMismatch)));

        // record untouched
        let signup = dealers
            .find_by_contact_email("sam@x.com")
            .await
            .unwrap()
            .unwrap();
        assert!(!signup.email_verified);
        assert!(signup.verification.is_some());
    }

    #[tokio::test]
    async fn test_verify_expired_token() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let secret = "a".repeat(32);
        let mut signup = seed_signup(&dealers, "sam@x.com", &secret).await;
        signup.verification = Some(VerificationToken {
            secret_hash: bcrypt::hash(&secret, 4).unwrap(),
            expires_at: Utc::now() - Duration::minutes(1),
        });
        dealers.put(signup).await;
        let service = service(dealers, mailer);

        let result = service.verify("sam@x.com", &secret).await;
        assert!(matches!(result, Err(OnboardingError::LinkExpired)));
    }

    #[tokio::test]
    async fn test_verify_with_no_token_attached() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let mut signup = seed_signup(&dealers, "sam@x.com", &"a".repeat(32)).await;
        signup.verification = None;
        dealers.put(signup).await;
        let service = service(dealers, mailer);

        let result = service.verify("sam@x.com", &"a".repeat(32)).await;
        assert!(matches!(
            result,
            Err(OnboardingError::NotFound { ref resource }) if resource == "verification token"
        ));
    }

    #[tokio::test]
    async fn test_resend_invalidates_previous_secret() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let old_secret = "a".repeat(32);
        seed_signup(&dealers, "sam@x.com", &old_secret).await;
        let service = service(dealers.clone(), mailer.clone());

        let updated = service.resend("sam@x.com").await.unwrap();
        assert!(!updated.email_verified);
        assert!(updated.has_active_token());
        assert_eq!(mailer.sent_count().await, 1);

        // old secret no longer matches
        let result = service.verify("sam@x.com", &old_secret).await;
        assert!(matches!(result, Err(OnboardingError::TokenMismatch)));
    }

    #[tokio::test]
    async fn test_resend_for_verified_address() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let secret = "a".repeat(32);
        seed_signup(&dealers, "sam@x.com", &secret).await;
        let service = service(dealers, mailer.clone());

        service.verify("sam@x.com", &secret).await.unwrap();
        let result = service.resend("sam@x.com").await;
        assert!(matches!(result, Err(OnboardingError::AlreadyVerified)));
        assert_eq!(mailer.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_resend_unknown_email() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let service = service(dealers, mailer);

        let result = service.resend("nobody@x.com").await;
        assert!(matches!(result, Err(OnboardingError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resend_mail_failure_still_rotates_token() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let old_secret = "a".repeat(32);
        seed_signup(&dealers, "sam@x.com", &old_secret).await;
        mailer.fail_sends();
        let service = service(dealers.clone(), mailer);

        let result = service.resend("sam@x.com").await;
        assert!(matches!(result, Err(OnboardingError::Mail { .. })));

        // the token was already replaced before the send was attempted
        let signup = dealers
            .find_by_contact_email("sam@x.com")
            .await
            .unwrap()
            .unwrap();
        assert!(signup.has_active_token());
        assert!(!signup.verification.unwrap().matches(&old_secret).unwrap());
    }

    #[tokio::test]
    async fn test_link_urls_embed_encoded_payload() {
        let dealers = Arc::new(MockDealerRepository::new());
        let mailer = Arc::new(MockEmailSender::new());
        let service = service(dealers, mailer);

        let url = service.verify_url("sam@x.com", "secret123").unwrap();
        assert!(url.starts_with("http://localhost:8080/verify-email?data="));
        let data = url.split_once("data=").unwrap().1;
        let payload = link::decode_verify(data).unwrap();
        assert_eq!(payload.email, "sam@x.com");
        assert_eq!(payload.key, "secret123");

        let url = service.resend_url("sam@x.com").unwrap();
        let data = url.split_once("data=").unwrap().1;
        assert_eq!(link::decode_resend(data).unwrap().email, "sam@x.com");
    }
}
