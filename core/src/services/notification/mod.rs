//! Outbound email abstraction.
//!
//! The core only decides *that* a verification email goes out and with
//! which links; transport and templating live in the infra crate.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{DomainResult, OnboardingError};

/// Everything needed to render and address one verification email.
///
/// The plaintext secret is embedded in `verify_url`; it never appears
/// anywhere else and is never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    pub to: String,
    pub contact_name: String,
    pub verify_url: String,
    pub resend_url: String,
}

/// Sends verification emails
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_verification(&self, email: &VerificationEmail) -> DomainResult<()>;
}

/// In-memory sender that records what would have been sent
pub struct MockEmailSender {
    sent: Arc<RwLock<Vec<VerificationEmail>>>,
    failing: AtomicBool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent send fail
    pub fn fail_sends(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<VerificationEmail> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_verification(&self, email: &VerificationEmail) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(OnboardingError::mail("smtp relay unavailable"));
        }
        let mut sent = self.sent.write().await;
        sent.push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_email() -> VerificationEmail {
        VerificationEmail {
            to: "sam@example.com".to_string(),
            contact_name: "Sam Carter".to_string(),
            verify_url: "https://onboarding.test/verify-email?data=abc".to_string(),
            resend_url: "https://onboarding.test/resend-verification-email?data=def".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_records_sends() {
        let sender = MockEmailSender::new();
        sender.send_verification(&sample_email()).await.unwrap();
        assert_eq!(sender.sent_count().await, 1);
        assert_eq!(sender.sent().await[0].to, "sam@example.com");
    }

    #[tokio::test]
    async fn test_mock_can_fail() {
        let sender = MockEmailSender::new();
        sender.fail_sends();
        let result = sender.send_verification(&sample_email()).await;
        assert!(matches!(result, Err(OnboardingError::Mail { .. })));
        assert_eq!(sender.sent_count().await, 0);
    }
}
