//! Dealer signup repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::dealer::{DealerSignup, VerificationUpdate};
use crate::errors::{DomainResult, OnboardingError};

/// Store access for dealer signup records.
///
/// Records are keyed by `contact_email`; `dealership_domain` carries a
/// secondary uniqueness constraint.
#[async_trait]
pub trait DealerRepository: Send + Sync {
    async fn find_by_contact_email(&self, email: &str) -> DomainResult<Option<DealerSignup>>;

    async fn find_by_domain(&self, domain: &str) -> DomainResult<Option<DealerSignup>>;

    async fn insert(&self, signup: DealerSignup) -> DomainResult<DealerSignup>;

    /// Apply a verification-state update to the record with the given
    /// contact email, replacing all verification fields in one write.
    ///
    /// Returns the updated record, or `None` when no record matches.
    async fn update_verification(
        &self,
        email: &str,
        update: VerificationUpdate,
    ) -> DomainResult<Option<DealerSignup>>;

    /// Names of all onboarded dealerships, used to flag inventory search
    /// results that already signed up.
    async fn onboarded_names(&self) -> DomainResult<Vec<String>>;
}

/// In-memory dealer repository keyed by contact email
pub struct MockDealerRepository {
    records: Arc<RwLock<HashMap<String, DealerSignup>>>,
}

impl MockDealerRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a record directly, bypassing duplicate checks
    pub async fn put(&self, signup: DealerSignup) {
        let mut records = self.records.write().await;
        records.insert(signup.contact_email.clone(), signup);
    }
}

impl Default for MockDealerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DealerRepository for MockDealerRepository {
    async fn find_by_contact_email(&self, email: &str) -> DomainResult<Option<DealerSignup>> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }

    async fn find_by_domain(&self, domain: &str) -> DomainResult<Option<DealerSignup>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.dealership_domain == domain)
            .cloned())
    }

    async fn insert(&self, signup: DealerSignup) -> DomainResult<DealerSignup> {
        let mut records = self.records.write().await;
        if records.contains_key(&signup.contact_email) {
            return Err(OnboardingError::store("duplicate contact email"));
        }
        records.insert(signup.contact_email.clone(), signup.clone());
        Ok(signup)
    }

    async fn update_verification(
        &self,
        email: &str,
        update: VerificationUpdate,
    ) -> DomainResult<Option<DealerSignup>> {
        let mut records = self.records.write().await;
        match records.get_mut(email) {
            Some(record) => {
                record.verification = update.verification;
                record.email_verified = update.email_verified;
                record.verified_at = update.verified_at;
                record.updated_at = update.updated_at;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn onboarded_names(&self) -> DomainResult<Vec<String>> {
        let records = self.records.read().await;
        Ok(records.values().map(|r| r.dealership_name.clone()).collect())
    }
}
