//! MySQL implementation of the dealer signup repository.
//!
//! The verification token lives in two nullable columns (`token_hash`,
//! `token_expires_at`); both are written in the same UPDATE as the
//! verified flag and timestamps, which gives verify/resend their
//! all-or-nothing semantics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ob_core::domain::entities::dealer::{Country, DealerSignup, VerificationUpdate};
use ob_core::domain::entities::verification_token::VerificationToken;
use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::repositories::DealerRepository;

const SIGNUP_COLUMNS: &str = "id, dealership_name, dealership_phone, dealership_lead_email, \
     dealership_billing_email, dealership_website, dealership_additional_websites, \
     dealership_domain, dealership_country, dealer_group_domain, contact_full_name, \
     contact_email, contact_phone, dealership_providers, lead_option, agent_id, \
     lead_address, email_verified, verified_at, token_hash, token_expires_at, \
     created_at, updated_at";

/// MySQL-backed dealer signup repository
pub struct MySqlDealerRepository {
    pool: MySqlPool,
}

impl MySqlDealerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_signup(row: &sqlx::mysql::MySqlRow) -> DomainResult<DealerSignup> {
        let id: String = row.try_get("id").map_err(OnboardingError::store)?;
        let country: String = row
            .try_get("dealership_country")
            .map_err(OnboardingError::store)?;
        let providers: String = row
            .try_get("dealership_providers")
            .map_err(OnboardingError::store)?;

        let token_hash: Option<String> =
            row.try_get("token_hash").map_err(OnboardingError::store)?;
        let token_expires_at: Option<DateTime<Utc>> = row
            .try_get("token_expires_at")
            .map_err(OnboardingError::store)?;
        let verification = match (token_hash, token_expires_at) {
            (Some(secret_hash), Some(expires_at)) => Some(VerificationToken {
                secret_hash,
                expires_at,
            }),
            _ => None,
        };

        Ok(DealerSignup {
            id: Uuid::parse_str(&id).map_err(OnboardingError::store)?,
            dealership_name: row
                .try_get("dealership_name")
                .map_err(OnboardingError::store)?,
            dealership_phone: row
                .try_get("dealership_phone")
                .map_err(OnboardingError::store)?,
            dealership_lead_email: row
                .try_get("dealership_lead_email")
                .map_err(OnboardingError::store)?,
            dealership_billing_email: row
                .try_get("dealership_billing_email")
                .map_err(OnboardingError::store)?,
            dealership_website: row
                .try_get("dealership_website")
                .map_err(OnboardingError::store)?,
            dealership_additional_websites: row
                .try_get("dealership_additional_websites")
                .map_err(OnboardingError::store)?,
            dealership_domain: row
                .try_get("dealership_domain")
                .map_err(OnboardingError::store)?,
            dealership_country: Country::parse(&country).ok_or_else(|| {
                OnboardingError::store(format!("unknown country in store: {country}"))
            })?,
            dealer_group_domain: row
                .try_get("dealer_group_domain")
                .map_err(OnboardingError::store)?,
            contact_full_name: row
                .try_get("contact_full_name")
                .map_err(OnboardingError::store)?,
            contact_email: row
                .try_get("contact_email")
                .map_err(OnboardingError::store)?,
            contact_phone: row
                .try_get("contact_phone")
                .map_err(OnboardingError::store)?,
            dealership_providers: serde_json::from_str(&providers)
                .map_err(OnboardingError::store)?,
            lead_option: row.try_get("lead_option").map_err(OnboardingError::store)?,
            agent_id: row.try_get("agent_id").map_err(OnboardingError::store)?,
            lead_address: row
                .try_get("lead_address")
                .map_err(OnboardingError::store)?,
            email_verified: row
                .try_get("email_verified")
                .map_err(OnboardingError::store)?,
            verified_at: row.try_get("verified_at").map_err(OnboardingError::store)?,
            verification,
            created_at: row.try_get("created_at").map_err(OnboardingError::store)?,
            updated_at: row.try_get("updated_at").map_err(OnboardingError::store)?,
        })
    }
}

#[async_trait]
impl DealerRepository for MySqlDealerRepository {
    async fn find_by_contact_email(&self, email: &str) -> DomainResult<Option<DealerSignup>> {
        let query = format!(
            "SELECT {SIGNUP_COLUMNS} FROM dealer_signups WHERE contact_email = ? LIMIT 1"
        );
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_signup(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_domain(&self, domain: &str) -> DomainResult<Option<DealerSignup>> {
        let query = format!(
            "SELECT {SIGNUP_COLUMNS} FROM dealer_signups WHERE dealership_domain = ? LIMIT 1"
        );
        let row = sqlx::query(&query)
            .bind(domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_signup(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, signup: DealerSignup) -> DomainResult<DealerSignup> {
        let providers = serde_json::to_string(&signup.dealership_providers)
            .map_err(OnboardingError::internal)?;
        let (token_hash, token_expires_at) = match &signup.verification {
            Some(token) => (Some(token.secret_hash.clone()), Some(token.expires_at)),
            None => (None, None),
        };

        let query = r#"
            INSERT INTO dealer_signups (
                id, dealership_name, dealership_phone, dealership_lead_email,
                dealership_billing_email, dealership_website, dealership_additional_websites,
                dealership_domain, dealership_country, dealer_group_domain, contact_full_name,
                contact_email, contact_phone, dealership_providers, lead_option, agent_id,
                lead_address, email_verified, verified_at, token_hash, token_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(signup.id.to_string())
            .bind(&signup.dealership_name)
            .bind(&signup.dealership_phone)
            .bind(&signup.dealership_lead_email)
            .bind(&signup.dealership_billing_email)
            .bind(&signup.dealership_website)
            .bind(&signup.dealership_additional_websites)
            .bind(&signup.dealership_domain)
            .bind(signup.dealership_country.as_str())
            .bind(&signup.dealer_group_domain)
            .bind(&signup.contact_full_name)
            .bind(&signup.contact_email)
            .bind(&signup.contact_phone)
            .bind(&providers)
            .bind(&signup.lead_option)
            .bind(&signup.agent_id)
            .bind(&signup.lead_address)
            .bind(signup.email_verified)
            .bind(signup.verified_at)
            .bind(token_hash)
            .bind(token_expires_at)
            .bind(signup.created_at)
            .bind(signup.updated_at)
            .execute(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        Ok(signup)
    }

    async fn update_verification(
        &self,
        email: &str,
        update: VerificationUpdate,
    ) -> DomainResult<Option<DealerSignup>> {
        let (token_hash, token_expires_at) = match &update.verification {
            Some(token) => (Some(token.secret_hash.clone()), Some(token.expires_at)),
            None => (None, None),
        };

        let query = r#"
            UPDATE dealer_signups
            SET token_hash = ?, token_expires_at = ?, email_verified = ?,
                verified_at = ?, updated_at = ?
            WHERE contact_email = ?
        "#;

        sqlx::query(query)
            .bind(token_hash)
            .bind(token_expires_at)
            .bind(update.email_verified)
            .bind(update.verified_at)
            .bind(update.updated_at)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        // Re-read rather than trusting rows_affected: MySQL reports zero
        // affected rows when the update is a no-op on identical values.
        self.find_by_contact_email(email).await
    }

    async fn onboarded_names(&self) -> DomainResult<Vec<String>> {
        let rows = sqlx::query("SELECT dealership_name FROM dealer_signups")
            .fetch_all(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        rows.iter()
            .map(|row| row.try_get("dealership_name").map_err(OnboardingError::store))
            .collect()
    }
}
