//! Dealer signup record: the central entity of the onboarding flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_token::VerificationToken;

/// Countries the onboarding flow accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
}

impl Country {
    /// Parse the two-letter country code used on the wire
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "US" => Some(Country::Us),
            "CA" => Some(Country::Ca),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Ca => "CA",
        }
    }
}

/// Sentinel timestamp meaning "event has not occurred"
pub fn epoch_zero() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Whitelisted signup input, before validation and server-side enrichment.
///
/// Unknown fields submitted by the client are dropped during
/// deserialization at the boundary; only these make it into the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealerApplication {
    pub dealership_name: String,
    pub dealership_phone: String,
    pub dealership_lead_email: String,
    pub dealership_billing_email: String,
    pub dealership_website: String,
    pub dealership_additional_websites: Option<String>,
    pub dealership_country: String,
    pub dealer_group_domain: Option<String>,
    pub contact_full_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub dealership_providers: Vec<String>,
    pub lead_option: Option<String>,
    pub agent_id: Option<String>,
}

/// Persisted dealer signup record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealerSignup {
    pub id: Uuid,
    pub dealership_name: String,
    pub dealership_phone: String,
    pub dealership_lead_email: String,
    pub dealership_billing_email: String,
    pub dealership_website: String,
    pub dealership_additional_websites: Option<String>,
    /// Hostname of the dealership website, www-stripped; unique per signup
    pub dealership_domain: String,
    pub dealership_country: Country,
    pub dealer_group_domain: Option<String>,
    pub contact_full_name: String,
    /// Unique contact identity; one active signup per email
    pub contact_email: String,
    pub contact_phone: String,
    pub dealership_providers: Vec<String>,
    pub lead_option: Option<String>,
    pub agent_id: Option<String>,

    /// Outbound lead address, provisioned by a downstream job after signup
    pub lead_address: Option<String>,

    /// Whether the contact email has been verified
    pub email_verified: bool,

    /// When verification happened; epoch zero until then
    pub verified_at: DateTime<Utc>,

    /// The currently active verification token, if any.
    /// At most one token is valid at a time; issuing a new one replaces
    /// the previous one wholesale.
    pub verification: Option<VerificationToken>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DealerSignup {
    /// Build a new unverified record from a validated application.
    ///
    /// `domain` and `country` are the server-derived fields; `token` is the
    /// freshly issued verification token.
    pub fn new(
        application: DealerApplication,
        domain: String,
        country: Country,
        token: VerificationToken,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            dealership_name: application.dealership_name,
            dealership_phone: application.dealership_phone,
            dealership_lead_email: application.dealership_lead_email,
            dealership_billing_email: application.dealership_billing_email,
            dealership_website: application.dealership_website,
            dealership_additional_websites: application.dealership_additional_websites,
            dealership_domain: domain,
            dealership_country: country,
            dealer_group_domain: application.dealer_group_domain,
            contact_full_name: application.contact_full_name,
            contact_email: application.contact_email,
            contact_phone: application.contact_phone,
            dealership_providers: application.dealership_providers,
            lead_option: application.lead_option,
            agent_id: application.agent_id,
            lead_address: None,
            email_verified: false,
            verified_at: epoch_zero(),
            verification: Some(token),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether an unexpired token is currently attached
    pub fn has_active_token(&self) -> bool {
        self.verification
            .as_ref()
            .map(|t| !t.is_expired())
            .unwrap_or(false)
    }
}

/// Atomic verification-state write applied to a record by email.
///
/// All four fields are replaced in a single store update so concurrent
/// verify/resend requests never observe a torn mix.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationUpdate {
    pub verification: Option<VerificationToken>,
    pub email_verified: bool,
    pub verified_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VerificationUpdate {
    /// Successful verification: clear the token, set the flags.
    pub fn verified(now: DateTime<Utc>) -> Self {
        Self {
            verification: None,
            email_verified: true,
            verified_at: now,
            updated_at: now,
        }
    }

    /// Token reissue on resend: replace the token and defensively reset
    /// the verified state.
    pub fn reissued(token: VerificationToken, now: DateTime<Utc>) -> Self {
        Self {
            verification: Some(token),
            email_verified: false,
            verified_at: epoch_zero(),
            updated_at: now,
        }
    }
}
