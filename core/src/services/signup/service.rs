//! Signup service: validates applications, enforces the business rules,
//! creates records and kicks off email verification.

use std::sync::Arc;
use tracing;

use crate::domain::entities::dealer::{Country, DealerApplication, DealerSignup};
use crate::domain::entities::dealer_group::{DealerGroup, GroupApplication};
use crate::domain::entities::verification_token::VerificationToken;
use crate::domain::validation;
use crate::errors::{DomainResult, FieldError, OnboardingError};
use crate::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
};
use crate::services::notification::EmailSender;
use crate::services::verification::VerificationService;

/// Service handling new dealer and dealer-group applications
pub struct SignupService<D, G, A, I, M>
where
    D: DealerRepository,
    G: DealerGroupRepository,
    A: AgentRepository,
    I: InventoryRepository,
    M: EmailSender,
{
    dealers: Arc<D>,
    groups: Arc<G>,
    agents: Arc<A>,
    inventory: Arc<I>,
    verification: Arc<VerificationService<D, M>>,
}

impl<D, G, A, I, M> SignupService<D, G, A, I, M>
where
    D: DealerRepository,
    G: DealerGroupRepository,
    A: AgentRepository,
    I: InventoryRepository,
    M: EmailSender,
{
    pub fn new(
        dealers: Arc<D>,
        groups: Arc<G>,
        agents: Arc<A>,
        inventory: Arc<I>,
        verification: Arc<VerificationService<D, M>>,
    ) -> Self {
        Self {
            dealers,
            groups,
            agents,
            inventory,
            verification,
        }
    }

    /// Register a new dealer.
    ///
    /// Order of checks: agent referral, field validation (after phone
    /// normalization), domain match between contact email and website,
    /// inventory claim, duplicate domain. The first failure wins.
    /// The record is written before the verification email goes out;
    /// a mail failure leaves the record in place with its token, so the
    /// resend link still works.
    pub async fn register_dealer(
        &self,
        mut application: DealerApplication,
    ) -> DomainResult<DealerSignup> {
        if let Some(agent_id) = &application.agent_id {
            if self.agents.find_by_agent_id(agent_id).await?.is_none() {
                tracing::warn!(
                    agent_id = %agent_id,
                    event = "unknown_agent_referral",
                    "Signup submitted with unknown agent id"
                );
                return Err(OnboardingError::not_found("agent"));
            }
        }

        // Normalize phones before validation; unparseable ones fall
        // through and fail the phone check below.
        if let Some(formatted) = validation::format_phone_number(&application.dealership_phone) {
            application.dealership_phone = formatted;
        }
        if let Some(formatted) = validation::format_phone_number(&application.contact_phone) {
            application.contact_phone = formatted;
        }

        let fields = validation::validate_dealer(&application);
        if !fields.is_empty() {
            return Err(OnboardingError::Validation { fields });
        }

        // validate_dealer guarantees both parse
        let country = Country::parse(&application.dealership_country)
            .ok_or_else(|| OnboardingError::internal("country failed to parse after validation"))?;
        let domain = validation::website_domain(&application.dealership_website)
            .ok_or_else(|| OnboardingError::internal("website failed to parse after validation"))?;

        let email_domain = validation::email_domain(&application.contact_email)
            .ok_or_else(|| OnboardingError::internal("email failed to parse after validation"))?;
        if domain != email_domain {
            return Err(OnboardingError::BusinessRule {
                message: format!(
                    "Email and website domains must match. ({domain}, {email_domain})"
                ),
            });
        }

        if !self.inventory.domain_has_inventory(&domain, country).await? {
            return Err(OnboardingError::BusinessRule {
                message: "Dealership website must have inventory to claim.".to_string(),
            });
        }

        if self.dealers.find_by_domain(&domain).await?.is_some() {
            return Err(OnboardingError::BusinessRule {
                message: "Dealership domain already exists in system.".to_string(),
            });
        }

        let (secret, token) = VerificationToken::issue()?;
        let signup = DealerSignup::new(application, domain, country, token);
        let signup = self.dealers.insert(signup).await?;

        tracing::info!(
            email = %signup.contact_email,
            domain = %signup.dealership_domain,
            event = "dealer_registered",
            "New dealer signup recorded"
        );

        self.verification
            .send_verification_email(&signup, &secret)
            .await?;
        Ok(signup)
    }

    /// Register a new dealer group
    pub async fn register_group(&self, application: GroupApplication) -> DomainResult<DealerGroup> {
        let fields = validation::validate_group(&application);
        if !fields.is_empty() {
            return Err(OnboardingError::Validation { fields });
        }

        let domain = validation::website_domain(&application.dealer_group_website)
            .ok_or_else(|| {
                OnboardingError::Validation {
                    fields: vec![FieldError::new(
                        "dealer_group_website",
                        "Please enter a valid website URL.",
                    )],
                }
            })?;

        if self.groups.find_by_website(&domain).await?.is_some() {
            return Err(OnboardingError::BusinessRule {
                message: "Dealer group domain already exists in system.".to_string(),
            });
        }

        let group = DealerGroup::new(application.dealer_group_name, domain);
        let group = self.groups.insert(group).await?;

        tracing::info!(
            domain = %group.dealer_group_website,
            event = "dealer_group_registered",
            "New dealer group recorded"
        );
        Ok(group)
    }
}
