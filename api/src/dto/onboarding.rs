//! Onboarding request DTOs.
//!
//! Deserialization is the whitelist: anything a client sends beyond
//! these fields is dropped before the core ever sees it. The validator
//! bounds here are coarse length limits; real field validation happens
//! in the core so the error shape is consistent.

use serde::Deserialize;
use validator::Validate;

use ob_core::domain::entities::dealer::DealerApplication;
use ob_core::domain::entities::dealer_group::GroupApplication;

/// Body of POST /new-dealer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewDealerRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub dealership_name: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub dealership_phone: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub dealership_lead_email: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub dealership_billing_email: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub dealership_website: String,

    #[validate(length(max = 1000))]
    pub dealership_additional_websites: Option<String>,

    #[validate(length(max = 10))]
    #[serde(default)]
    pub dealership_country: String,

    #[validate(length(max = 200))]
    pub dealer_group_domain: Option<String>,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub contact_full_name: String,

    #[validate(length(max = 320))]
    #[serde(default)]
    pub contact_email: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub contact_phone: String,

    #[serde(default)]
    pub dealership_providers: Vec<String>,

    #[validate(length(max = 100))]
    pub lead_option: Option<String>,

    #[validate(length(max = 100))]
    pub agent_id: Option<String>,
}

impl NewDealerRequest {
    pub fn into_application(self) -> DealerApplication {
        DealerApplication {
            dealership_name: self.dealership_name,
            dealership_phone: self.dealership_phone,
            dealership_lead_email: self.dealership_lead_email,
            dealership_billing_email: self.dealership_billing_email,
            dealership_website: self.dealership_website,
            dealership_additional_websites: self.dealership_additional_websites,
            dealership_country: self.dealership_country,
            dealer_group_domain: self.dealer_group_domain,
            contact_full_name: self.contact_full_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            dealership_providers: self.dealership_providers,
            lead_option: self.lead_option,
            agent_id: self.agent_id,
        }
    }
}

/// Body of POST /new-dealer-group
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewDealerGroupRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub dealer_group_name: String,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub dealer_group_website: String,
}

impl NewDealerGroupRequest {
    pub fn into_application(self) -> GroupApplication {
        GroupApplication {
            dealer_group_name: self.dealer_group_name,
            dealer_group_website: self.dealer_group_website,
        }
    }
}

/// Query string of the emailed link endpoints (`?data=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct EncodedLinkQuery {
    pub data: Option<String>,
}

/// Query string of the autocomplete search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub country: Option<String>,
}
