//! Dealer group entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dealer::Country;

/// Record type tag stored on user-created groups
pub const GROUP_RECORD_TYPE: &str = "dealer_group";

/// Whitelisted dealer-group signup input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupApplication {
    pub dealer_group_name: String,
    pub dealer_group_website: String,
}

/// A dealer group (a parent organization owning multiple dealerships).
///
/// Serialization is shaped for the autocomplete endpoint: only the name,
/// website and country are projected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealerGroup {
    #[serde(skip_serializing)]
    pub id: Uuid,

    /// Record type tag; user-created groups are tagged `dealer_group`
    #[serde(skip_serializing)]
    pub record_type: String,

    pub dealer_group_name: String,

    /// Group website, normalized to its www-stripped hostname
    pub dealer_group_website: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_group_country: Option<Country>,

    /// Whether this group was created through the signup form (as opposed
    /// to seeded from upstream data)
    #[serde(skip_serializing)]
    pub user_created: bool,

    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

impl DealerGroup {
    /// Create a user-submitted group with a normalized website domain
    pub fn new(name: String, website_domain: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_type: GROUP_RECORD_TYPE.to_string(),
            dealer_group_name: name,
            dealer_group_website: website_domain,
            dealer_group_country: None,
            user_created: true,
            created_at: Utc::now(),
        }
    }
}
