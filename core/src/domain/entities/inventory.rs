//! Inventory seller entity (read-only, sourced from the vehicle listing feed).
//!
//! Listings are keyed by seller; search deduplicates listings down to one
//! seller summary per dealership.

use serde::{Deserialize, Serialize};

/// A dealership as it appears in the inventory feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySeller {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub websites: Option<String>,
    /// Comma-separated website domains; the field autocomplete matches on
    pub domains: String,
    pub phones: Option<String>,
    pub seller_type: Option<String>,
    pub makes: Option<String>,
}

impl InventorySeller {
    pub fn new(name: impl Into<String>, domains: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            city: None,
            state: None,
            country: None,
            zip: None,
            websites: None,
            domains: domains.into(),
            phones: None,
            seller_type: None,
            makes: None,
        }
    }
}
