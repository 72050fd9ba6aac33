//! Inventory seller repository.
//!
//! Inventory is partitioned by country; every operation names the
//! partition it reads.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::dealer::Country;
use crate::domain::entities::inventory::InventorySeller;
use crate::errors::DomainResult;

/// Read-only access to the per-country inventory feed
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Whether any listing in the country's feed claims the given
    /// website domain.
    async fn domain_has_inventory(&self, domain: &str, country: Country) -> DomainResult<bool>;

    /// Prefix-match sellers by domain for the signup form autocomplete,
    /// deduplicated to one entry per seller.
    async fn search_by_domain(
        &self,
        query: &str,
        country: Country,
        limit: u32,
    ) -> DomainResult<Vec<InventorySeller>>;
}

/// In-memory inventory repository partitioned by country
pub struct MockInventoryRepository {
    sellers: Arc<RwLock<HashMap<Country, Vec<InventorySeller>>>>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self {
            sellers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn put(&self, country: Country, seller: InventorySeller) {
        let mut sellers = self.sellers.write().await;
        sellers.entry(country).or_default().push(seller);
    }
}

impl Default for MockInventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn domain_has_inventory(&self, domain: &str, country: Country) -> DomainResult<bool> {
        let sellers = self.sellers.read().await;
        Ok(sellers
            .get(&country)
            .map(|list| {
                list.iter().any(|s| {
                    s.domains
                        .split(',')
                        .any(|d| d.trim().eq_ignore_ascii_case(domain))
                })
            })
            .unwrap_or(false))
    }

    async fn search_by_domain(
        &self,
        query: &str,
        country: Country,
        limit: u32,
    ) -> DomainResult<Vec<InventorySeller>> {
        let sellers = self.sellers.read().await;
        let query = query.to_lowercase();
        let mut matches: Vec<InventorySeller> = sellers
            .get(&country)
            .map(|list| {
                list.iter()
                    .filter(|s| {
                        s.domains
                            .split(',')
                            .any(|d| d.trim().to_lowercase().starts_with(&query))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        matches.dedup_by(|a, b| a.name == b.name);
        matches.truncate(limit as usize);
        Ok(matches)
    }
}
