//! Lender repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::lender::Lender;
use crate::errors::DomainResult;

/// Read-only lender lookup for the signup form autocomplete
#[async_trait]
pub trait LenderRepository: Send + Sync {
    /// Prefix-match lenders by display name
    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<Lender>>;
}

/// In-memory lender repository
pub struct MockLenderRepository {
    lenders: Arc<RwLock<Vec<Lender>>>,
}

impl MockLenderRepository {
    pub fn new() -> Self {
        Self {
            lenders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn put(&self, lender: Lender) {
        let mut lenders = self.lenders.write().await;
        lenders.push(lender);
    }
}

impl Default for MockLenderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LenderRepository for MockLenderRepository {
    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<Lender>> {
        let lenders = self.lenders.read().await;
        let query = query.to_lowercase();
        let mut matches: Vec<Lender> = lenders
            .iter()
            .filter(|l| l.name.to_lowercase().starts_with(&query))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}
