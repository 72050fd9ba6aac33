//! Dealer group repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::dealer_group::DealerGroup;
use crate::errors::{DomainResult, OnboardingError};

/// Store access for dealer groups, keyed by website domain
#[async_trait]
pub trait DealerGroupRepository: Send + Sync {
    async fn find_by_website(&self, domain: &str) -> DomainResult<Option<DealerGroup>>;

    async fn insert(&self, group: DealerGroup) -> DomainResult<DealerGroup>;

    /// Prefix-match groups by name for the signup form autocomplete
    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<DealerGroup>>;
}

/// In-memory group repository keyed by website domain
pub struct MockDealerGroupRepository {
    groups: Arc<RwLock<HashMap<String, DealerGroup>>>,
}

impl MockDealerGroupRepository {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn put(&self, group: DealerGroup) {
        let mut groups = self.groups.write().await;
        groups.insert(group.dealer_group_website.clone(), group);
    }
}

impl Default for MockDealerGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DealerGroupRepository for MockDealerGroupRepository {
    async fn find_by_website(&self, domain: &str) -> DomainResult<Option<DealerGroup>> {
        let groups = self.groups.read().await;
        Ok(groups.get(domain).cloned())
    }

    async fn insert(&self, group: DealerGroup) -> DomainResult<DealerGroup> {
        let mut groups = self.groups.write().await;
        if groups.contains_key(&group.dealer_group_website) {
            return Err(OnboardingError::store("duplicate group website"));
        }
        groups.insert(group.dealer_group_website.clone(), group.clone());
        Ok(group)
    }

    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<DealerGroup>> {
        let groups = self.groups.read().await;
        let query = query.to_lowercase();
        let mut matches: Vec<DealerGroup> = groups
            .values()
            .filter(|g| g.dealer_group_name.to_lowercase().starts_with(&query))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.dealer_group_name.cmp(&b.dealer_group_name));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_domain() {
        let repo = MockDealerGroupRepository::new();
        repo.insert(DealerGroup::new("A Group".into(), "agroup.com".into()))
            .await
            .unwrap();
        let result = repo
            .insert(DealerGroup::new("Other Name".into(), "agroup.com".into()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_search_is_prefix_and_limited() {
        let repo = MockDealerGroupRepository::new();
        for i in 0..5 {
            repo.put(DealerGroup::new(
                format!("Prairie Group {i}"),
                format!("prairie{i}.ca"),
            ))
            .await;
        }
        repo.put(DealerGroup::new("Coastal Group".into(), "coastal.ca".into()))
            .await;

        let matches = repo.search_by_name("prairie", 3).await.unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches
            .iter()
            .all(|g| g.dealer_group_name.starts_with("Prairie")));
    }
}
