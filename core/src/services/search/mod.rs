//! Autocomplete search backing the signup form.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::dealer::Country;
use crate::domain::entities::dealer_group::DealerGroup;
use crate::domain::entities::inventory::InventorySeller;
use crate::domain::entities::lender::Lender;
use crate::errors::DomainResult;
use crate::repositories::{
    DealerGroupRepository, DealerRepository, InventoryRepository, LenderRepository,
};

/// Maximum results per autocomplete query
pub const SEARCH_LIMIT: u32 = 10;

/// An inventory seller annotated with whether it already signed up
#[derive(Debug, Clone, Serialize)]
pub struct SellerMatch {
    #[serde(flatten)]
    pub seller: InventorySeller,
    pub onboarded: bool,
}

/// Read-only search over lenders, groups and inventory sellers
pub struct SearchService<L, G, I, D>
where
    L: LenderRepository,
    G: DealerGroupRepository,
    I: InventoryRepository,
    D: DealerRepository,
{
    lenders: Arc<L>,
    groups: Arc<G>,
    inventory: Arc<I>,
    dealers: Arc<D>,
}

impl<L, G, I, D> SearchService<L, G, I, D>
where
    L: LenderRepository,
    G: DealerGroupRepository,
    I: InventoryRepository,
    D: DealerRepository,
{
    pub fn new(lenders: Arc<L>, groups: Arc<G>, inventory: Arc<I>, dealers: Arc<D>) -> Self {
        Self {
            lenders,
            groups,
            inventory,
            dealers,
        }
    }

    pub async fn lenders(&self, query: &str) -> DomainResult<Vec<Lender>> {
        self.lenders.search_by_name(query, SEARCH_LIMIT).await
    }

    pub async fn dealer_groups(&self, query: &str) -> DomainResult<Vec<DealerGroup>> {
        self.groups.search_by_name(query, SEARCH_LIMIT).await
    }

    /// Search inventory sellers by website domain, flagging each match
    /// that already has a dealer signup.
    pub async fn dealers(&self, query: &str, country: Country) -> DomainResult<Vec<SellerMatch>> {
        let sellers = self
            .inventory
            .search_by_domain(query, country, SEARCH_LIMIT)
            .await?;
        let onboarded: HashSet<String> = self.dealers.onboarded_names().await?.into_iter().collect();

        Ok(sellers
            .into_iter()
            .map(|seller| {
                let is_onboarded = onboarded.contains(&seller.name);
                SellerMatch {
                    seller,
                    onboarded: is_onboarded,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dealer::{DealerApplication, DealerSignup};
    use crate::domain::entities::verification_token::VerificationToken;
    use crate::repositories::{
        MockDealerGroupRepository, MockDealerRepository, MockInventoryRepository,
        MockLenderRepository,
    };
    use chrono::{Duration, Utc};

    fn service() -> (
        Arc<MockLenderRepository>,
        Arc<MockDealerGroupRepository>,
        Arc<MockInventoryRepository>,
        Arc<MockDealerRepository>,
        SearchService<
            MockLenderRepository,
            MockDealerGroupRepository,
            MockInventoryRepository,
            MockDealerRepository,
        >,
    ) {
        let lenders = Arc::new(MockLenderRepository::new());
        let groups = Arc::new(MockDealerGroupRepository::new());
        let inventory = Arc::new(MockInventoryRepository::new());
        let dealers = Arc::new(MockDealerRepository::new());
        let service = SearchService::new(
            lenders.clone(),
            groups.clone(),
            inventory.clone(),
            dealers.clone(),
        );
        (lenders, groups, inventory, dealers, service)
    }

    #[tokio::test]
    async fn test_lender_search() {
        let (lenders, _, _, _, service) = service();
        lenders.put(Lender::new("NB", "Northern Bank")).await;
        lenders.put(Lender::new("SF", "Southern Finance")).await;

        let matches = service.lenders("north").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].code, "NB");
    }

    #[tokio::test]
    async fn test_dealer_search_flags_onboarded_sellers() {
        let (_, _, inventory, dealers, service) = service();
        inventory
            .put(
                Country::Us,
                InventorySeller::new("Alpha Autos", "alphaautos.com"),
            )
            .await;
        inventory
            .put(
                Country::Us,
                InventorySeller::new("Alpine Motors", "alpinemotors.com"),
            )
            .await;

        let application = DealerApplication {
            dealership_name: "Alpha Autos".to_string(),
            contact_email: "sales@alphaautos.com".to_string(),
            ..Default::default()
        };
        let token = VerificationToken {
            secret_hash: "$2b$04$hash".to_string(),
            expires_at: Utc::now() + Duration::hours(24),
        };
        dealers
            .put(DealerSignup::new(
                application,
                "alphaautos.com".to_string(),
                Country::Us,
                token,
            ))
            .await;

        let matches = service.dealers("alp", Country::Us).await.unwrap();
        assert_eq!(matches.len(), 2);
        let alpha = matches.iter().find(|m| m.seller.name == "Alpha Autos").unwrap();
        let alpine = matches.iter().find(|m| m.seller.name == "Alpine Motors").unwrap();
        assert!(alpha.onboarded);
        assert!(!alpine.onboarded);
    }

    #[tokio::test]
    async fn test_seller_match_serialization_is_flat() {
        let seller = InventorySeller::new("Alpha Autos", "alphaautos.com");
        let json = serde_json::to_value(SellerMatch {
            seller,
            onboarded: true,
        })
        .unwrap();
        assert_eq!(json["name"], "Alpha Autos");
        assert_eq!(json["onboarded"], true);
    }
}
