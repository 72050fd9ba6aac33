//! MySQL implementation of the inventory seller repository.
//!
//! The inventory feed is loaded into one table per country
//! (`inventory_us`, `inventory_ca`); queries pick the table by the
//! country the caller names.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ob_core::domain::entities::dealer::Country;
use ob_core::domain::entities::inventory::InventorySeller;
use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::repositories::InventoryRepository;

const SELLER_COLUMNS: &str =
    "name, address, city, state, country, zip, websites, domains, phones, seller_type, makes";

fn table_for(country: Country) -> &'static str {
    match country {
        Country::Us => "inventory_us",
        Country::Ca => "inventory_ca",
    }
}

/// MySQL-backed inventory lookup
pub struct MySqlInventoryRepository {
    pool: MySqlPool,
}

impl MySqlInventoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_seller(row: &sqlx::mysql::MySqlRow) -> DomainResult<InventorySeller> {
        Ok(InventorySeller {
            name: row.try_get("name").map_err(OnboardingError::store)?,
            address: row.try_get("address").map_err(OnboardingError::store)?,
            city: row.try_get("city").map_err(OnboardingError::store)?,
            state: row.try_get("state").map_err(OnboardingError::store)?,
            country: row.try_get("country").map_err(OnboardingError::store)?,
            zip: row.try_get("zip").map_err(OnboardingError::store)?,
            websites: row.try_get("websites").map_err(OnboardingError::store)?,
            domains: row.try_get("domains").map_err(OnboardingError::store)?,
            phones: row.try_get("phones").map_err(OnboardingError::store)?,
            seller_type: row.try_get("seller_type").map_err(OnboardingError::store)?,
            makes: row.try_get("makes").map_err(OnboardingError::store)?,
        })
    }
}

#[async_trait]
impl InventoryRepository for MySqlInventoryRepository {
    async fn domain_has_inventory(&self, domain: &str, country: Country) -> DomainResult<bool> {
        // `domains` holds a comma-separated list; FIND_IN_SET handles
        // exact membership without LIKE false positives.
        let query = format!(
            "SELECT EXISTS( \
                SELECT 1 FROM {} \
                WHERE FIND_IN_SET(?, REPLACE(domains, ', ', ',')) > 0 \
             ) AS has_listing",
            table_for(country)
        );
        let row = sqlx::query(&query)
            .bind(domain)
            .fetch_one(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        let has_listing: i8 = row.try_get("has_listing").map_err(OnboardingError::store)?;
        Ok(has_listing == 1)
    }

    async fn search_by_domain(
        &self,
        query: &str,
        country: Country,
        limit: u32,
    ) -> DomainResult<Vec<InventorySeller>> {
        let sql = format!(
            "SELECT DISTINCT {SELLER_COLUMNS} FROM {} \
             WHERE domains LIKE CONCAT(?, '%') \
             ORDER BY name LIMIT ?",
            table_for(country)
        );
        let rows = sqlx::query(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        rows.iter().map(Self::row_to_seller).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_selection() {
        assert_eq!(table_for(Country::Us), "inventory_us");
        assert_eq!(table_for(Country::Ca), "inventory_ca");
    }
}
