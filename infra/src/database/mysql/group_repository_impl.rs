//! MySQL implementation of the dealer group repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ob_core::domain::entities::dealer::Country;
use ob_core::domain::entities::dealer_group::DealerGroup;
use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::repositories::DealerGroupRepository;

const GROUP_COLUMNS: &str = "id, record_type, dealer_group_name, dealer_group_website, \
     dealer_group_country, user_created, created_at";

/// MySQL-backed dealer group repository
pub struct MySqlDealerGroupRepository {
    pool: MySqlPool,
}

impl MySqlDealerGroupRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_group(row: &sqlx::mysql::MySqlRow) -> DomainResult<DealerGroup> {
        let id: String = row.try_get("id").map_err(OnboardingError::store)?;
        let country: Option<String> = row
            .try_get("dealer_group_country")
            .map_err(OnboardingError::store)?;

        Ok(DealerGroup {
            id: Uuid::parse_str(&id).map_err(OnboardingError::store)?,
            record_type: row.try_get("record_type").map_err(OnboardingError::store)?,
            dealer_group_name: row
                .try_get("dealer_group_name")
                .map_err(OnboardingError::store)?,
            dealer_group_website: row
                .try_get("dealer_group_website")
                .map_err(OnboardingError::store)?,
            dealer_group_country: country.as_deref().and_then(Country::parse),
            user_created: row.try_get("user_created").map_err(OnboardingError::store)?,
            created_at: row.try_get("created_at").map_err(OnboardingError::store)?,
        })
    }
}

#[async_trait]
impl DealerGroupRepository for MySqlDealerGroupRepository {
    async fn find_by_website(&self, domain: &str) -> DomainResult<Option<DealerGroup>> {
        let query = format!(
            "SELECT {GROUP_COLUMNS} FROM dealer_groups WHERE dealer_group_website = ? LIMIT 1"
        );
        let row = sqlx::query(&query)
            .bind(domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_group(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, group: DealerGroup) -> DomainResult<DealerGroup> {
        let query = r#"
            INSERT INTO dealer_groups (
                id, record_type, dealer_group_name, dealer_group_website,
                dealer_group_country, user_created, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(group.id.to_string())
            .bind(&group.record_type)
            .bind(&group.dealer_group_name)
            .bind(&group.dealer_group_website)
            .bind(group.dealer_group_country.map(|c| c.as_str()))
            .bind(group.user_created)
            .bind(group.created_at)
            .execute(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        Ok(group)
    }

    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<DealerGroup>> {
        let sql = format!(
            "SELECT {GROUP_COLUMNS} FROM dealer_groups \
             WHERE dealer_group_name LIKE CONCAT(?, '%') \
             ORDER BY dealer_group_name LIMIT ?"
        );
        let rows = sqlx::query(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        rows.iter().map(Self::row_to_group).collect()
    }
}
