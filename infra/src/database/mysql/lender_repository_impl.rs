//! MySQL implementation of the lender repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ob_core::domain::entities::lender::Lender;
use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::repositories::LenderRepository;

/// MySQL-backed lender lookup
pub struct MySqlLenderRepository {
    pool: MySqlPool,
}

impl MySqlLenderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LenderRepository for MySqlLenderRepository {
    async fn search_by_name(&self, query: &str, limit: u32) -> DomainResult<Vec<Lender>> {
        let sql = "SELECT code, name, country FROM lenders \
                   WHERE name LIKE CONCAT(?, '%') \
                   ORDER BY name LIMIT ?";
        let rows = sqlx::query(sql)
            .bind(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        rows.iter()
            .map(|row| {
                Ok(Lender {
                    code: row.try_get("code").map_err(OnboardingError::store)?,
                    name: row.try_get("name").map_err(OnboardingError::store)?,
                    country: row.try_get("country").map_err(OnboardingError::store)?,
                })
            })
            .collect()
    }
}
