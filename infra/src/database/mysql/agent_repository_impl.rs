//! MySQL implementation of the sales agent repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ob_core::domain::entities::agent::Agent;
use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::repositories::AgentRepository;

/// MySQL-backed agent lookup
pub struct MySqlAgentRepository {
    pool: MySqlPool,
}

impl MySqlAgentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_agent(row: &sqlx::mysql::MySqlRow) -> DomainResult<Agent> {
        Ok(Agent {
            agent_id: row.try_get("agent_id").map_err(OnboardingError::store)?,
            agency: row.try_get("agency").map_err(OnboardingError::store)?,
            first_name: row.try_get("first_name").map_err(OnboardingError::store)?,
            last_name: row.try_get("last_name").map_err(OnboardingError::store)?,
            email: row.try_get("email").map_err(OnboardingError::store)?,
            phone: row.try_get("phone").map_err(OnboardingError::store)?,
        })
    }
}

#[async_trait]
impl AgentRepository for MySqlAgentRepository {
    async fn find_by_agent_id(&self, agent_id: &str) -> DomainResult<Option<Agent>> {
        let query = "SELECT agent_id, agency, first_name, last_name, email, phone \
                     FROM agents WHERE agent_id = ? LIMIT 1";
        let row = sqlx::query(query)
            .bind(agent_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(OnboardingError::store)?;

        match row {
            Some(row) => Ok(Some(Self::row_to_agent(&row)?)),
            None => Ok(None),
        }
    }
}
