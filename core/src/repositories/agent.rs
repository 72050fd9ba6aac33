//! Sales agent repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::agent::Agent;
use crate::errors::DomainResult;

/// Read-only lookup of sales agents by their referral id
#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn find_by_agent_id(&self, agent_id: &str) -> DomainResult<Option<Agent>>;
}

/// In-memory agent repository
pub struct MockAgentRepository {
    agents: Arc<RwLock<HashMap<String, Agent>>>,
}

impl MockAgentRepository {
    pub fn new() -> Self {
        Self {
            agents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn put(&self, agent: Agent) {
        let mut agents = self.agents.write().await;
        agents.insert(agent.agent_id.clone(), agent);
    }
}

impl Default for MockAgentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentRepository for MockAgentRepository {
    async fn find_by_agent_id(&self, agent_id: &str) -> DomainResult<Option<Agent>> {
        let agents = self.agents.read().await;
        Ok(agents.get(agent_id).cloned())
    }
}
