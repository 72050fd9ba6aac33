//! Sales agent entity (read-only, used to validate referral ids).

use serde::{Deserialize, Serialize};

/// A sales agent referenced by `agent_id` on dealer signups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub agency: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Agent {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            agency: None,
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
        }
    }
}
