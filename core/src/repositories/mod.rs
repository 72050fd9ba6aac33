//! Repository abstractions over the record store.
//!
//! Each trait is implemented once against MySQL in the infra crate and
//! once as an in-memory mock here. The mocks back the service unit tests
//! and the HTTP integration tests.

pub mod agent;
pub mod dealer;
pub mod group;
pub mod inventory;
pub mod lender;

pub use agent::{AgentRepository, MockAgentRepository};
pub use dealer::{DealerRepository, MockDealerRepository};
pub use group::{DealerGroupRepository, MockDealerGroupRepository};
pub use inventory::{InventoryRepository, MockInventoryRepository};
pub use lender::{LenderRepository, MockLenderRepository};
