//! MySQL implementations of the core repository traits.

pub mod connection;
pub mod mysql;

pub use mysql::{
    MySqlAgentRepository, MySqlDealerGroupRepository, MySqlDealerRepository,
    MySqlInventoryRepository, MySqlLenderRepository,
};
