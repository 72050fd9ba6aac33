//! MySQL repository implementations.

pub mod agent_repository_impl;
pub mod dealer_repository_impl;
pub mod group_repository_impl;
pub mod inventory_repository_impl;
pub mod lender_repository_impl;

pub use agent_repository_impl::MySqlAgentRepository;
pub use dealer_repository_impl::MySqlDealerRepository;
pub use group_repository_impl::MySqlDealerGroupRepository;
pub use inventory_repository_impl::MySqlInventoryRepository;
pub use lender_repository_impl::MySqlLenderRepository;
