//! Domain entities.

pub mod agent;
pub mod dealer;
pub mod dealer_group;
pub mod inventory;
pub mod lender;
pub mod verification_token;

pub use agent::Agent;
pub use dealer::{Country, DealerApplication, DealerSignup, VerificationUpdate};
pub use dealer_group::{DealerGroup, GroupApplication};
pub use inventory::InventorySeller;
pub use lender::Lender;
pub use verification_token::VerificationToken;
