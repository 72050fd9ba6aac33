//! Infrastructure layer: concrete implementations behind the core traits.
//!
//! - `database`: MySQL repositories using SQLx
//! - `email`: SMTP delivery of verification emails via lettre

pub mod database;
pub mod email;
