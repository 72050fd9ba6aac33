//! Email verification: link encoding, token checks, state transitions.

pub mod config;
pub mod link;
pub mod service;

pub use config::VerificationConfig;
pub use link::{ResendPayload, VerifyPayload};
pub use service::VerificationService;
