//! Environment-driven configuration.
//!
//! Each config struct is populated from environment variables (loaded from a
//! `.env` file by the binary) and falls back to development defaults so the
//! server can start locally without a full environment.

pub mod database;
pub mod onboarding;
pub mod server;
pub mod smtp;

pub use database::DatabaseConfig;
pub use onboarding::OnboardingConfig;
pub use server::ServerConfig;
pub use smtp::SmtpConfig;

use std::env;

/// Read an environment variable with a fallback default.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
