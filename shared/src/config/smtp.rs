//! Outbound mail (SMTP) configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::env_or;

/// SMTP relay configuration for the verification mailer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP host
    pub host: String,

    /// SMTP port (587 for STARTTLS, 465 for implicit TLS)
    pub port: u16,

    /// Relay username, if the relay requires authentication
    pub username: Option<String>,

    /// Relay password
    pub password: Option<String>,

    /// Whether to negotiate TLS with the relay
    pub use_tls: bool,

    /// Display name used in the From header
    pub from_name: String,

    /// Address used in the From header
    pub from_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 587,
            username: None,
            password: None,
            use_tls: false,
            from_name: String::from("Dealer Onboarding"),
            from_address: String::from("no-reply@localhost"),
        }
    }
}

impl SmtpConfig {
    /// Load from `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS`,
    /// `SMTP_TLS`, `SMTP_FROM_NAME`, `SMTP_FROM_ADDRESS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("SMTP_HOST", &defaults.host),
            port: env_or("SMTP_PORT", "587").parse().unwrap_or(defaults.port),
            username: env::var("SMTP_USER").ok(),
            password: env::var("SMTP_PASS").ok(),
            use_tls: env_or("SMTP_TLS", "false") == "true",
            from_name: env_or("SMTP_FROM_NAME", &defaults.from_name),
            from_address: env_or("SMTP_FROM_ADDRESS", &defaults.from_address),
        }
    }
}
