//! Onboarding flow configuration (URLs baked into emails and pages)

use serde::{Deserialize, Serialize};

use super::env_or;

/// URLs used by the verification flow and the post-verification checkout step
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OnboardingConfig {
    /// Public base URL of this API, used to build verification links
    pub base_url: String,

    /// Support page URL surfaced on error pages and in emails
    pub support_url: String,

    /// Checkout URL for US dealerships
    pub checkout_url_us: String,

    /// Checkout URL for Canadian dealerships
    pub checkout_url_ca: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080"),
            support_url: String::from("http://localhost:8080/support"),
            checkout_url_us: String::from("https://checkout.example.com/us"),
            checkout_url_ca: String::from("https://checkout.example.com/ca"),
        }
    }
}

impl OnboardingConfig {
    /// Load from `BASE_URL`, `SUPPORT_URL`, `CHECKOUT_URL_US`, `CHECKOUT_URL_CA`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_or("BASE_URL", &defaults.base_url),
            support_url: env_or("SUPPORT_URL", &defaults.support_url),
            checkout_url_us: env_or("CHECKOUT_URL_US", &defaults.checkout_url_us),
            checkout_url_ca: env_or("CHECKOUT_URL_CA", &defaults.checkout_url_ca),
        }
    }
}
