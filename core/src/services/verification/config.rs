//! Verification service configuration.

/// Settings for building verification links
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Public base URL of this service, without a trailing slash
    pub base_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}
