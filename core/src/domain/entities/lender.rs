//! Lender entity (read-only, consumed by autocomplete search).

use serde::{Deserialize, Serialize};

/// A lender known to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lender {
    /// Short lender code
    pub code: String,

    /// Display name, the field autocomplete matches against
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Lender {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country: None,
        }
    }
}
