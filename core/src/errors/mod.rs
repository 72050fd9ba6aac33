//! Domain-specific error types.
//!
//! The taxonomy separates user-actionable failures (validation, bad links,
//! expired tokens) from transient infrastructure failures (store, mail).
//! The boundary layer maps each kind to an HTTP status and a user-safe
//! message; internal detail stays in the server logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the onboarding core
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// One or more input fields failed validation
    #[error("field validation failed")]
    Validation { fields: Vec<FieldError> },

    /// A business rule was violated (duplicate domain, domain mismatch, ...)
    #[error("{message}")]
    BusinessRule { message: String },

    /// A verification link payload could not be decoded
    #[error("badly formed verification link")]
    MalformedLink,

    /// A referenced record does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The contact email has already been verified
    #[error("email address already verified")]
    AlreadyVerified,

    /// The verification token has passed its expiry time
    #[error("verification link expired")]
    LinkExpired,

    /// The presented secret does not match the stored hash
    #[error("verification key mismatch")]
    TokenMismatch,

    /// The record store failed or was unreachable
    #[error("store error: {message}")]
    Store { message: String },

    /// The mail sender failed or was unreachable
    #[error("mail error: {message}")]
    Mail { message: String },

    /// Unexpected internal failure (hashing, serialization, ...)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl OnboardingError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }

    pub fn mail(err: impl std::fmt::Display) -> Self {
        Self::Mail {
            message: err.to_string(),
        }
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }

    /// Whether this error is a transient infrastructure failure rather
    /// than a user-actionable one.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Store { .. } | Self::Mail { .. } | Self::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, OnboardingError>;
