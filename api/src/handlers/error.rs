//! Maps core errors onto the JSON response envelope.
//!
//! User-actionable failures surface their message; transient failures
//! are logged server-side and answered with a generic 500 so internal
//! detail never leaks.

use actix_web::HttpResponse;

use ob_core::errors::OnboardingError;
use ob_shared::types::response::MessageResponse;

/// Convert a domain error into a JSON error response
pub fn handle_domain_error(error: OnboardingError) -> HttpResponse {
    match error {
        OnboardingError::Validation { fields } => {
            let names = fields.into_iter().map(|f| f.field).collect();
            HttpResponse::BadRequest()
                .json(MessageResponse::with_fields("Field validation failed.", names))
        }
        OnboardingError::BusinessRule { message } => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        OnboardingError::NotFound { ref resource } if resource == "agent" => {
            HttpResponse::NotFound().json(MessageResponse::new("Invalid Agent ID"))
        }
        OnboardingError::NotFound { resource } => {
            HttpResponse::NotFound().json(MessageResponse::new(format!("{resource} not found")))
        }
        OnboardingError::MalformedLink
        | OnboardingError::AlreadyVerified
        | OnboardingError::LinkExpired
        | OnboardingError::TokenMismatch => {
            HttpResponse::BadRequest().json(MessageResponse::new(error.to_string()))
        }
        OnboardingError::Store { .. }
        | OnboardingError::Mail { .. }
        | OnboardingError::Internal { .. } => {
            log::error!("internal error serving request: {error}");
            HttpResponse::InternalServerError()
                .json(MessageResponse::new("Internal server error."))
        }
    }
}
