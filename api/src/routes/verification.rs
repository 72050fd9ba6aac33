//! Emailed-link endpoints: verify and resend.
//!
//! Unlike the JSON endpoints, these are opened in a browser from the
//! verification email, so every outcome renders an HTML page.

use actix_web::{http::header::ContentType, web, HttpResponse};

use ob_core::errors::OnboardingError;
use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_core::services::verification::link;

use crate::dto::EncodedLinkQuery;

use super::AppState;

fn html(status: actix_web::http::StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Handler for GET /verify-email?data=...
///
/// Decodes the link payload, checks the one-time secret and flips the
/// signup to verified. Every outcome is an HTML page; success shows the
/// checkout button with the billing email prefilled.
pub async fn verify_email<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    query: web::Query<EncodedLinkQuery>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    use actix_web::http::StatusCode;

    let data = match &query.data {
        Some(data) => data,
        None => return html(StatusCode::BAD_REQUEST, state.pages.bad_link_page()),
    };

    let payload = match link::decode_verify(data) {
        Ok(payload) => payload,
        Err(_) => return html(StatusCode::BAD_REQUEST, state.pages.bad_link_page()),
    };

    match state.verification.verify(&payload.email, &payload.key).await {
        Ok(signup) => {
            let checkout = state
                .pages
                .checkout_url(signup.dealership_country, &signup.dealership_billing_email);
            html(StatusCode::OK, state.pages.verified_page(&checkout))
        }
        Err(OnboardingError::NotFound { ref resource }) if resource == "dealer signup" => {
            html(StatusCode::NOT_FOUND, state.pages.support_page())
        }
        Err(OnboardingError::NotFound { .. }) | Err(OnboardingError::TokenMismatch) => {
            html(StatusCode::BAD_REQUEST, state.pages.support_page())
        }
        Err(OnboardingError::AlreadyVerified) => {
            html(StatusCode::BAD_REQUEST, state.pages.already_verified_page())
        }
        Err(OnboardingError::LinkExpired) => {
            match state.verification.resend_url(&payload.email) {
                Ok(resend_url) => {
                    html(StatusCode::BAD_REQUEST, state.pages.expired_page(&resend_url))
                }
                Err(_) => html(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    state.pages.try_again_page(),
                ),
            }
        }
        Err(error) => {
            log::error!("verify-email failed: {error}");
            html(
                StatusCode::INTERNAL_SERVER_ERROR,
                state.pages.try_again_page(),
            )
        }
    }
}

/// Handler for GET /resend-verification-email?data=...
///
/// Issues a replacement token (killing the previous link) and sends a
/// fresh verification email.
pub async fn resend_verification_email<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    query: web::Query<EncodedLinkQuery>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    use actix_web::http::StatusCode;

    let data = match &query.data {
        Some(data) => data,
        None => return html(StatusCode::BAD_REQUEST, state.pages.bad_link_page()),
    };

    let payload = match link::decode_resend(data) {
        Ok(payload) => payload,
        Err(_) => return html(StatusCode::BAD_REQUEST, state.pages.bad_link_page()),
    };

    match state.verification.resend(&payload.email).await {
        Ok(_) => html(StatusCode::OK, state.pages.resent_page()),
        Err(OnboardingError::NotFound { .. }) => {
            html(StatusCode::NOT_FOUND, state.pages.try_again_page())
        }
        Err(OnboardingError::AlreadyVerified) => {
            html(StatusCode::BAD_REQUEST, state.pages.already_verified_page())
        }
        Err(error) => {
            log::error!("resend-verification-email failed: {error}");
            html(
                StatusCode::INTERNAL_SERVER_ERROR,
                state.pages.try_again_page(),
            )
        }
    }
}
