//! Dealer signup endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_shared::types::response::MessageResponse;

use crate::dto::NewDealerRequest;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /new-dealer
///
/// Creates an unverified dealer signup and sends the verification email.
///
/// ## Responses
/// - 200: `{ "data": { "message": "Success" } }`
/// - 400: validation failure (with `fields`) or business rule violation
/// - 404: unknown agent id
/// - 500: store or mail failure
pub async fn new_dealer<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    request: web::Json<NewDealerRequest>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(MessageResponse::new("Field validation failed."));
    }

    match state
        .signup
        .register_dealer(request.into_inner().into_application())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Success")),
        Err(error) => handle_domain_error(error),
    }
}
