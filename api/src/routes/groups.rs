//! Dealer group signup endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_shared::types::response::MessageResponse;

use crate::dto::NewDealerGroupRequest;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /new-dealer-group
///
/// Creates a user-submitted dealer group keyed by its website domain.
///
/// ## Responses
/// - 200: `{ "data": { "message": "Success" } }`
/// - 400: validation failure or duplicate group domain
/// - 500: store failure
pub async fn new_dealer_group<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    request: web::Json<NewDealerGroupRequest>,
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
        .register_group(request.into_inner().into_application())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Success")),
        Err(error) => handle_domain_error(error),
    }
}
