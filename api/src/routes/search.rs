//! Autocomplete search endpoints backing the signup form.

use actix_web::{web, HttpResponse};

use ob_core::domain::entities::dealer::Country;
use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_shared::types::response::MessageResponse;

use crate::dto::SearchQuery;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for GET /search-lenders?query=...
pub async fn search_lenders<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    if query.query.is_empty() {
        return HttpResponse::BadRequest().json(MessageResponse::new("Missing query."));
    }

    match state.search.lenders(&query.query).await {
        Ok(lenders) => HttpResponse::Ok().json(lenders),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /search-dealer-groups?query=...
pub async fn search_dealer_groups<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    if query.query.is_empty() {
        return HttpResponse::BadRequest().json(MessageResponse::new("Missing query."));
    }

    match state.search.dealer_groups(&query.query).await {
        Ok(groups) => HttpResponse::Ok().json(groups),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /search-dealers?query=...&country=US|CA
///
/// Searches the per-country inventory feed by website domain; each match
/// carries an `onboarded` flag when the seller already signed up.
pub async fn search_dealers<D, G, A, I, L, M>(
    state: web::Data<AppState<D, G, A, I, L, M>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    if query.query.is_empty() {
        return HttpResponse::BadRequest().json(MessageResponse::new("Missing query."));
    }

    let country = match query.country.as_deref().and_then(Country::parse) {
        Some(country) => country,
        None => {
            return HttpResponse::BadRequest()
                .json(MessageResponse::new("Please enter either US or CA for country."));
        }
    };

    match state.search.dealers(&query.query, country).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(error) => handle_domain_error(error),
    }
}
