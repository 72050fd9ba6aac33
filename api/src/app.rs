//! Application factory.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ob_core::repositories::{
    AgentRepository, DealerGroupRepository, DealerRepository, InventoryRepository,
    LenderRepository,
};
use ob_core::services::notification::EmailSender;
use ob_shared::types::response::MessageResponse;

use crate::middleware::cors::create_cors;
use crate::routes::{dealers, groups, search, verification, AppState};

/// Create the application with all routes and middleware wired up
pub fn create_app<D, G, A, I, L, M>(
    app_state: web::Data<AppState<D, G, A, I, L, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    D: DealerRepository + 'static,
    G: DealerGroupRepository + 'static,
    A: AgentRepository + 'static,
    I: InventoryRepository + 'static,
    L: LenderRepository + 'static,
    M: EmailSender + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .route("/new-dealer", web::post().to(dealers::new_dealer::<D, G, A, I, L, M>))
        .route(
            "/verify-email",
            web::get().to(verification::verify_email::<D, G, A, I, L, M>),
        )
        .route(
            "/resend-verification-email",
            web::get().to(verification::resend_verification_email::<D, G, A, I, L, M>),
        )
        .route(
            "/new-dealer-group",
            web::post().to(groups::new_dealer_group::<D, G, A, I, L, M>),
        )
        .route(
            "/search-lenders",
            web::get().to(search::search_lenders::<D, G, A, I, L, M>),
        )
        .route(
            "/search-dealer-groups",
            web::get().to(search::search_dealer_groups::<D, G, A, I, L, M>),
        )
        .route(
            "/search-dealers",
            web::get().to(search::search_dealers::<D, G, A, I, L, M>),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "dealer-onboarding-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new("The requested resource was not found"))
}
