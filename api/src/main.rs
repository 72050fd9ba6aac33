use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;

use ob_core::services::search::SearchService;
use ob_core::services::signup::SignupService;
use ob_core::services::verification::{VerificationConfig, VerificationService};
use ob_infra::database::connection::create_pool;
use ob_infra::database::{
    MySqlAgentRepository, MySqlDealerGroupRepository, MySqlDealerRepository,
    MySqlInventoryRepository, MySqlLenderRepository,
};
use ob_infra::email::SmtpMailer;
use ob_shared::config::{DatabaseConfig, OnboardingConfig, ServerConfig, SmtpConfig};

use ob_api::app::create_app;
use ob_api::pages::PageContext;
use ob_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting dealer onboarding API");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let smtp_config = SmtpConfig::from_env();
    let onboarding_config = OnboardingConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let dealers = Arc::new(MySqlDealerRepository::new(pool.clone()));
    let groups = Arc::new(MySqlDealerGroupRepository::new(pool.clone()));
    let agents = Arc::new(MySqlAgentRepository::new(pool.clone()));
    let inventory = Arc::new(MySqlInventoryRepository::new(pool.clone()));
    let lenders = Arc::new(MySqlLenderRepository::new(pool));

    let mailer = Arc::new(
        SmtpMailer::new(&smtp_config, onboarding_config.support_url.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let verification = Arc::new(VerificationService::new(
        dealers.clone(),
        mailer.clone(),
        VerificationConfig {
            base_url: onboarding_config.base_url.clone(),
        },
    ));
    let signup = Arc::new(SignupService::new(
        dealers.clone(),
        groups.clone(),
        agents,
        inventory.clone(),
        verification.clone(),
    ));
    let search = Arc::new(SearchService::new(lenders, groups, inventory, dealers));

    let app_state = web::Data::new(AppState {
        signup,
        verification,
        search,
        pages: PageContext::new(&onboarding_config),
    });

    let bind_address = server_config.bind_address();
    info!("Binding to {bind_address}");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
