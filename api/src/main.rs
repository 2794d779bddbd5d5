use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;

use cp_core::services::verification::{VerificationService, VerificationServiceConfig};
use cp_infra::{DatabasePool, HttpMailer, MySqlVerificationCodeRepository};
use cp_shared::config::AppConfig;

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use routes::verification::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CarePortal verification API");

    // Built once, passed by reference from here on.
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    info!(
        "Environment: {}, binding to {}",
        config.environment, bind_address
    );

    let db_pool = DatabasePool::new(&config.database).await?;
    db_pool.health_check().await?;

    let repository = Arc::new(MySqlVerificationCodeRepository::new(
        db_pool.get_pool().clone(),
    ));
    let mailer = Arc::new(HttpMailer::new(config.mail.clone()));

    if !config.mail.is_configured() {
        log::warn!("Mail transport is not configured; code issuance will fail until it is");
    }

    let verification_service = Arc::new(VerificationService::new(
        mailer,
        repository,
        VerificationServiceConfig::from(&config.verification),
    ));

    let app_state = web::Data::new(AppState::new(verification_service));

    let environment = config.environment;
    let allowed_origins = config.server.allowed_origins.clone();
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || {
        app::create_app(app_state.clone(), environment, &allowed_origins)
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    info!("Server listening on {}", bind_address);
    server.run().await?;

    Ok(())
}
