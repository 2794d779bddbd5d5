//! Application factory
//!
//! Builds the Actix application from an already-constructed [`AppState`],
//! so production and tests wire in whichever mailer and repository
//! implementations they need.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cp_core::repositories::verification_code::VerificationCodeRepository;
use cp_core::services::verification::MailerTrait;
use cp_shared::config::Environment;
use cp_shared::types::response::ErrorBody;

use crate::middleware::cors::create_cors;
use crate::routes::verification::{issue_code, verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<M, R>(
    app_state: web::Data<AppState<M, R>>,
    environment: Environment,
    allowed_origins: &[String],
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
    M: MailerTrait + 'static,
    R: VerificationCodeRepository + 'static,
{
    let cors = create_cors(environment, allowed_origins);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/verification")
                    .route("/issue", web::post().to(issue_code::<M, R>))
                    .route("/verify", web::post().to(verify_code::<M, R>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "careportal-verify",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("The requested resource was not found"))
}
