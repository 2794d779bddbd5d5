//! CORS middleware configuration
//!
//! Development gets a permissive policy for local frontends and tools;
//! production restricts origins to the configured list. The environment is
//! passed in explicitly, nothing here reads process state.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use cp_shared::config::Environment;

/// Create a CORS middleware instance for the given environment
pub fn create_cors(environment: Environment, allowed_origins: &[String]) -> Cors {
    if environment.is_production() {
        create_production_cors(allowed_origins)
    } else {
        create_development_cors()
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    log::info!(
        "Configuring CORS for production environment with {} origins",
        allowed_origins.len()
    );

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
