//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring + seed
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services(&jwt_secret));
    let auth_state = middleware::AuthState {
        tokens: services.tokens.clone(),
    };

    // All /api routes get a Principal extension; anonymous passes through
    // (GET endpoints are public, mutations deny per the resolver).
    let api = Router::new()
        .nest("/theaters", routes::theaters::router())
        .nest("/users", routes::users::router())
        .nest("/authentication", routes::authentication::router())
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::principal_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(ServiceBuilder::new())
}
