//! Admin user-creation route.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use marquee_auth::{DenyReason, NewUser, Principal, password::hash_password};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", post(create_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    if principal.is_anonymous() {
        return errors::deny_to_response(DenyReason::Unauthenticated);
    }
    if !principal.is_admin() {
        return errors::deny_to_response(DenyReason::Forbidden);
    }

    let new_user = NewUser {
        user_name: body.user_name,
        password: body.password,
        roles: body.roles,
    };
    if let Err(e) = new_user.validate() {
        return errors::domain_error_to_response(e);
    }

    let password_hash = match hash_password(&new_user.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("password hashing failed: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "hash_error",
                "failed to process password",
            );
        }
    };

    // Role existence is checked inside the store so an unknown role leaves
    // no partial assignment behind.
    match services
        .identity
        .create_user(&new_user.user_name, &password_hash, &new_user.roles)
    {
        Ok(user) => {
            tracing::info!(id = %user.id, "user created");
            (StatusCode::CREATED, Json(dto::UserDto::from(user))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
