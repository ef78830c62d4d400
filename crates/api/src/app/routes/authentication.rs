//! Login/logout/me.
//!
//! Tokens are stateless HS256 bearer tokens: login verifies the password and
//! mints one, logout is an acknowledgment only, `me` echoes the principal's
//! stored representation.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Duration, Utc};

use marquee_auth::{Claims, Principal, password::verify_password};

use crate::app::{dto, errors, services::AppServices};

/// Token lifetime. Long enough for a working session; there is no refresh.
const TOKEN_TTL_HOURS: i64 = 8;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    // Unknown user and bad password answer identically.
    let Some(user) = services.identity.find_by_name(&body.user_name) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "login_failed", "invalid credentials");
    };

    if !verify_password(&body.password, &user.password_hash) {
        return errors::json_error(StatusCode::BAD_REQUEST, "login_failed", "invalid credentials");
    }

    let now = Utc::now();
    let claims = Claims {
        sub: user.id,
        user_name: user.user_name.clone(),
        roles: user.roles.clone(),
        issued_at: now,
        expires_at: now + Duration::hours(TOKEN_TTL_HOURS),
    };

    let token = match services.tokens.issue(&claims) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("token issue failed: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue token",
            );
        }
    };

    tracing::info!(user = %claims.sub, "login");
    (
        StatusCode::OK,
        Json(dto::LoginResponse {
            token,
            user: dto::UserDto::from(user),
        }),
    )
        .into_response()
}

pub async fn logout() -> axum::response::Response {
    // Nothing to revoke server-side.
    StatusCode::OK.into_response()
}

pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
) -> axum::response::Response {
    let Some(user_id) = principal.user_id() else {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        );
    };

    // The token may outlive the account; treat a vanished user as
    // unauthenticated rather than missing.
    match services.identity.get(user_id) {
        Some(user) => (StatusCode::OK, Json(dto::UserDto::from(user))).into_response(),
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        ),
    }
}
