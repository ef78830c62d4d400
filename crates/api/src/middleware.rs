use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use marquee_auth::{Principal, TokenCodec};

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenCodec>,
}

/// Turn the bearer token (if any) into a [`Principal`] request extension.
///
/// A missing Authorization header yields `Principal::Anonymous` rather than
/// a 401: reads are public in this API and mutation handlers map an
/// anonymous deny to 401 themselves. A header that is present but malformed
/// or fails verification is rejected here.
pub async fn principal_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let principal = match extract_bearer(req.headers())? {
        None => Principal::Anonymous,
        Some(token) => {
            let claims = state
                .tokens
                .decode(token, Utc::now())
                .map_err(|_e| StatusCode::UNAUTHORIZED)?;
            Principal::authenticated(claims.sub, claims.roles)
        }
    };

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, StatusCode> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Some(token))
}
