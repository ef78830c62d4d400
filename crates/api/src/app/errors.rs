use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use marquee_auth::DenyReason;
use marquee_core::DomainError;

/// Map a domain failure to the response taxonomy: validation and bad ids are
/// 400, missing resources 404, uniqueness conflicts 400 (matching the
/// original API surface, which never used 409).
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
    }
}

/// 401 for a missing principal, 403 for an authenticated one without
/// entitlement. The two are mutually exclusive per request.
pub fn deny_to_response(reason: DenyReason) -> axum::response::Response {
    match reason {
        DenyReason::Unauthenticated => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        ),
        DenyReason::Forbidden => {
            json_error(StatusCode::FORBIDDEN, "forbidden", "not entitled to this resource")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
