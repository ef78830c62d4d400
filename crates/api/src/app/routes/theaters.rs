//! Theater CRUD routes.
//!
//! Reads are public. Mutations run through the resolver in `marquee-auth`;
//! the ordering per flow is fixed: create checks authorization before the
//! body, update validates the body before the lookup, and both update and
//! delete resolve existence (404) before entitlement (401/403).

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use marquee_auth::{
    DeleteDecision, DenyReason, FieldSet, Principal, WriteDecision, can_create, can_read,
    resolve_delete, resolve_write,
};
use marquee_core::TheaterId;
use marquee_theaters::Theater;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_theaters).post(create_theater))
        .route(
            "/:id",
            get(get_theater).put(update_theater).delete(delete_theater),
        )
}

pub async fn list_theaters(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
) -> axum::response::Response {
    // Read access is currently universal; the check is kept so a future
    // policy change has exactly one seam.
    if !can_read(&principal) {
        return errors::deny_to_response(DenyReason::Forbidden);
    }

    let items: Vec<dto::TheaterDto> = services
        .theaters
        .list()
        .into_iter()
        .map(dto::TheaterDto::from)
        .collect();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_theater(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TheaterId>,
) -> axum::response::Response {
    if !can_read(&principal) {
        return errors::deny_to_response(DenyReason::Forbidden);
    }

    match services.theaters.get(id) {
        Some(theater) => (StatusCode::OK, Json(dto::TheaterDto::from(theater))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "theater not found"),
    }
}

pub async fn create_theater(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<dto::TheaterRequest>,
) -> axum::response::Response {
    if principal.is_anonymous() {
        return errors::deny_to_response(DenyReason::Unauthenticated);
    }
    if !can_create(&principal) {
        return errors::deny_to_response(DenyReason::Forbidden);
    }

    let theater = match Theater::from_draft(body.into_draft()) {
        Ok(t) => t,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let created = services.theaters.insert(theater);
    tracing::info!(id = %created.id, "theater created");
    (StatusCode::CREATED, Json(dto::TheaterDto::from(created))).into_response()
}

pub async fn update_theater(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TheaterId>,
    Json(body): Json<dto::TheaterRequest>,
) -> axum::response::Response {
    // Shape first: a malformed body is 400 regardless of whether the id
    // exists or who is asking.
    let draft = body.into_draft();
    if let Err(e) = draft.validate() {
        return errors::domain_error_to_response(e);
    }

    let Some(mut theater) = services.theaters.get(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "theater not found");
    };

    let fields = match resolve_write(&principal, theater.manager_id) {
        WriteDecision::Allow => FieldSet::FULL,
        WriteDecision::AllowRestricted(fields) => fields,
        WriteDecision::Deny(reason) => return errors::deny_to_response(reason),
    };

    theater.apply(&draft, &fields);

    match services.theaters.update(theater) {
        Ok(updated) => (StatusCode::OK, Json(dto::TheaterDto::from(updated))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_theater(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<TheaterId>,
) -> axum::response::Response {
    let Some(theater) = services.theaters.get(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "theater not found");
    };

    if let DeleteDecision::Deny(reason) = resolve_delete(&principal, theater.manager_id) {
        return errors::deny_to_response(reason);
    }

    match services.theaters.remove(id) {
        Ok(()) => {
            tracing::info!(id = %id, "theater deleted");
            StatusCode::OK.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
