//! Admin console route handlers
//!
//! Listing, editing, and deletion of reservation records behind HTTP Basic
//! authentication. Every handler verifies credentials before any store
//! access.

use super::booking::ReservationForm;
use super::pages::resolve_lang;
use crate::auth::require_admin;
use crate::error::{not_found_error, validation_error, ApiResult};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use chrono::{Datelike, Utc};
use minijinja::context;
use std::collections::HashMap;
use tracing::info;
use validator::Validate;

type BasicAuth = Option<TypedHeader<Authorization<Basic>>>;

fn basic_credentials(auth: &BasicAuth) -> Option<&Authorization<Basic>> {
    auth.as_ref().map(|TypedHeader(creds)| creds)
}

/// GET /admin: unconditional redirect to the listing, which enforces auth
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/admin/reservations")],
    )
}

/// List every reservation, newest first
pub async fn list_reservations(
    State(state): State<SharedState>,
    auth: BasicAuth,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    require_admin(&state.admin, basic_credentials(&auth))?;

    let reservations = state.store.list().await?;
    let lang = resolve_lang(&params);

    state.renderer.render(
        "admin_reservations.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            reservations => reservations,
            current_year => Utc::now().year(),
            query_params => params,
        },
    )
}

/// Pre-filled edit form for one reservation
pub async fn edit_form(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    auth: BasicAuth,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    require_admin(&state.admin, basic_credentials(&auth))?;

    let reservation = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| not_found_error("Reservation not found"))?;

    let lang = resolve_lang(&params);

    state.renderer.render(
        "admin_edit_reservation.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            reservation => reservation,
            current_year => Utc::now().year(),
        },
    )
}

/// Apply an edit: full replace of every mutable field
pub async fn apply_edit(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    auth: BasicAuth,
    Form(form): Form<ReservationForm>,
) -> ApiResult<Redirect> {
    require_admin(&state.admin, basic_credentials(&auth))?;

    form.validate().map_err(|e| validation_error(e.to_string()))?;
    let fields = form.into_fields()?;

    let updated = state.store.update(id, fields).await?;
    if !updated {
        return Err(not_found_error("Reservation not found"));
    }

    info!(id, "reservation updated");

    Ok(Redirect::to("/admin/reservations"))
}

/// Permanently delete a reservation
pub async fn delete_reservation(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    auth: BasicAuth,
) -> ApiResult<Redirect> {
    require_admin(&state.admin, basic_credentials(&auth))?;

    let deleted = state.store.delete(id).await?;
    if !deleted {
        return Err(not_found_error("Reservation not found"));
    }

    info!(id, "reservation deleted");

    Ok(Redirect::to("/admin/reservations"))
}
