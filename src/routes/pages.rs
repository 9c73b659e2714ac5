//! Public page route handlers
//!
//! Each page selects the language slice of the content catalog per the
//! `lang` query parameter and renders its template.

use crate::catalog::Lang;
use crate::error::ApiResult;
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{Datelike, Utc};
use minijinja::context;
use std::collections::HashMap;

/// Resolve the display language from the raw query map
pub(crate) fn resolve_lang(params: &HashMap<String, String>) -> Lang {
    Lang::from_param(params.get("lang").map(String::as_str))
}

/// Home page; the raw query map is reused by the template for the
/// reservation success banner and link building
pub async fn home(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let lang = resolve_lang(&params);
    state.renderer.render(
        "index.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            current_year => Utc::now().year(),
            query_params => params,
        },
    )
}

/// Menu page
pub async fn menu(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let lang = resolve_lang(&params);
    state.renderer.render(
        "menu.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            menu => state.catalog.menu(lang),
            current_year => Utc::now().year(),
        },
    )
}

/// About page
pub async fn about(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let lang = resolve_lang(&params);
    state.renderer.render(
        "about.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            current_year => Utc::now().year(),
        },
    )
}

/// Contact page
pub async fn contact(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let lang = resolve_lang(&params);
    state.renderer.render(
        "contact.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            current_year => Utc::now().year(),
        },
    )
}

/// Gallery page
pub async fn gallery(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let lang = resolve_lang(&params);
    state.renderer.render(
        "gallery.html",
        context! {
            lang => lang.code(),
            restaurant => state.catalog.restaurant(lang),
            current_year => Utc::now().year(),
        },
    )
}
