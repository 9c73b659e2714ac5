//! Route definitions and router setup
//!
//! Configures all routes and middleware.

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    request_id::MakeRequestUuid,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

mod admin;
mod booking;
mod pages;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState) -> Router {
    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .propagate_x_request_id();

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Public pages
        .route("/", get(pages::home))
        .route("/menu", get(pages::menu))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/gallery", get(pages::gallery))
        // Public form submissions
        .route("/reservation", post(booking::submit_reservation))
        .route("/contact-form", post(booking::submit_contact_form))
        // Admin console
        .route("/admin", get(admin::index))
        .route("/admin/reservations", get(admin::list_reservations))
        .route(
            "/admin/reservation/{id}/edit",
            get(admin::edit_form).post(admin::apply_edit),
        )
        .route(
            "/admin/reservation/{id}/delete",
            post(admin::delete_reservation),
        )
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
