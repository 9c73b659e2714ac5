//! Integration tests for the public pages and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_string, get, test_app};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Test: GET / renders the home page in English by default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders_english_by_default() {
    let (app, _store) = test_app().await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Yí Restaurant"));
    assert!(body.contains("Authentic Seafood &amp; Paella Experience"));
}

// ---------------------------------------------------------------------------
// Test: ?lang=de selects the German catalog slice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders_german_when_requested() {
    let (app, _store) = test_app().await;
    let response = get(app, "/?lang=de").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Authentische Meeresfrüchte &amp; Paella Erlebnis"));
    assert!(body.contains("Geschlossen"));
}

// ---------------------------------------------------------------------------
// Test: an unsupported lang value falls back to English
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_lang_falls_back_to_english() {
    let (app, _store) = test_app().await;
    let response = get(app, "/?lang=fr").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Authentic Seafood &amp; Paella Experience"));
}

// ---------------------------------------------------------------------------
// Test: the home page shows the success banner after a redirect back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_shows_reservation_success_banner() {
    let (app, _store) = test_app().await;
    let response = get(app, "/?lang=en&reservation=success").await;

    let body = body_string(response).await;
    assert!(body.contains("Your reservation has been received"));
}

// ---------------------------------------------------------------------------
// Test: the menu page lists dishes in both languages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn menu_lists_dishes_per_language() {
    let (app, _store) = test_app().await;

    let body = body_string(get(app.clone(), "/menu").await).await;
    assert!(body.contains("Salmon"));
    assert!(body.contains("Jasmine Rice"));

    let body = body_string(get(app, "/menu?lang=de").await).await;
    assert!(body.contains("Lachs"));
    assert!(body.contains("Jasminreis"));
}

// ---------------------------------------------------------------------------
// Test: the remaining pages respond 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn secondary_pages_render() {
    let (app, _store) = test_app().await;

    for uri in ["/about", "/contact", "/gallery"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should render");
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _store) = test_app().await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _store) = test_app().await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _store) = test_app().await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
}
