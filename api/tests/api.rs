//! End-to-end tests over the full router with an in-memory store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api::{routes, AppState};
use shared::{bootstrap, db, Config, Store};

fn test_config() -> Config {
    Config {
        port: 0,
        database_path: ":memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        admin_password: "password".to_string(),
        environment: "development".to_string(),
        frontend_origin: None,
    }
}

async fn test_app() -> Router {
    let pool = db::create_memory_pool().await.unwrap();
    let store = Store::new(pool);
    let config = test_config();
    bootstrap::bootstrap(&store, &config).await.unwrap();

    routes::app(AppState::new(store, config))
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login_token(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": "admin", "password": "password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], json!("admin"));
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], json!("OK"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Route not found"));
}

#[tokio::test]
async fn test_public_list_returns_seeded_events_in_order() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["title"], json!("New Year Celebration"));

    let dates: Vec<&str> = events.iter().map(|e| e["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_range_returns_exactly_the_january_samples() {
    let app = test_app().await;

    let response = app
        .oneshot(get(
            "/api/events/range?startDate=2025-01-01&endDate=2025-01-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], json!("New Year Celebration"));
    assert_eq!(events[0]["date"], json!("2025-01-01"));
    assert_eq!(events[1]["title"], json!("Team Meeting"));
    assert_eq!(events[1]["date"], json!("2025-01-15"));
}

#[tokio::test]
async fn test_range_requires_both_bounds() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/events/range?startDate=2025-01-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Start date and end date required"));

    // Empty values count as missing too.
    let response = app
        .oneshot(get("/api/events/range?startDate=&endDate=2025-01-31"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app().await;

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": "admin", "password": "nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_user = app
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": "ghost", "password": "nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_user).await;
    assert_eq!(a, b);
    assert_eq!(a["message"], json!("Invalid credentials"));
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            json!({ "username": "admin" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Username and password required"));
}

#[tokio::test]
async fn test_admin_routes_reject_missing_and_invalid_tokens() {
    let app = test_app().await;

    // No Authorization header: rejected before any store access.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/events",
            None,
            json!({ "title": "Demo", "date": "2025-03-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Access token required"));

    // Garbage token.
    let response = app
        .clone()
        .oneshot(json_request(
            "GET",
            "/api/admin/events",
            Some("garbage"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Invalid token"));

    // Nothing was created along the way.
    let response = app.oneshot(get("/api/events")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_admin_list_matches_public_list() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let admin = app
        .clone()
        .oneshot(json_request(
            "GET",
            "/api/admin/events",
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(admin.status(), StatusCode::OK);

    let public = app.oneshot(get("/api/events")).await.unwrap();
    assert_eq!(body_json(admin).await, body_json(public).await);
}

#[tokio::test]
async fn test_create_requires_title_and_date() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/events",
            Some(&token),
            json!({ "title": "Demo" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Title and date required"));
}

#[tokio::test]
async fn test_create_update_delete_flow() {
    let app = test_app().await;
    let token = login_token(&app).await;

    // Create.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/events",
            Some(&token),
            json!({ "title": "Demo", "date": "2025-03-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    let id = body["event"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["event"]["description"], json!(""));

    // Visible in the public list.
    let response = app.clone().oneshot(get("/api/events")).await.unwrap();
    let events = body_json(response).await;
    let demo: Vec<&Value> = events
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["title"] == json!("Demo"))
        .collect();
    assert_eq!(demo.len(), 1);
    assert_eq!(demo[0]["date"], json!("2025-03-01"));

    // Update.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/admin/events/{}", id),
            Some(&token),
            json!({ "title": "Demo v2", "date": "2025-03-02", "description": "moved" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Event updated successfully"));

    // Update of a missing id.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/admin/events/999999",
            Some(&token),
            json!({ "title": "X", "date": "2025-01-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Event not found"));

    // Delete, then delete again.
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/admin/events/{}", id),
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Event deleted successfully"));

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/admin/events/{}", id),
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
