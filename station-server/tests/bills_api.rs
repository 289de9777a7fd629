//! End-to-end API tests over an in-process router and a throwaway
//! SQLite database.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use station_server::{api, Config, ServerState};

async fn setup() -> (TempDir, Router) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("station.db");
    let config = Config::with_overrides(db_path.to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("state init");
    (dir, api::build_router(state))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Logs in with the seeded admin account, returns the bearer token
async fn login(app: &Router) -> String {
    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "admin@station.local", "password": "changeme"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["token"].as_str().expect("token").to_string()
}

fn future_date() -> String {
    (chrono::Utc::now() + chrono::Duration::days(30))
        .format("%Y-%m-%d")
        .to_string()
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Value,
) -> axum::response::Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn get(app: &Router, uri: &str, token: &str) -> axum::response::Response {
    let request = Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn bill_lifecycle() {
    let (_dir, app) = setup().await;
    let token = login(&app).await;
    let date = future_date();

    // First bill of a fresh database gets number 1/0001
    let response = send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "สมชาย ใจดี",
            "phone": "0812345678",
            "name1": "พ.ร.บ. รถยนต์",
            "amount1": "645.21",
            "check1": 200,
            "car_registration1": "กข 1234 สระแก้ว",
            "tax1": 100,
            "date": date,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bill = body_json(response).await;
    assert_eq!(bill["bill_number"], "1/0001");
    assert_eq!(bill["total"], 945.21);
    assert_eq!(bill["created_by"], "admin");
    let id = bill["id"].as_i64().unwrap();

    // Fetch it back
    let response = get(&app, &format!("/api/bills/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["bill_number"], "1/0001");

    // Receipt projection
    let response = get(&app, &format!("/api/bills/{id}/receipt"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let receipt = body_json(response).await;
    assert_eq!(receipt["bill_number"], "1/0001");
    assert_eq!(receipt["total"], "945.21");
    assert_eq!(receipt["services"][0]["label"], "พ.ร.บ. รถยนต์");

    // Second bill increments the sequence
    let response = send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "ลูกค้า",
            "name1": "พ.ร.บ.",
            "amount1": 500,
            "date": date,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["bill_number"], "1/0002");

    // Monthly report covers both
    let month = &date[..7];
    let response = get(&app, &format!("/api/reports/monthly?month={month}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await;
    assert_eq!(report["bill_count"], 2);
    assert_eq!(report["rows"][0]["bill_number"], "1/0001");
    assert_eq!(report["grand_total"], "1,445.21");

    // Delete the second bill
    let response = send_json(
        &app,
        "DELETE",
        &format!("/api/bills/{}", second["id"]),
        &token,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn bill_validation_rejects_missing_amount() {
    let (_dir, app) = setup().await;
    let token = login(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "ลูกค้า",
            "name1": "พ.ร.บ.",
            "date": future_date(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn bill_validation_rejects_past_date() {
    let (_dir, app) = setup().await;
    let token = login(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "ลูกค้า",
            "name1": "พ.ร.บ.",
            "amount1": 500,
            "date": "2020-01-01",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn adjustment_keeps_total_untouched() {
    let (_dir, app) = setup().await;
    let token = login(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "ลูกค้า",
            "name1": "พ.ร.บ.",
            "amount1": 600,
            "date": future_date(),
        }),
    )
    .await;
    let bill = body_json(response).await;
    let id = bill["id"].as_i64().unwrap();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/bills/{id}/adjustment"),
        &token,
        json!({
            "adjustment_type": "decrease",
            "adjustment_note": "ลดราคาให้ลูกค้าประจำ",
            "adjustment_amount": 50,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let adjusted = body_json(response).await;
    assert_eq!(adjusted["total"], 600.0);
    assert_eq!(adjusted["adjustment_amount"], 50.0);
    assert_eq!(adjusted["adjustment_type"], "decrease");
}

#[tokio::test]
async fn requests_without_token_are_rejected() {
    let (_dir, app) = setup().await;

    let request = Request::get("/api/bills").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let (_dir, app) = setup().await;

    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "admin@station.local", "password": "wrong"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn user_management_requires_admin_role() {
    let (_dir, app) = setup().await;
    let admin_token = login(&app).await;

    // Admin creates a regular staff account
    let response = send_json(
        &app,
        "POST",
        "/api/users",
        &admin_token,
        json!({
            "user_name": "clerk",
            "email": "clerk@station.local",
            "password": "clerk-pass-1",
            "role": "user",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The clerk can log in but cannot manage accounts
    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "clerk@station.local", "password": "clerk-pass-1"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let clerk_token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get(&app, "/api/users", &clerk_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // But bills are fine
    let response = get(&app, "/api/bills", &clerk_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_needs_no_auth() {
    let (_dir, app) = setup().await;

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn monthly_csv_export() {
    let (_dir, app) = setup().await;
    let token = login(&app).await;
    let date = future_date();

    send_json(
        &app,
        "POST",
        "/api/bills",
        &token,
        json!({
            "username": "ลูกค้า",
            "name1": "พ.ร.บ.",
            "amount1": 500,
            "car_registration1": "1กก 999 กทม",
            "date": date,
        }),
    )
    .await;

    let month = &date[..7];
    let response = get(
        &app,
        &format!("/api/reports/monthly/csv?month={month}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("date,bill_number"));
    assert!(csv.contains("1/0001"));
    assert!(csv.contains("1กก 999 กทม"));

    // Malformed month key is rejected up front
    let response = get(&app, "/api/reports/monthly?month=2026-13", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
