mod common;

use axum::Router;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};
use vendor_registry::api;

fn make_server() -> (TestServer, common::TestContext) {
    let ctx = common::create_test_state();
    let app = Router::new()
        .nest("/api", api::routes::auth_routes())
        .with_state(ctx.state.clone());
    (TestServer::new(app).unwrap(), ctx)
}

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_success() {
    let (server, ctx) = make_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "new@example.com", "password": "hunter22" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "User created");
    assert_eq!(body["user"]["email"], "new@example.com");
    assert!(body["user"].get("id").is_some());
    assert!(body["user"].get("createdAt").is_some());
    assert_eq!(ctx.users.count(), 1);
}

#[tokio::test]
async fn test_register_response_carries_hash_not_plaintext() {
    let (server, _ctx) = make_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "hash@example.com", "password": "plaintext-pw" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let stored = body["user"]["password"].as_str().unwrap();
    assert_ne!(stored, "plaintext-pw");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_register_same_email_twice() {
    let (server, ctx) = make_server();
    let payload = json!({ "email": "dup@example.com", "password": "pw-one" });

    server
        .post("/api/auth/register")
        .json(&payload)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "dup@example.com", "password": "pw-two" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(ctx.users.count(), 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (server, ctx) = make_server();

    for payload in [
        json!({ "email": "a@example.com" }),
        json!({ "password": "pw" }),
        json!({ "email": "", "password": "pw" }),
        json!({ "email": "a@example.com", "password": null }),
        json!({}),
    ] {
        let response = server.post("/api/auth/register").json(&payload).await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["message"], "Email and password are required");
    }

    assert_eq!(ctx.users.count(), 0);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let (server, _ctx) = make_server();

    let response = server
        .post("/api/auth/register")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_wrong_method() {
    let (server, _ctx) = make_server();

    let response = server.get("/api/auth/register").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json::<Value>()["message"], "Method not allowed");
}

// ─── LOGIN ───────────────────────────────────────────────────────────────────

async fn register(server: &TestServer, email: &str, password: &str) {
    server
        .post("/api/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_login_success() {
    let (server, _ctx) = make_server();
    register(&server, "login@example.com", "correct-pw").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "login@example.com", "password": "correct-pw" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Login successful");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (server, _ctx) = make_server();
    register(&server, "known@example.com", "correct-pw").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "known@example.com", "password": "wrong-pw" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "correct-pw" }))
        .await;

    wrong_password.assert_status_unauthorized();
    unknown_email.assert_status_unauthorized();

    let a = wrong_password.text();
    let b = unknown_email.text();
    assert_eq!(a, b);

    let body: Value = serde_json::from_str(&a).unwrap();
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _ctx) = make_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Email and password are required"
    );
}

#[tokio::test]
async fn test_login_wrong_method() {
    let (server, _ctx) = make_server();

    let response = server.method(Method::PUT, "/api/auth/login").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
