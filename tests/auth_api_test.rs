mod common;

use std::sync::Arc;

use poem::http::StatusCode;
use poem::test::TestResponse;
use serde_json::json;
use tempfile::TempDir;

use wearhouse_backend::stores::{CatalogStore, FileUserStore, UserStore};

use common::{client_for, seeded_client};

async fn response_body(resp: TestResponse) -> serde_json::Value {
    let raw = resp.0.into_body().into_string().await.unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn registration(email: &str) -> serde_json::Value {
    json!({
        "name": "Asha Rao",
        "email": email,
        "password": "secret123",
        "phone": "+91 9000000000",
        "city": "Pune",
        "address": "42 MG Road"
    })
}

#[tokio::test]
async fn test_login_with_demo_account() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "demo@wearhouse.com", "password": "password123" }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = response_body(resp).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["name"], "Demo User");
    assert_eq!(body["user"]["city"], "Mumbai");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "  Demo@WearHouse.com ", "password": "password123" }))
        .send()
        .await;
    resp.assert_status_is_ok();
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "demo@wearhouse.com", "password": "wrong-password" }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let json = resp.json().await;
    let body = json.value().object();
    body.get("error").assert_string("invalid_credentials");
    body.get("message").assert_string("Invalid email or password");
}

#[tokio::test]
async fn test_login_missing_fields_is_400() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "demo@wearhouse.com" }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let json = resp.json().await;
    json.value()
        .object()
        .get("message")
        .assert_string("Email and password are required");
}

#[tokio::test]
async fn test_register_then_login() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/register")
        .body_json(&registration("asha@example.com"))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = response_body(resp).await;
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["user"]["id"], 2);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert_eq!(body["user"]["reviews_count"], 0);
    assert!(body["user"].get("password").is_none());

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "asha@example.com", "password": "secret123" }))
        .send()
        .await;
    resp.assert_status_is_ok();
}

#[tokio::test]
async fn test_register_duplicate_email_is_400() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/register")
        .body_json(&registration("DEMO@wearhouse.com"))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let json = resp.json().await;
    let body = json.value().object();
    body.get("error").assert_string("duplicate_email");
    body.get("message").assert_string("Email already registered");
}

#[tokio::test]
async fn test_register_missing_fields_is_400() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/register")
        .body_json(&json!({ "name": "Asha", "email": "asha@example.com" }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let json = resp.json().await;
    let body = json.value().object();
    body.get("error").assert_string("missing_fields");
    body.get("message").assert_string("All fields are required");
}

#[tokio::test]
async fn test_register_rejects_short_password_and_bad_email() {
    let cli = seeded_client();

    let mut short_password = registration("asha@example.com");
    short_password["password"] = json!("12345");
    let resp = cli
        .post("/api/auth/register")
        .body_json(&short_password)
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.json()
        .await
        .value()
        .object()
        .get("error")
        .assert_string("password_too_short");

    let resp = cli
        .post("/api/auth/register")
        .body_json(&registration("not-an-email"))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.json()
        .await
        .value()
        .object()
        .get("error")
        .assert_string("invalid_email");
}

#[tokio::test]
async fn test_register_with_file_store_persists_account() {
    let temp_dir = TempDir::new().unwrap();
    let users_path = temp_dir.path().join("data").join("users.json");

    let store = FileUserStore::open(&users_path).await.unwrap();
    let cli = client_for(CatalogStore::seeded().unwrap(), Arc::new(store));

    let resp = cli
        .post("/api/auth/register")
        .body_json(&registration("asha@example.com"))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let reopened = FileUserStore::open(&users_path).await.unwrap();
    assert_eq!(reopened.count().await.unwrap(), 2);

    let user = reopened
        .find_by_email("asha@example.com")
        .await
        .unwrap()
        .expect("registered user should be persisted");
    assert_eq!(user.id, 2);
    assert_eq!(user.city, "Pune");
}

#[tokio::test]
async fn test_register_malformed_json_is_json_400() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/register")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_content_type("application/json; charset=utf-8");

    let body = response_body(resp).await;
    assert_eq!(body["error"], "invalid_request");
    assert_eq!(body["message"], "Invalid request data");
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_login_without_content_type_is_json_400() {
    let cli = seeded_client();

    let resp = cli.post("/api/auth/login").body("email=demo").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let body = response_body(resp).await;
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_registration_shows_up_in_diagnostics() {
    let cli = seeded_client();

    let resp = cli
        .post("/api/auth/register")
        .body_json(&registration("asha@example.com"))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let body = response_body(cli.get("/api/test").send().await).await;
    assert_eq!(body["total_users"], 2);
    assert_eq!(body["demo_user_exists"], true);
}
