//! Registration, login, logout and account flows

mod common;

use common::{TestApp, code};
use http::{Method, StatusCode};
use serde_json::json;
use shared::ErrorCode;

#[tokio::test]
async fn test_register_login_me() {
    let app = TestApp::new().await;

    let (status, body) = app.register("Asha@Example.com", "Asha").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "asha@example.com");
    assert_eq!(body["data"]["role"], "User");
    assert!(body["data"].get("password_hash").is_none());

    let token = app.login("asha@example.com").await;
    let (status, body) = app.get("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "Asha");
    assert_eq!(body["data"]["contactno"], "9876543210");
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_case_insensitively() {
    let app = TestApp::new().await;
    app.register("dup@example.com", "One").await;

    let (status, body) = app.register("DUP@example.com", "Two").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code(&body), ErrorCode::EmailAlreadyTaken.code() as u64);
    assert_eq!(body["message"], "User Email Already Taken");
}

#[tokio::test]
async fn test_password_mismatch() {
    let app = TestApp::new().await;
    let (status, body) = app
        .call(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": "m@example.com",
                "first_name": "M",
                "last_name": "N",
                "password": "secret123",
                "confirm_password": "secret124",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code(&body), ErrorCode::PasswordMismatch.code() as u64);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::new().await;
    app.register("known@example.com", "Known").await;

    let (wrong_status, wrong_body) = app
        .call(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "known@example.com", "password": "nope-nope" })),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .call(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "nope-nope" })),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(code(&wrong_body), ErrorCode::InvalidCredentials.code() as u64);
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new().await;
    let (status, body) = app.call(Method::GET, "/api/bookings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code(&body), ErrorCode::NotAuthenticated.code() as u64);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new().await;
    let token = app.user_token("bye@example.com").await;

    let (status, _) = app.post("/api/auth/logout", &token, json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code(&body), ErrorCode::TokenRevoked.code() as u64);
}

#[tokio::test]
async fn test_profile_edit_reissues_token() {
    let app = TestApp::new().await;
    let token = app.user_token("edit@example.com").await;
    app.register("taken@example.com", "Taken").await;

    let (status, body) = app
        .put("/api/account", &token, json!({ "email": "taken@example.com" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code(&body), ErrorCode::EmailAlreadyTaken.code() as u64);

    let (status, body) = app
        .put(
            "/api/account",
            &token,
            json!({ "first_name": "Renamed", "address": "12 Lake Road", "role": "Admin" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["first_name"], "Renamed");
    assert_eq!(body["data"]["user"]["role"], "User");
    let fresh = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = app.get("/api/auth/me", &fresh).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["address"], "12 Lake Road");

    // The pre-edit token no longer works
    let (status, _) = app.get("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_user_directory() {
    let app = TestApp::new().await;
    let admin = app.admin_token("admin@example.com").await;
    let user = app.user_token("plain@example.com").await;

    let (status, body) = app.get("/api/users", &user).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(code(&body), ErrorCode::AdminRequired.code() as u64);

    let (status, body) = app.get("/api/users", &admin).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    let plain_id = users
        .iter()
        .find(|u| u["email"] == "plain@example.com")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let uri = format!("/api/users/{}/role", plain_id);
    let (status, body) = app.put(&uri, &admin, json!({ "role": "Owner" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code(&body), ErrorCode::InvalidRole.code() as u64);

    let (status, body) = app.put(&uri, &admin, json!({ "role": "SubAdmin" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "SubAdmin");

    let (status, _) = app
        .put("/api/users/user:missing/role", &admin, json!({ "role": "Admin" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
