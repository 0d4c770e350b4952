//! Catalog management and visibility

mod common;

use common::{TestApp, code};
use http::{Method, StatusCode};
use serde_json::json;
use shared::ErrorCode;

#[tokio::test]
async fn test_admin_manages_hotels() {
    let app = TestApp::new().await;
    let admin = app.admin_token("admin@example.com").await;

    let (status, body) = app
        .post(
            "/api/hotels",
            &admin,
            json!({ "hotel_name": "Grand Palace", "price": "5000", "location": "Pune" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("hotel:"));
    assert_eq!(body["data"]["hotel_desc"], "");

    let uri = format!("/api/hotels/{}", id);
    let (status, body) = app.put(&uri, &admin, json!({ "price": "5500" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], "5500");
    assert_eq!(body["data"]["hotel_name"], "Grand Palace");

    let (status, _) = app.delete(&uri, &admin).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&uri, &admin).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(code(&body), ErrorCode::HotelNotFound.code() as u64);
}

#[tokio::test]
async fn test_invalid_price_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_token("admin@example.com").await;

    for price in ["-5", "12.50", "free"] {
        let (status, body) = app
            .post(
                "/api/caterings",
                &admin,
                json!({ "catername": "Feast", "cater_price": price }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price}");
        assert_eq!(code(&body), ErrorCode::InvalidPrice.code() as u64);
    }
}

#[tokio::test]
async fn test_non_admin_cannot_write() {
    let app = TestApp::new().await;
    let user = app.user_token("user@example.com").await;

    let (status, body) = app
        .post("/api/vendors", &user, json!({ "vendorname": "Blooms" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(code(&body), ErrorCode::AdminRequired.code() as u64);

    // Reads are fine for any signed-in user
    let (status, body) = app.get("/api/vendors", &user).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_catering_list_is_public_and_flags_admins() {
    let app = TestApp::new().await;
    let admin = app.admin_token("admin@example.com").await;
    app.post(
        "/api/caterings",
        &admin,
        json!({ "catername": "Feast", "cater_price": "1500" }),
    )
    .await;

    let (status, body) = app.call(Method::GET, "/api/caterings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_admin"], false);
    assert_eq!(body["data"]["caterings"][0]["catername"], "Feast");

    let (_, body) = app.get("/api/caterings", &admin).await;
    assert_eq!(body["data"]["is_admin"], true);

    // Hotels are not public
    let (status, _) = app.call(Method::GET, "/api/hotels", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_event_id_reads_as_not_found() {
    let app = TestApp::new().await;
    let user = app.user_token("user@example.com").await;

    let (status, body) = app.get("/api/events/hotel:abc", &user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(code(&body), ErrorCode::EventNotFound.code() as u64);
}
