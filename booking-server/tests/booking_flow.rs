//! Booking lifecycle, payment and receipt

mod common;

use axum::body::Body;
use common::{GATEWAY_KEY_ID, GATEWAY_SECRET, TestApp, code};
use booking_server::payment::signature;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::ErrorCode;

struct Catalog {
    hotel: String,
    catering: String,
    event: String,
}

async fn seed_catalog(app: &TestApp) -> Catalog {
    let admin = app.admin_token("admin@example.com").await;
    let id = |body: Value| body["data"]["id"].as_str().unwrap().to_string();

    let (_, hotel) = app
        .post("/api/hotels", &admin, json!({ "hotel_name": "Grand Palace", "price": "5000" }))
        .await;
    let (_, catering) = app
        .post("/api/caterings", &admin, json!({ "catername": "Feast", "cater_price": "1500" }))
        .await;
    let (_, event) = app
        .post("/api/events", &admin, json!({ "eventname": "Wedding" }))
        .await;

    Catalog {
        hotel: id(hotel),
        catering: id(catering),
        event: id(event),
    }
}

fn booking_body(catalog: &Catalog, date: &str) -> Value {
    json!({
        "event_date": date,
        "start_at": "18:30",
        "max_total_hour": 5,
        "no_of_guest": "120",
        "dj_name_desc": "DJ Nova",
        "hotel_id": catalog.hotel,
        "catering_id": catalog.catering,
        "event_id": catalog.event,
        "amount": 1
    })
}

#[tokio::test]
async fn test_amount_is_derived_from_catalog_prices() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("asha@example.com").await;

    let (status, body) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-12-20"))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let booking = &body["data"];
    assert_eq!(booking["amount"], 6500);
    assert_eq!(booking["payment_status"], 0);
    assert_eq!(booking["accept_status"], 0);
    assert_eq!(booking["no_of_guest"], 120);
    assert!(booking["user_id"].as_str().unwrap().starts_with("user:"));

    // Nothing priced selected: minimum amount
    let (_, body) = app
        .post(
            "/api/bookings",
            &user,
            json!({ "event_date": "2026-11-01", "event_id": catalog.event }),
        )
        .await;
    assert_eq!(body["data"]["amount"], 100);

    // Dangling and garbage references count as zero
    let (status, body) = app
        .post(
            "/api/bookings",
            &user,
            json!({
                "event_date": "2026-10-01",
                "hotel_id": "hotel:gone",
                "catering_id": "not a ::: reference"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["amount"], 100);
}

#[tokio::test]
async fn test_invalid_event_date() {
    let app = TestApp::new().await;
    let user = app.user_token("asha@example.com").await;
    let (status, body) = app
        .post("/api/bookings", &user, json!({ "event_date": "20/12/2026" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code(&body), ErrorCode::InvalidEventDate.code() as u64);
}

#[tokio::test]
async fn test_update_recomputes_amount_and_list_is_sorted() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("asha@example.com").await;

    let (_, early) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-05-01"))
        .await;
    let (_, _late) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-09-01"))
        .await;
    let early_id = early["data"]["id"].as_str().unwrap().to_string();

    let mut changed = booking_body(&catalog, "2026-05-02");
    changed["catering_id"] = Value::Null;
    let (status, body) = app
        .put(&format!("/api/bookings/{}", early_id), &user, changed)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["amount"], 5000);
    assert_eq!(body["data"]["event_date"], "2026-05-02");
    assert_eq!(body["data"]["created_at"], early["data"]["created_at"]);

    let (_, body) = app.get("/api/bookings", &user).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["event_date"], "2026-09-01");
    assert_eq!(list[0]["hotel_name"], "Grand Palace");
    assert_eq!(list[0]["catername"], "Feast");
    assert_eq!(list[0]["eventname"], "Wedding");
    assert!(list[1].get("catername").is_none());
}

#[tokio::test]
async fn test_switching_catering_recomputes_amount() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let admin = app.admin_token("chef@example.com").await;
    let user = app.user_token("asha@example.com").await;

    let (_, light) = app
        .post("/api/caterings", &admin, json!({ "catername": "Light Bites", "cater_price": "800" }))
        .await;
    let light_id = light["data"]["id"].as_str().unwrap().to_string();

    let (_, created) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-06-10"))
        .await;
    assert_eq!(created["data"]["amount"], 6500);
    let uri = format!("/api/bookings/{}", created["data"]["id"].as_str().unwrap());

    let mut changed = booking_body(&catalog, "2026-06-10");
    changed["catering_id"] = json!(light_id);
    let (status, body) = app.put(&uri, &user, changed).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["amount"], 5800);
    assert_eq!(body["data"]["catering_id"], light_id.as_str());

    let (_, view) = app.get(&format!("{uri}/status"), &user).await;
    assert_eq!(view["data"]["catername"], "Light Bites");
}

#[tokio::test]
async fn test_bookings_are_isolated_per_user() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let owner = app.user_token("owner@example.com").await;
    let other = app.user_token("other@example.com").await;

    let (_, created) = app
        .post("/api/bookings", &owner, booking_body(&catalog, "2026-12-20"))
        .await;
    let uri = format!("/api/bookings/{}", created["data"]["id"].as_str().unwrap());

    let (status, body) = app.get(&uri, &other).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(code(&body), ErrorCode::BookingNotFound.code() as u64);

    let (status, _) = app.put(&uri, &other, booking_body(&catalog, "2026-12-21")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.delete(&uri, &other).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/bookings", &other).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = app.delete(&uri, &owner).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&uri, &owner).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_options_list_selectable_catalog() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("picker@example.com").await;

    let (status, body) = app.get("/api/bookings/options", &user).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["hotels"][0]["id"], catalog.hotel.as_str());
    assert_eq!(data["hotels"][0]["hotel_name"], "Grand Palace");
    assert_eq!(data["caterings"][0]["id"], catalog.catering.as_str());
    assert_eq!(data["events"][0]["id"], catalog.event.as_str());
}

#[tokio::test]
async fn test_payment_order_and_verification() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("asha@example.com").await;

    let (_, created) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-12-20"))
        .await;
    let booking_id = created["data"]["id"].as_str().unwrap().to_string();
    let key = booking_id.trim_start_matches("booking:").to_string();

    let (status, body) = app
        .post(&format!("/api/payments/orders/{}", booking_id), &user, json!({}))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let order = &body["data"];
    assert_eq!(order["amount"], 650_000);
    assert_eq!(order["key_id"], GATEWAY_KEY_ID);
    assert_eq!(order["user"]["name"], "Asha Tester");
    assert_eq!(order["user"]["contact"], "9876543210");
    {
        let sent = app.gateway.orders.lock().unwrap();
        assert_eq!(sent[0].receipt, format!("booking_{}", key));
        assert_eq!(sent[0].payment_capture, 1);
        assert_eq!(sent[0].notes["booking_id"], booking_id);
    }
    let order_id = order["order_id"].as_str().unwrap().to_string();

    // Tampered signature: 200, not verified, booking marked failed
    let (status, body) = app
        .post(
            "/api/payments/verify",
            &user,
            json!({
                "razorpay_order_id": order_id,
                "razorpay_payment_id": "pay_1",
                "razorpay_signature": signature::sign(&order_id, "pay_1", "wrong secret").unwrap(),
                "booking_id": booking_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verified"], false);
    assert_eq!(body["message"], "Payment verification failed. Please try again.");
    let (_, status_view) = app.get(&format!("/api/bookings/{}/status", booking_id), &user).await;
    assert_eq!(status_view["data"]["payment_status"], 2);

    // Incomplete payload
    let (status, body) = app
        .post("/api/payments/verify", &user, json!({ "booking_id": booking_id }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code(&body), ErrorCode::InvalidPaymentPayload.code() as u64);

    // Genuine signature
    let (status, body) = app
        .post(
            "/api/payments/verify",
            &user,
            json!({
                "razorpay_order_id": order_id,
                "razorpay_payment_id": "pay_2",
                "razorpay_signature": signature::sign(&order_id, "pay_2", GATEWAY_SECRET).unwrap(),
                "booking_id": booking_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verified"], true);
    assert_eq!(body["data"]["payment_status"], 1);
    assert_eq!(body["message"], "Payment successful! Your booking is confirmed.");

    // Paid bookings are frozen, and never reach the gateway again
    let (status, body) = app
        .post(&format!("/api/payments/orders/{}", booking_id), &user, json!({}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code(&body), ErrorCode::BookingAlreadyPaid.code() as u64);
    assert_eq!(app.gateway.orders.lock().unwrap().len(), 1);
    let (status, body) = app
        .put(
            &format!("/api/bookings/{}", booking_id),
            &user,
            booking_body(&catalog, "2027-01-01"),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code(&body), ErrorCode::BookingAlreadyPaid.code() as u64);
}

#[tokio::test]
async fn test_verification_of_someone_elses_booking() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let owner = app.user_token("owner@example.com").await;
    let other = app.user_token("other@example.com").await;

    let (_, created) = app
        .post("/api/bookings", &owner, booking_body(&catalog, "2026-12-20"))
        .await;
    let booking_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .post(
            "/api/payments/verify",
            &other,
            json!({
                "razorpay_order_id": "order_x",
                "razorpay_payment_id": "pay_x",
                "razorpay_signature": signature::sign("order_x", "pay_x", GATEWAY_SECRET).unwrap(),
                "booking_id": booking_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(code(&body), ErrorCode::BookingMissingAfterPayment.code() as u64);

    let (_, view) = app.get(&format!("/api/bookings/{}", booking_id), &owner).await;
    assert_eq!(view["data"]["payment_status"], 0);
}

#[tokio::test]
async fn test_receipt_download() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("asha@example.com").await;

    let (_, created) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-12-20"))
        .await;
    let booking_id = created["data"]["id"].as_str().unwrap().to_string();
    let key = booking_id.trim_start_matches("booking:");

    let request = Request::builder()
        .uri(format!("/api/receipts/{}", booking_id))
        .header(header::AUTHORIZATION, format!("Bearer {}", user))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert_eq!(
        disposition,
        format!("attachment; filename=\"Proforma-Receipt-Booking-{}.pdf\"", key)
    );
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_paid_receipt_drops_proforma_prefix() {
    let app = TestApp::new().await;
    let catalog = seed_catalog(&app).await;
    let user = app.user_token("asha@example.com").await;

    let (_, created) = app
        .post("/api/bookings", &user, booking_body(&catalog, "2026-12-20"))
        .await;
    let booking_id = created["data"]["id"].as_str().unwrap().to_string();
    let key = booking_id.trim_start_matches("booking:").to_string();

    let (status, body) = app
        .post(
            "/api/payments/verify",
            &user,
            json!({
                "razorpay_order_id": "order_r1",
                "razorpay_payment_id": "pay_r1",
                "razorpay_signature": signature::sign("order_r1", "pay_r1", GATEWAY_SECRET).unwrap(),
                "booking_id": booking_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verified"], true);

    let request = Request::builder()
        .uri(format!("/api/receipts/{}", key))
        .header(header::AUTHORIZATION, format!("Bearer {}", user))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert_eq!(
        disposition,
        format!("attachment; filename=\"Receipt-Booking-{}.pdf\"", key)
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF"));
}
