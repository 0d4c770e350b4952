//! In-process test harness: embedded store on a temp dir, fake gateway,
//! router driven through `oneshot`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use booking_server::db::DbService;
use booking_server::db::models::user::TABLE as USER_TABLE;
use booking_server::db::repository::{UserRepository, parse_record_id};
use booking_server::payment::signature;
use booking_server::payment::{GatewayOrder, OrderRequest, PaymentError, PaymentGateway, PaymentSignature};
use booking_server::{Config, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::Role;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "secret123";
pub const GATEWAY_KEY_ID: &str = "rzp_test_fake";
pub const GATEWAY_SECRET: &str = "fake_gateway_secret";

/// Gateway double: remembers order requests, checks real HMAC signatures
#[derive(Default)]
pub struct FakeGateway {
    pub orders: Mutex<Vec<OrderRequest>>,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    fn key_id(&self) -> &str {
        GATEWAY_KEY_ID
    }

    fn currency(&self) -> &str {
        "INR"
    }

    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError> {
        let mut orders = self.orders.lock().unwrap();
        orders.push(request.clone());
        Ok(GatewayOrder {
            id: format!("order_test_{}", orders.len()),
            amount: request.amount,
            currency: request.currency,
            status: Some("created".into()),
        })
    }

    fn verify_signature(&self, sig: &PaymentSignature) -> Result<(), PaymentError> {
        signature::verify(&sig.order_id, &sig.payment_id, &sig.signature, GATEWAY_SECRET)
    }
}

pub struct TestApp {
    pub state: ServerState,
    pub gateway: Arc<FakeGateway>,
    pub work_dir: TempDir,
    app: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
        let db = DbService::open(config.database_path()).await.unwrap();
        let gateway = Arc::new(FakeGateway::default());
        let state = ServerState::new(config, Some(db.db)).with_payment_gateway(gateway.clone());
        Self::assemble(state, gateway, work_dir)
    }

    /// A store-backed server without payment credentials
    pub async fn without_gateway() -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
        let db = DbService::open(config.database_path()).await.unwrap();
        let state = ServerState::new(config, Some(db.db));
        Self::assemble(state, Arc::new(FakeGateway::default()), work_dir)
    }

    /// A server whose store failed to open and that has no gateway
    pub fn without_store() -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
        let state = ServerState::new(config, None);
        Self::assemble(state, Arc::new(FakeGateway::default()), work_dir)
    }

    fn assemble(state: ServerState, gateway: Arc<FakeGateway>, work_dir: TempDir) -> Self {
        let app = build_app(&state).with_state(state.clone());
        Self {
            state,
            gateway,
            work_dir,
            app,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> http::Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// JSON round trip; returns the status and the decoded envelope
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.send(request).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, Some(token), None).await
    }

    pub async fn register(&self, email: &str, first_name: &str) -> (StatusCode, Value) {
        self.call(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": email,
                "first_name": first_name,
                "last_name": "Tester",
                "password": PASSWORD,
                "confirm_password": PASSWORD,
                "contactno": "9876543210",
            })),
        )
        .await
    }

    pub async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Register a plain user and log in
    pub async fn user_token(&self, email: &str) -> String {
        let (status, body) = self.register(email, "Asha").await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        self.login(email).await
    }

    /// Register, promote in the store, then log in so the token carries the role
    pub async fn admin_token(&self, email: &str) -> String {
        let (status, body) = self.register(email, "Root").await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        let id = parse_record_id(USER_TABLE, body["data"]["id"].as_str().unwrap()).unwrap();
        UserRepository::new(self.state.db().unwrap())
            .set_role(&id, Role::Admin)
            .await
            .unwrap();
        self.login(email).await
    }
}

/// Numeric error code of an envelope
pub fn code(body: &Value) -> u64 {
    body["code"].as_u64().unwrap()
}
