use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{JwtService, TokenRevocations};
use crate::core::Config;
use crate::db::DbService;
use crate::payment::{PaymentGateway, RazorpayGateway};
use crate::receipt::{DocumentRenderer, PdfRenderer};

/// Server state, shared by every handler
///
/// Cloning is cheap: everything heavy sits behind an `Arc` or is already a
/// handle.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Embedded store, `None` when it failed to open |
/// | jwt_service | Token issue / validation |
/// | revocations | Logged-out token ids |
/// | payment_gateway | Gateway client, `None` without credentials |
/// | receipt_renderer | Receipt document renderer |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    db: Option<Surreal<Db>>,
    pub jwt_service: Arc<JwtService>,
    pub revocations: Arc<TokenRevocations>,
    payment_gateway: Option<Arc<dyn PaymentGateway>>,
    pub receipt_renderer: Arc<dyn DocumentRenderer>,
}

impl ServerState {
    /// Build a state around an already opened (or missing) store
    pub fn new(config: Config, db: Option<Surreal<Db>>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
            revocations: Arc::new(TokenRevocations::new()),
            payment_gateway: None,
            receipt_renderer: Arc::new(PdfRenderer::new()),
        }
    }

    /// Open the store and build the configured services
    ///
    /// A store that fails to open is logged and left absent: the server still
    /// starts, and every data operation answers "store unavailable".
    pub async fn initialize(config: &Config) -> Self {
        let db = match DbService::open(config.database_path()).await {
            Ok(service) => Some(service.db),
            Err(e) => {
                tracing::error!(error = %e, "Database unavailable, continuing without a store");
                None
            }
        };

        let mut state = Self::new(config.clone(), db);

        match RazorpayGateway::from_config(
            &config.payment,
            Duration::from_millis(config.request_timeout_ms),
        ) {
            Ok(gateway) => state.payment_gateway = Some(Arc::new(gateway)),
            Err(e) => tracing::warn!(error = %e, "Payment gateway not configured"),
        }

        state
    }

    /// Replace the payment gateway
    pub fn with_payment_gateway(mut self, gateway: Arc<dyn PaymentGateway>) -> Self {
        self.payment_gateway = Some(gateway);
        self
    }

    /// Store handle, or `StoreUnavailable`
    pub fn db(&self) -> AppResult<Surreal<Db>> {
        self.db.clone().ok_or_else(AppError::store_unavailable)
    }

    /// Gateway client, or a configuration error naming the missing setting
    pub fn payment_gateway(&self) -> AppResult<Arc<dyn PaymentGateway>> {
        self.payment_gateway.clone().ok_or_else(|| {
            AppError::not_configured(
                ErrorCode::PaymentNotConfigured,
                self.config
                    .payment
                    .missing_setting()
                    .unwrap_or("RAZORPAY_KEY_ID"),
            )
        })
    }

    pub fn has_payment_gateway(&self) -> bool {
        self.payment_gateway.is_some()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.config.data_dir()
    }
}
