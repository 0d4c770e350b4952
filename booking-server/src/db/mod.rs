//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) plus schema bootstrap.

pub mod models;
pub mod repository;

use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use shared::AppError;

pub const NAMESPACE: &str = "booking";
pub const DATABASE: &str = "booking";

/// Statements applied on every open; all are idempotent
const SCHEMA: &str = r#"
DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user FIELDS email UNIQUE;
DEFINE INDEX IF NOT EXISTS booking_user ON TABLE booking FIELDS user_id;
"#;

/// Database service, owns the embedded store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store at `path` and apply the schema
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {}", e)))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {}", e)))?;

        tracing::info!(path = %path.display(), "Database ready");
        Ok(Self { db })
    }
}
