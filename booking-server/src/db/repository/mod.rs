//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.

pub mod booking;
pub mod catalog;
pub mod user;

pub use booking::BookingRepository;
pub use catalog::CatalogRepository;
pub use user::UserRepository;

use shared::AppError;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// Record ids travel as "table:key" everywhere. A bare key is accepted and
// resolved against the expected table; a key for another table is rejected.
// =============================================================================

/// Parse a record id for `table`
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RepoError::Validation(format!("Empty {} id", table)));
    }
    match raw.parse::<RecordId>() {
        Ok(id) if id.table() == table => Ok(id),
        Ok(id) => Err(RepoError::Validation(format!(
            "Expected a {} id, got {}",
            table,
            id.table()
        ))),
        Err(_) if !raw.contains(':') => Ok(RecordId::from_table_key(table, raw)),
        Err(_) => Err(RepoError::Validation(format!("Invalid ID: {}", raw))),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
