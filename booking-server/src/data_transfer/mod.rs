//! Bulk export / import
//!
//! Snapshots the six collections to `WORK_DIR/data/<collection>.json` and
//! restores them. Import replaces whole collections; it is a restore, not a
//! merge, and other writers are not held off while it runs.

pub mod export;
pub mod import;

pub use export::export_all;
pub use import::import_all;

use thiserror::Error;

/// Snapshot collections, in export / import order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Events,
    Hotels,
    Caterings,
    Vendors,
    Bookings,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Events,
        Collection::Hotels,
        Collection::Caterings,
        Collection::Vendors,
        Collection::Bookings,
    ];

    /// Collection name (also the file stem)
    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Events => "events",
            Collection::Hotels => "hotels",
            Collection::Caterings => "caterings",
            Collection::Vendors => "vendors",
            Collection::Bookings => "bookings",
        }
    }

    /// SurrealDB table
    pub const fn table(&self) -> &'static str {
        match self {
            Collection::Users => "user",
            Collection::Events => "event",
            Collection::Hotels => "hotel",
            Collection::Caterings => "catering",
            Collection::Vendors => "vendor",
            Collection::Bookings => "booking",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    /// Fields holding `"table:key"` references to other collections, with
    /// the table each one points at
    pub const fn references(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Collection::Bookings => &[
                ("user_id", "user"),
                ("hotel_id", "hotel"),
                ("catering_id", "catering"),
                ("event_id", "event"),
            ],
            _ => &[],
        }
    }
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] surrealdb::Error),
}

impl TransferError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        TransferError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
