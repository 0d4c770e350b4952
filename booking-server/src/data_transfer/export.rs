//! Snapshot export

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{ExportReport, ExportedCollection};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{Collection, TransferError};
use crate::db::models::{Booking, Catering, Event, Hotel, User, Vendor};

/// Write every collection to `dir`, one pretty-printed JSON array per file
///
/// Record ids are written as `"table:key"` text. Empty collections produce
/// an empty array.
pub async fn export_all(db: &Surreal<Db>, dir: &Path) -> Result<ExportReport, TransferError> {
    tracing::warn!("Exporting all collections; concurrent writers are not held off");
    std::fs::create_dir_all(dir).map_err(|e| TransferError::io(dir, e))?;

    let mut collections = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let documents = match collection {
            Collection::Users => export_table::<User>(db, collection, dir).await?,
            Collection::Events => export_table::<Event>(db, collection, dir).await?,
            Collection::Hotels => export_table::<Hotel>(db, collection, dir).await?,
            Collection::Caterings => export_table::<Catering>(db, collection, dir).await?,
            Collection::Vendors => export_table::<Vendor>(db, collection, dir).await?,
            Collection::Bookings => export_table::<Booking>(db, collection, dir).await?,
        };
        tracing::info!(collection = collection.name(), documents, "Collection exported");
        collections.push(ExportedCollection {
            collection: collection.name().to_string(),
            file: collection.file_name(),
            documents,
        });
    }

    Ok(ExportReport {
        directory: dir.display().to_string(),
        exported_at: shared::util::now_millis(),
        collections,
    })
}

async fn export_table<T>(
    db: &Surreal<Db>,
    collection: Collection,
    dir: &Path,
) -> Result<usize, TransferError>
where
    T: Serialize + DeserializeOwned,
{
    let records: Vec<T> = db
        .query("SELECT * FROM type::table($table)")
        .bind(("table", collection.table()))
        .await?
        .take(0)?;

    let path = dir.join(collection.file_name());
    let json = serde_json::to_vec_pretty(&records)?;
    std::fs::write(&path, json).map_err(|e| TransferError::io(&path, e))?;
    Ok(records.len())
}
