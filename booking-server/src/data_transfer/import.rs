//! Snapshot import

use std::path::Path;

use serde_json::Value;
use shared::models::{ImportOutcome, ImportReport, ImportedCollection};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{Collection, TransferError};

/// A document ready to be written back
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDocument {
    pub id: Option<RecordId>,
    pub content: Value,
}

/// Turn a snapshot id (`id` or legacy `_id`) into a record id for `table`
///
/// A `"table:key"` string for the same table keeps its key; any other
/// string (or a `{"$oid": ...}` wrapper, or a number) becomes the key.
pub fn snapshot_record_id(table: &str, raw: Value) -> Option<RecordId> {
    let key = match raw {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map.get("$oid")?.as_str()?.to_string(),
        _ => return None,
    };
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    match key.parse::<RecordId>() {
        Ok(id) if id.table() == table => Some(id),
        _ => Some(RecordId::from_table_key(table, key)),
    }
}

/// Split a snapshot document into id and content; non-objects are dropped
///
/// Reference fields are re-qualified the same way as ids, so a legacy
/// `user_id: "65f…"` still points at the owner imported as `user:65f…`.
pub fn prepare_document(collection: Collection, doc: Value) -> Option<PreparedDocument> {
    let Value::Object(mut map) = doc else {
        return None;
    };
    let id = map.remove("id");
    let legacy_id = map.remove("_id");
    let id = id
        .or(legacy_id)
        .and_then(|raw| snapshot_record_id(collection.table(), raw));

    for (field, table) in collection.references() {
        let Some(raw) = map.get(*field).cloned() else {
            continue;
        };
        if let Some(reference) = snapshot_record_id(table, raw) {
            map.insert(field.to_string(), Value::String(reference.to_string()));
        }
    }

    Some(PreparedDocument {
        id,
        content: Value::Object(map),
    })
}

fn skipped(collection: Collection, reason: impl Into<String>) -> ImportedCollection {
    ImportedCollection {
        collection: collection.name().to_string(),
        outcome: ImportOutcome::Skipped,
        documents: 0,
        reason: Some(reason.into()),
    }
}

/// Restore every collection whose snapshot file exists and is non-empty
///
/// Each replaced collection is deleted and refilled inside one
/// transaction. Missing, empty and unparsable files leave their collection
/// untouched.
pub async fn import_all(db: &Surreal<Db>, dir: &Path) -> Result<ImportReport, TransferError> {
    tracing::warn!("Importing collections; concurrent writers are not held off");

    let mut collections = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let path = dir.join(collection.file_name());
        let result = match std::fs::read(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => skipped(collection, "missing"),
            Err(e) => return Err(TransferError::io(&path, e)),
            Ok(bytes) => match serde_json::from_slice::<Vec<Value>>(&bytes) {
                Err(e) => {
                    tracing::warn!(collection = collection.name(), error = %e, "Unparsable snapshot file");
                    skipped(collection, format!("unparsable: {}", e))
                }
                Ok(docs) => {
                    let prepared: Vec<_> = docs
                        .into_iter()
                        .filter_map(|doc| prepare_document(collection, doc))
                        .collect();
                    if prepared.is_empty() {
                        skipped(collection, "empty")
                    } else {
                        let documents = prepared.len();
                        replace_collection(db, collection, prepared).await?;
                        tracing::info!(collection = collection.name(), documents, "Collection replaced");
                        ImportedCollection {
                            collection: collection.name().to_string(),
                            outcome: ImportOutcome::Replaced,
                            documents,
                            reason: None,
                        }
                    }
                }
            },
        };
        collections.push(result);
    }

    Ok(ImportReport {
        directory: dir.display().to_string(),
        collections,
    })
}

/// Delete-all then insert-all, in one transaction
async fn replace_collection(
    db: &Surreal<Db>,
    collection: Collection,
    documents: Vec<PreparedDocument>,
) -> Result<(), TransferError> {
    let table = collection.table();
    let mut sql = String::from("BEGIN TRANSACTION;\n");
    sql.push_str(&format!("DELETE {};\n", table));
    for (i, doc) in documents.iter().enumerate() {
        if doc.id.is_some() {
            sql.push_str(&format!("CREATE $id_{i} CONTENT $doc_{i};\n"));
        } else {
            sql.push_str(&format!("CREATE {table} CONTENT $doc_{i};\n"));
        }
    }
    sql.push_str("COMMIT TRANSACTION;");

    let mut query = db.query(sql);
    for (i, doc) in documents.into_iter().enumerate() {
        if let Some(id) = doc.id {
            query = query.bind((format!("id_{i}"), id));
        }
        query = query.bind((format!("doc_{i}"), doc.content));
    }
    query.await?.check()?;
    Ok(())
}
