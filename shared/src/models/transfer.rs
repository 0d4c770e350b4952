//! Bulk export / import payloads

use serde::{Deserialize, Serialize};

/// Import request. Import replaces whole collections, so the operator has
/// to opt in explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// Per-collection export result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedCollection {
    pub collection: String,
    pub file: String,
    pub documents: usize,
}

/// Export summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub directory: String,
    pub exported_at: i64,
    pub collections: Vec<ExportedCollection>,
}

/// What happened to one collection during import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportOutcome {
    /// Collection was deleted and refilled from the file
    Replaced,
    /// File was missing, empty or unparsable; collection untouched
    Skipped,
}

/// Per-collection import result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportedCollection {
    pub collection: String,
    pub outcome: ImportOutcome,
    pub documents: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Import summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub directory: String,
    pub collections: Vec<ImportedCollection>,
}
