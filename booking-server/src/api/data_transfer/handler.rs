//! Data Transfer Handlers

use axum::{Json, extract::State};
use shared::models::{ExportReport, ImportReport, ImportRequest};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::data_transfer::{self, TransferError};
use crate::security_log;

fn transfer_error(code: ErrorCode, err: TransferError) -> AppError {
    AppError::with_message(code, err.to_string())
}

/// POST /api/admin/export
pub async fn export(
    State(state): State<ServerState>,
    admin: CurrentUser,
) -> AppResult<ApiResponse<ExportReport>> {
    let db = state.db()?;
    let report = data_transfer::export_all(&db, &state.data_dir())
        .await
        .map_err(|e| transfer_error(ErrorCode::ExportFailed, e))?;

    security_log!(INFO, "data_exported", admin_id = %admin.id, directory = %report.directory);
    Ok(ApiResponse::success_with_message("Data exported", report))
}

/// POST /api/admin/import
///
/// Requires `{"confirm": true}`; without it nothing is touched.
pub async fn import(
    State(state): State<ServerState>,
    admin: CurrentUser,
    body: Option<Json<ImportRequest>>,
) -> AppResult<ApiResponse<ImportReport>> {
    let confirmed = body.is_some_and(|Json(req)| req.confirm);
    if !confirmed {
        return Err(AppError::new(ErrorCode::ImportNotConfirmed));
    }

    let db = state.db()?;
    let report = data_transfer::import_all(&db, &state.data_dir())
        .await
        .map_err(|e| transfer_error(ErrorCode::ImportFailed, e))?;

    security_log!(WARN, "data_imported", admin_id = %admin.id, directory = %report.directory);
    Ok(ApiResponse::success_with_message("Data imported", report))
}
