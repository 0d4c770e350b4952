//! User Directory Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::client::{ChangeRoleRequest, UserInfo};
use shared::models::Role;
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::user::TABLE;
use crate::db::repository::{RepoError, UserRepository, parse_record_id};
use crate::security_log;

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<UserInfo>>> {
    let users = UserRepository::new(state.db()?).find_all().await?;
    Ok(ApiResponse::success(users.iter().map(|u| u.to_info()).collect()))
}

/// PUT /api/users/{id}/role
pub async fn change_role(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<ChangeRoleRequest>,
) -> AppResult<ApiResponse<UserInfo>> {
    let role: Role = req
        .role
        .trim()
        .parse()
        .map_err(|_| AppError::new(ErrorCode::InvalidRole).with_detail("role", req.role.clone()))?;

    let thing = parse_record_id(TABLE, &id).map_err(|_| AppError::not_found(format!("User {}", id)))?;
    let users = UserRepository::new(state.db()?);
    let updated = users.set_role(&thing, role).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::not_found(format!("User {}", id)),
        other => other.into(),
    })?;

    security_log!(
        INFO,
        "role_changed",
        admin_id = %admin.id,
        user_id = %updated.id_string(),
        role = %role
    );
    Ok(ApiResponse::success_with_message(
        "Role updated successfully",
        updated.to_info(),
    ))
}
