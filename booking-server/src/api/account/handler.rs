//! Account Handlers

use axum::{Json, extract::State};
use shared::client::{LoginResponse, ProfileUpdate, UserInfo};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};
use validator::ValidateEmail;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::ProfileChanges;
use crate::db::models::user::TABLE;
use crate::db::repository::{RepoError, UserRepository, parse_record_id};

/// Trim a text field; a blank name is treated as "not provided"
fn name_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turn a profile edit into store changes
///
/// The role is not part of [`ProfileUpdate`], so it cannot be changed here.
pub fn profile_changes(update: ProfileUpdate) -> AppResult<ProfileChanges> {
    let email = match update.email.map(|e| e.trim().to_lowercase()) {
        Some(email) if email.is_empty() => None,
        Some(email) if !email.as_str().validate_email() => {
            return Err(AppError::validation("Invalid email address").with_detail("field", "email"));
        }
        other => other,
    };

    Ok(ProfileChanges {
        first_name: name_field(update.first_name),
        last_name: name_field(update.last_name),
        email,
        contactno: update.contactno,
        gender: update.gender,
        address: update.address,
    })
}

/// GET /api/account
pub async fn get_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<ApiResponse<UserInfo>> {
    let users = UserRepository::new(state.db()?);
    let id = parse_record_id(TABLE, &user.id)?;
    let stored = users
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", user.id)))?;
    Ok(ApiResponse::success(stored.to_info()))
}

/// PUT /api/account
///
/// The old token is revoked and a fresh one reflecting the new identity is
/// returned.
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(update): Json<ProfileUpdate>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let changes = profile_changes(update)?;
    let users = UserRepository::new(state.db()?);
    let id = parse_record_id(TABLE, &user.id)?;

    let updated = users.update_profile(&id, changes).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailAlreadyTaken),
        other => other.into(),
    })?;

    let info = updated.to_info();
    let token = state.get_jwt_service().generate_token(&info)?;
    state.revocations.revoke(&user.jti, user.expires_at);

    tracing::info!(user_id = %info.id, "Profile updated");
    Ok(ApiResponse::success_with_message(
        "Profile updated",
        LoginResponse { token, user: info },
    ))
}
