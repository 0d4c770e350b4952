//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::Role;
use shared::{ApiResponse, AppError, AppResult, ErrorCode};
use validator::ValidateEmail;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::{RepoError, UserRepository};
use crate::security_log;

/// Fixed delay applied to every login attempt before answering
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a registration payload before touching the store
pub fn validate_registration(req: &RegisterRequest) -> AppResult<()> {
    let email = req.email.trim();
    if !email.validate_email() {
        return Err(AppError::validation("Invalid email address").with_detail("field", "email"));
    }
    if req.first_name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::RequiredField).with_detail("field", "first_name"));
    }
    if req.last_name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::RequiredField).with_detail("field", "last_name"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
        .with_detail("field", "password"));
    }
    if req.password != req.confirm_password {
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }
    Ok(())
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<ApiResponse<UserInfo>> {
    validate_registration(&req)?;
    let users = UserRepository::new(state.db()?);

    let email = req.email.trim().to_lowercase();
    if users.find_by_email(&email).await?.is_some() {
        return Err(AppError::new(ErrorCode::EmailAlreadyTaken));
    }

    let password_hash = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: None,
        email,
        first_name: req.first_name.trim().to_string(),
        last_name: req.last_name.trim().to_string(),
        password_hash,
        role: Role::User,
        contactno: req.contactno.unwrap_or_default(),
        gender: req.gender.unwrap_or_default(),
        address: req.address.unwrap_or_default(),
    };

    let created = users.create(user).await.map_err(|e| match e {
        // Lost a race against another registration with the same email
        RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailAlreadyTaken),
        other => other.into(),
    })?;

    tracing::info!(user_id = %created.id_string(), email = %created.email, "User registered");
    Ok(ApiResponse::success_with_message(
        "User Register Successfully",
        created.to_info(),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password answer the same way after the same delay.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let users = UserRepository::new(state.db()?);
    let email = req.email.trim().to_lowercase();
    let user = users.find_by_email(&email).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) if u.verify_password(&req.password) => u,
        Some(_) => {
            security_log!(WARN, "login_failed", email = %email, reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            security_log!(WARN, "login_failed", email = %email, reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let info = user.to_info();
    let token = state.get_jwt_service().generate_token(&info)?;

    tracing::info!(user_id = %info.id, role = %info.role, "User logged in");
    Ok(ApiResponse::success(LoginResponse { token, user: info }))
}

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> AppResult<ApiResponse<UserInfo>> {
    Ok(ApiResponse::success(user.to_info()))
}

/// POST /api/auth/logout
///
/// The token stays revoked until its own expiry.
pub async fn logout(State(state): State<ServerState>, user: CurrentUser) -> AppResult<ApiResponse<()>> {
    state.revocations.revoke(&user.jti, user.expires_at);
    tracing::info!(user_id = %user.id, "User logged out");
    Ok(ApiResponse::ok_with_message("Logged out"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "asha@example.com".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            contactno: None,
            gender: None,
            address: None,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration(&request()).is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let mut req = request();
        req.confirm_password = "other123".into();
        let err = validate_registration(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordMismatch);
    }

    #[test]
    fn test_short_password_counts_characters() {
        let mut req = request();
        req.password = "ééééé".into();
        req.confirm_password = req.password.clone();
        let err = validate_registration(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_bad_email() {
        let mut req = request();
        req.email = "not-an-email".into();
        assert_eq!(
            validate_registration(&req).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
    }
}
