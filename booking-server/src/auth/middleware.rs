//! Authentication middleware
//!
//! Axum middleware for JWT authentication and admin authorization

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, Method};
use shared::AppError;

use crate::auth::policy::{AdminOnly, authorize};
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Routes reachable without a token
///
/// The catering list is public; a token, when present, still identifies the
/// caller so the listing can tell admins apart.
pub fn is_public_route(method: &Method, path: &str) -> bool {
    match path {
        "/api/auth/login" | "/api/auth/register" => true,
        _ => method == Method::GET && (path == "/api/caterings" || path.starts_with("/api/caterings/")),
    }
}

/// Resolve the caller from the `Authorization` header
///
/// Returns `Ok(None)` when no header is present.
pub fn authenticate(state: &ServerState, headers: &HeaderMap) -> Result<Option<CurrentUser>, AppError> {
    let Some(header) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(None);
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    let claims = state.get_jwt_service().validate_token(token).map_err(|e| {
        security_log!(WARN, "auth_failed", error = %e);
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    let user = CurrentUser::try_from(claims)
        .map_err(|e| AppError::invalid_token(format!("Malformed token claims: {}", e)))?;

    if state.revocations.is_revoked(&user.jti) {
        security_log!(WARN, "revoked_token_used", user_id = %user.id);
        return Err(AppError::new(shared::ErrorCode::TokenRevoked));
    }

    Ok(Some(user))
}

/// Authentication middleware
///
/// Extracts and validates `Authorization: Bearer <token>` and injects the
/// [`CurrentUser`] into the request extensions.
///
/// Skipped for:
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - public routes, see [`is_public_route`]
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS || !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.method(), req.uri().path()) {
        // Best effort: a bad token on a public route is simply ignored
        if let Ok(Some(user)) = authenticate(&state, req.headers()) {
            req.extensions_mut().insert(user);
        }
        return Ok(next.run(req).await);
    }

    match authenticate(&state, req.headers())? {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => {
            security_log!(WARN, "auth_missing", uri = %req.uri());
            Err(AppError::unauthorized())
        }
    }
}

/// Admin middleware, requires `Admin` or `SuperAdmin`
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::unauthorized)?;
    authorize(user, &AdminOnly)?;

    Ok(next.run(req).await)
}
