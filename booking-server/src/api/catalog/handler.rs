//! Catalog Handlers
//!
//! One set of generic handlers serves every catalog entity.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::{CurrentUser, MaybeUser};
use crate::booking::pricing;
use crate::core::ServerState;
use crate::db::models::{CatalogRecord, Catering};
use crate::db::repository::{CatalogRepository, RepoError};

/// Prices must be empty or a whole non-negative number
pub fn check_price(price: Option<&str>) -> AppResult<()> {
    match price {
        Some(p) if !pricing::is_valid_price(p) => Err(AppError::new(ErrorCode::InvalidPrice)
            .with_detail("price", p.to_string())),
        _ => Ok(()),
    }
}

fn check_name<T: CatalogRecord>(name: Option<&str>) -> AppResult<()> {
    match name {
        Some(n) if n.trim().is_empty() => Err(AppError::new(ErrorCode::RequiredField)
            .with_detail("field", format!("{} name", T::LABEL))),
        _ => Ok(()),
    }
}

/// Lookups that miss, or ids that cannot be parsed, report the entity's own
/// not-found code
fn repo_error<T: CatalogRecord>(err: RepoError, id: &str) -> AppError {
    match err {
        RepoError::NotFound(_) | RepoError::Validation(_) => {
            AppError::new(T::NOT_FOUND).with_detail("id", id.to_string())
        }
        other => other.into(),
    }
}

fn repository<T: CatalogRecord>(state: &ServerState) -> AppResult<CatalogRepository<T>> {
    Ok(CatalogRepository::new(state.db()?))
}

/// GET /api/{entity}
pub async fn list<T: CatalogRecord>(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<T>>> {
    let records = repository::<T>(&state)?.find_all().await?;
    Ok(ApiResponse::success(records))
}

/// GET /api/{entity}/{id}
pub async fn get_by_id<T: CatalogRecord>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<T>> {
    let record = repository::<T>(&state)?
        .find_by_id(&id)
        .await
        .map_err(|e| repo_error::<T>(e, &id))?
        .ok_or_else(|| AppError::new(T::NOT_FOUND).with_detail("id", id.clone()))?;
    Ok(ApiResponse::success(record))
}

/// POST /api/{entity}
pub async fn create<T: CatalogRecord>(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Json(payload): Json<T::Create>,
) -> AppResult<ApiResponse<T>> {
    check_price(T::create_price(&payload))?;
    let record = T::from_create(payload);
    check_name::<T>(Some(record.name()))?;

    let created = repository::<T>(&state)?.create(record).await?;
    let id = created.id().map(|id| id.to_string()).unwrap_or_default();
    tracing::info!(entity = T::TABLE, id = %id, admin_id = %admin.id, "Catalog entry created");

    Ok(ApiResponse::success_with_message(
        format!("{} created successfully", T::LABEL),
        created,
    ))
}

/// PUT /api/{entity}/{id}
pub async fn update<T: CatalogRecord>(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<T::Update>,
) -> AppResult<ApiResponse<T>> {
    check_price(T::update_price(&payload))?;
    check_name::<T>(T::update_name(&payload))?;

    let updated = repository::<T>(&state)?
        .update(&id, payload)
        .await
        .map_err(|e| repo_error::<T>(e, &id))?;
    tracing::info!(entity = T::TABLE, id = %id, admin_id = %admin.id, "Catalog entry updated");

    Ok(ApiResponse::success_with_message(
        format!("{} updated successfully", T::LABEL),
        updated,
    ))
}

/// DELETE /api/{entity}/{id}
///
/// Bookings that reference the entry keep their reference.
pub async fn delete<T: CatalogRecord>(
    State(state): State<ServerState>,
    admin: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    repository::<T>(&state)?
        .delete(&id)
        .await
        .map_err(|e| repo_error::<T>(e, &id))?;
    tracing::info!(entity = T::TABLE, id = %id, admin_id = %admin.id, "Catalog entry deleted");

    Ok(ApiResponse::ok_with_message(format!(
        "{} deleted successfully",
        T::LABEL
    )))
}

/// Public catering listing
#[derive(Debug, Serialize)]
pub struct CateringListing {
    pub is_admin: bool,
    pub caterings: Vec<Catering>,
}

/// GET /api/caterings (public)
pub async fn list_caterings(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<ApiResponse<CateringListing>> {
    let caterings = repository::<Catering>(&state)?.find_all().await?;
    Ok(ApiResponse::success(CateringListing {
        is_admin: user.is_some_and(|u| u.is_admin()),
        caterings,
    }))
}
