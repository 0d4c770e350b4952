//! Booking Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::BookingRequest;
use shared::{ApiResponse, AppResult};

use crate::auth::CurrentUser;
use crate::booking::{BookingOptions, BookingService, BookingView};
use crate::core::ServerState;
use crate::db::models::Booking;

fn service(state: &ServerState) -> AppResult<BookingService> {
    Ok(BookingService::new(state.db()?))
}

/// GET /api/bookings
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<ApiResponse<Vec<BookingView>>> {
    let bookings = service(&state)?.list(&user).await?;
    Ok(ApiResponse::success(bookings))
}

/// GET /api/bookings/options
pub async fn options(State(state): State<ServerState>) -> AppResult<ApiResponse<BookingOptions>> {
    Ok(ApiResponse::success(service(&state)?.options().await?))
}

/// POST /api/bookings
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(request): Json<BookingRequest>,
) -> AppResult<ApiResponse<Booking>> {
    let booking = service(&state)?.create(&user, request).await?;
    Ok(ApiResponse::success_with_message("Booking created", booking))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Booking>> {
    Ok(ApiResponse::success(service(&state)?.get(&user, &id).await?))
}

/// GET /api/bookings/{id}/status
pub async fn status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<BookingView>> {
    Ok(ApiResponse::success(service(&state)?.view(&user, &id).await?))
}

/// PUT /api/bookings/{id}
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<BookingRequest>,
) -> AppResult<ApiResponse<Booking>> {
    let booking = service(&state)?.update(&user, &id, request).await?;
    Ok(ApiResponse::success_with_message("Booking updated", booking))
}

/// DELETE /api/bookings/{id}
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    service(&state)?.delete(&user, &id).await?;
    Ok(ApiResponse::ok_with_message("Booking deleted"))
}
