use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_booking::aggregate::{Booking, UpdateStatusDto};
use contracts::domain::a002_booking::draft::BookingDraft;

use crate::domain::a002_booking::service;
use crate::shared::error::ServiceError;
use crate::shared::extract::{path_id, ApiJson};
use crate::shared::state::AppState;

/// GET /api/booking
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, ServiceError> {
    Ok(Json(service::list(state.bookings.as_ref()).await?))
}

/// GET /api/booking/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, ServiceError> {
    let booking = service::get_by_id(state.bookings.as_ref(), &path_id(&id)?).await?;
    Ok(Json(booking))
}

/// POST /api/booking
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<BookingDraft>,
) -> Result<(StatusCode, Json<Booking>), ServiceError> {
    let booking = service::submit(state.designs.as_ref(), state.bookings.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /api/booking/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<UpdateStatusDto>,
) -> Result<Json<Booking>, ServiceError> {
    let booking = service::set_status(state.bookings.as_ref(), &path_id(&id)?, &dto.status).await?;
    Ok(Json(booking))
}
