use contracts::domain::a002_booking::aggregate::{Booking, BookingId};
use contracts::domain::a002_booking::draft::{BookingDraft, DraftError};
use contracts::enums::BookingStatus;

use super::repository::BookingStore;
use crate::domain::a001_design::repository::DesignStore;
use crate::shared::error::ServiceError;

/// Validate a booking draft and store it as a new `Pending` booking.
///
/// Nothing is written unless the draft is submittable and its measurement
/// keys match the design.
pub async fn submit(
    designs: &dyn DesignStore,
    bookings: &dyn BookingStore,
    draft: BookingDraft,
) -> Result<Booking, ServiceError> {
    draft.validate()?;

    let design = designs
        .get_by_id(&draft.design_id)
        .await
        .map_err(ServiceError::persistence)?
        .ok_or_else(|| ServiceError::NotFound(format!("Design {}", draft.design_id)))?;

    if !draft.measurements.matches_design(&design) {
        return Err(DraftError::DesignMismatch(design.id.clone()).into());
    }

    let id = bookings
        .allocate_id()
        .await
        .map_err(ServiceError::persistence)?;
    let booking = Booking::from_draft(id, &design, draft)?;

    bookings
        .create(&booking)
        .await
        .map_err(ServiceError::persistence)?;

    tracing::info!(
        booking_id = %booking.id,
        design_id = %booking.design_id,
        unit = booking.unit.code(),
        "Booking created for {}",
        booking.customer_name
    );
    Ok(booking)
}

/// All bookings, newest first
pub async fn list(store: &dyn BookingStore) -> Result<Vec<Booking>, ServiceError> {
    store.list_all().await.map_err(ServiceError::persistence)
}

pub async fn get_by_id(store: &dyn BookingStore, id: &BookingId) -> Result<Booking, ServiceError> {
    store
        .get_by_id(id)
        .await
        .map_err(ServiceError::persistence)?
        .ok_or_else(|| ServiceError::NotFound(format!("Booking {}", id)))
}

/// Change the status of a booking (admin).
///
/// Any transition between the three statuses is allowed. Setting the current
/// status again leaves the record untouched.
pub async fn set_status(
    store: &dyn BookingStore,
    id: &BookingId,
    raw_status: &str,
) -> Result<Booking, ServiceError> {
    let status: BookingStatus = raw_status.parse()?;
    let current = get_by_id(store, id).await?;
    if current.status == status {
        tracing::info!(booking_id = %id, "Booking status unchanged: {}", status);
        return Ok(current);
    }
    let previous = current.status;

    let updated = store
        .update_status(id, status)
        .await
        .map_err(ServiceError::persistence)?
        .ok_or_else(|| ServiceError::NotFound(format!("Booking {}", id)))?;

    tracing::info!(
        booking_id = %updated.id,
        "Booking status changed: {} -> {}",
        previous,
        updated.status
    );
    Ok(updated)
}
