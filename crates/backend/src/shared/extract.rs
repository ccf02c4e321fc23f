use axum::extract::FromRequest;
use contracts::domain::common::AggregateId;

use crate::shared::error::ServiceError;

/// `Json` body extractor whose rejection is a `ServiceError`, so a body that
/// does not parse gets the same `{error, message}` response as other input
/// errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct ApiJson<T>(pub T);

/// Parse an aggregate id taken from the URL path
pub fn path_id<I: AggregateId>(raw: &str) -> Result<I, ServiceError> {
    I::from_string(raw).map_err(ServiceError::InvalidArgument)
}
