pub mod booking_status;
pub mod measurement_unit;

pub use booking_status::{BookingStatus, StatusError};
pub use measurement_unit::MeasurementUnit;
