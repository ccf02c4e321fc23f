use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::a001_design::repository::DesignStore;
use crate::domain::a002_booking::repository::BookingStore;
use crate::system::auth::jwt::JwtKeys;

/// Everything a request handler may touch, passed explicitly through axum state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub designs: Arc<dyn DesignStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub jwt: Arc<JwtKeys>,
}
