use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::a001_design::repository::SqliteDesignStore;
use crate::domain::a001_design::service as design_service;
use crate::domain::a002_booking::repository::SqliteBookingStore;
use crate::shared::config::{self, AuthConfig, Config};
use crate::shared::data::db;
use crate::shared::state::AppState;
use crate::system::auth::{jwt, password};
use crate::system::users::service as user_service;

/// Open the database, create missing tables, prepare auth and the demo
/// catalog, and assemble the shared application state.
pub async fn bootstrap(config: &Config) -> Result<AppState> {
    let db_path = config::get_database_path(config);
    let conn = db::connect(&db_path).await?;
    db::ensure_schema(&conn).await.context("Failed to create tables")?;

    let secret = jwt::load_or_create_secret(&conn, config.auth.jwt_secret.as_deref()).await?;
    ensure_admin_user_exists(&conn, &config.auth).await?;

    let designs = Arc::new(SqliteDesignStore::new(conn.clone()));
    if config.catalog.seed_demo_data {
        design_service::insert_test_data(designs.as_ref()).await?;
    }

    Ok(AppState {
        db: conn.clone(),
        designs,
        bookings: Arc::new(SqliteBookingStore::new(conn)),
        jwt: Arc::new(jwt::JwtKeys::new(&secret)),
    })
}

/// Create the admin account when no user exists yet.
///
/// The password comes from configuration; without one a random password is
/// generated and written to the log once.
pub async fn ensure_admin_user_exists(conn: &DatabaseConnection, auth: &AuthConfig) -> Result<()> {
    if user_service::count(conn).await? > 0 {
        return Ok(());
    }

    let configured = auth.admin_password.as_deref().filter(|p| !p.is_empty());
    let plain = match configured {
        Some(p) => p.to_string(),
        None => password::generate_password(16),
    };

    let admin = user_service::create(conn, &auth.admin_username, &plain, true).await?;
    tracing::info!(user_id = %admin.id, "Admin user '{}' created", admin.username);
    if configured.is_none() {
        tracing::warn!(
            "No admin password configured. Generated password for '{}': {}",
            admin.username,
            plain
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_created_once() {
        let dir = tempfile::tempdir().unwrap();
        let conn = db::connect(&dir.path().join("init.db")).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();

        let auth = AuthConfig {
            admin_username: "owner".into(),
            admin_password: Some("stitch".into()),
            jwt_secret: None,
        };
        ensure_admin_user_exists(&conn, &auth).await.unwrap();
        ensure_admin_user_exists(&conn, &auth).await.unwrap();
        assert_eq!(user_service::count(&conn).await.unwrap(), 1);

        let user = user_service::verify_credentials(&conn, "owner", "stitch")
            .await
            .unwrap()
            .unwrap();
        assert!(user.is_admin);
    }
}
