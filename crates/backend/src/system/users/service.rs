use anyhow::Result;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use super::{repository, User};
use crate::system::auth::password;

/// Create an active account. Fails on a blank or taken username.
pub async fn create(conn: &DatabaseConnection, username: &str, plain_password: &str, is_admin: bool) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(conn, username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }
    if plain_password.is_empty() {
        return Err(anyhow::anyhow!("Password cannot be empty"));
    }

    let password_hash = password::hash_password(plain_password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        is_active: true,
        is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(conn, &user, &password_hash).await?;
    Ok(user)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: &str) -> Result<Option<User>> {
    repository::get_by_id(conn, id).await
}

pub async fn count(conn: &DatabaseConnection) -> Result<usize> {
    repository::count_users(conn).await
}

/// Check a login. `None` for an unknown user, an inactive account or a wrong
/// password.
pub async fn verify_credentials(conn: &DatabaseConnection, username: &str, plain_password: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(conn, username.trim()).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        tracing::warn!(user = %user.username, "Login attempt for inactive account");
        return Ok(None);
    }

    let password_hash = repository::get_password_hash(conn, &user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(plain_password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(conn, &user.id).await {
        tracing::warn!("Could not record last login for {}: {}", user.username, e);
    }

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    async fn conn() -> (tempfile::TempDir, DatabaseConnection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = db::connect(&dir.path().join("users.db")).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();
        (dir, conn)
    }

    #[tokio::test]
    async fn test_create_and_verify() {
        let (_dir, conn) = conn().await;
        let user = create(&conn, "admin", "tailor-pass", true).await.unwrap();
        assert!(user.is_admin);
        assert_eq!(count(&conn).await.unwrap(), 1);

        let ok = verify_credentials(&conn, "admin", "tailor-pass").await.unwrap();
        assert_eq!(ok.map(|u| u.id), Some(user.id.clone()));

        assert!(verify_credentials(&conn, "admin", "nope").await.unwrap().is_none());
        assert!(verify_credentials(&conn, "ghost", "tailor-pass").await.unwrap().is_none());

        let reloaded = get_by_id(&conn, &user.id).await.unwrap().unwrap();
        assert!(reloaded.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let (_dir, conn) = conn().await;
        create(&conn, "admin", "one", true).await.unwrap();
        assert!(create(&conn, "admin", "two", false).await.is_err());
        assert!(create(&conn, "  ", "two", false).await.is_err());
    }
}
