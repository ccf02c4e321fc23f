use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;
use crate::system::users::service as user_service;

fn internal(e: anyhow::Error) -> StatusCode {
    tracing::error!("Auth request failed: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&state.db, &request.username, &request.password)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            tracing::warn!(user = %request.username, "Login failed");
            StatusCode::UNAUTHORIZED
        })?;

    let access_token = state
        .jwt
        .generate_access_token(&user.id, &user.username, user.is_admin)
        .map_err(internal)?;
    let refresh_token = jwt::generate_refresh_token();
    store_refresh_token(&state.db, &user.id, &refresh_token)
        .await
        .map_err(internal)?;

    tracing::info!(user = %user.username, "User logged in");
    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user.info(),
    }))
}

/// Exchange a refresh token for a new access token
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = validate_refresh_token(&state.db, &request.refresh_token)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&state.db, &user_id)
        .await
        .map_err(internal)?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = state
        .jwt
        .generate_access_token(&user.id, &user.username, user.is_admin)
        .map_err(internal)?;

    Ok(Json(RefreshResponse { access_token }))
}

pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<StatusCode, StatusCode> {
    revoke_refresh_token(&state.db, &request.refresh_token)
        .await
        .map_err(internal)?;
    Ok(StatusCode::OK)
}

/// Current user (behind `require_auth`)
pub async fn current_user(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&state.db, &claims.sub)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(user.info()))
}

// Refresh token storage

async fn store_refresh_token(conn: &DatabaseConnection, user_id: &str, token: &str) -> anyhow::Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            uuid::Uuid::new_v4().to_string().into(),
            user_id.to_string().into(),
            hash_token(token).into(),
            jwt::calculate_refresh_token_expiration().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;
    Ok(())
}

/// Owner of a live (unexpired, unrevoked) refresh token
async fn validate_refresh_token(conn: &DatabaseConnection, token: &str) -> anyhow::Result<Option<String>> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), Utc::now().to_rfc3339().into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

async fn revoke_refresh_token(conn: &DatabaseConnection, token: &str) -> anyhow::Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
        [Utc::now().to_rfc3339().into(), hash_token(token).into()],
    ))
    .await?;
    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let h = hash_token("abc");
        assert_eq!(
            h,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
