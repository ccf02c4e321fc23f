use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 90;
const SECRET_SETTING_KEY: &str = "jwt_secret";

/// HS256 signing keys for access tokens
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Generate an access token valid for 24 hours
    pub fn generate_access_token(&self, user_id: &str, username: &str, is_admin: bool) -> Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            is_admin,
            exp: (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding).context("Failed to encode JWT token")
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .context("Failed to decode JWT token")?;
        Ok(token_data.claims)
    }
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Refresh token expiration timestamp (RFC 3339)
pub fn calculate_refresh_token_expiration() -> String {
    let exp = Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS);
    exp.to_rfc3339()
}

/// Resolve the signing secret: configured value first, then the one stored in
/// `sys_settings`, otherwise a fresh one that is stored for the next start.
pub async fn load_or_create_secret(conn: &DatabaseConnection, configured: Option<&str>) -> Result<String> {
    if let Some(secret) = configured.map(str::trim).filter(|s| !s.is_empty()) {
        return Ok(secret.to_string());
    }

    if let Some(secret) = get_secret_from_db(conn).await? {
        return Ok(secret);
    }

    let secret = generate_secret();
    save_secret_to_db(conn, &secret).await?;
    tracing::info!("Generated new JWT signing secret");
    Ok(secret)
}

/// 256 random bits, base64 encoded
fn generate_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_secret_from_db(conn: &DatabaseConnection) -> Result<Option<String>> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [SECRET_SETTING_KEY.into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_secret_to_db(conn: &DatabaseConnection, secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            SECRET_SETTING_KEY.into(),
            secret.to_string().into(),
            "Auto-generated JWT secret for authentication".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await
    .context("Failed to store JWT secret")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    #[test]
    fn test_token_round_trip() {
        let keys = JwtKeys::new("test-secret");
        let token = keys.generate_access_token("u-1", "admin", true).unwrap();
        let claims = keys.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "admin");
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = JwtKeys::new("one")
            .generate_access_token("u-1", "admin", true)
            .unwrap();
        assert!(JwtKeys::new("two").validate_token(&token).is_err());
        assert!(JwtKeys::new("one").validate_token("garbage").is_err());
    }

    #[tokio::test]
    async fn test_secret_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let conn = db::connect(&dir.path().join("auth.db")).await.unwrap();
        db::ensure_schema(&conn).await.unwrap();

        let first = load_or_create_secret(&conn, None).await.unwrap();
        let second = load_or_create_secret(&conn, None).await.unwrap();
        assert_eq!(first, second);

        let configured = load_or_create_secret(&conn, Some("from-config")).await.unwrap();
        assert_eq!(configured, "from-config");
    }
}
