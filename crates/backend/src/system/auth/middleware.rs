use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use contracts::system::auth::TokenClaims;

use crate::shared::error::ServiceError;
use crate::shared::state::AppState;

fn bearer_claims(state: &AppState, req: &Request) -> Result<TokenClaims, ServiceError> {
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(ServiceError::Unauthorized)?;

    state
        .jwt
        .validate_token(token)
        .map_err(|_| ServiceError::Unauthorized)
}

/// Middleware that requires a valid access token
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let claims = bearer_claims(&state, &req)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires admin privileges
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let claims = bearer_claims(&state, &req)?;
    if !claims.is_admin {
        tracing::warn!(user = %claims.username, "Admin route refused for non-admin user");
        return Err(ServiceError::Forbidden);
    }
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
