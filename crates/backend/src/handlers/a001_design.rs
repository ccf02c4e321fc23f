use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_design::aggregate::{Design, DesignDto};
use serde::Deserialize;

use crate::domain::a001_design::service;
use crate::shared::error::ServiceError;
use crate::shared::extract::{path_id, ApiJson};
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// GET /api/design?search=
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Design>>, ServiceError> {
    let designs = service::list(state.designs.as_ref(), query.search.as_deref()).await?;
    Ok(Json(designs))
}

/// GET /api/design/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Design>, ServiceError> {
    let design = service::get_by_id(state.designs.as_ref(), &path_id(&id)?).await?;
    Ok(Json(design))
}

/// POST /api/design
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<DesignDto>,
) -> Result<(StatusCode, Json<Design>), ServiceError> {
    let design = service::create(state.designs.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(design)))
}
