use crate::error::ApiError;
use crate::models::responses::SearchResponse;
use crate::models::storage::Backend;
use crate::services::search::{search_catalog, MSG_INVALID_LIMIT};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

pub async fn search_books(
    State(backend): State<Backend>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        warn!("Rejected search parameters: {}", e);
        ApiError::BadRequest(MSG_INVALID_LIMIT.to_string())
    })?;

    let books = search_catalog(backend.as_ref(), params.q.as_deref(), params.limit).await?;

    Ok(Json(SearchResponse { books }))
}
