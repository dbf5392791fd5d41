use crate::error::ApiError;
use crate::models::book::Book;
use crate::models::catalog::mock_books;
use crate::models::responses::RecommendationResponse;
use crate::models::storage::{Backend, CatalogBackend};
use crate::services::recommend::recommend;
use crate::utils::text::non_empty;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{info, warn};

pub const MSG_INPUT_REQUIRED: &str = "Lütfen favori kitaplarınızı yazın";
pub const MSG_NO_RECOMMENDATION: &str = "Üzgünüm, şu anda size uygun kitap önerisi bulamadım. Lütfen farklı bir kitap veya yazar adı deneyin.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default)]
    pub exclude_ids: Vec<u32>,
}

pub async fn recommend_books(
    State(backend): State<Backend>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected recommendation payload: {}", e);
        ApiError::BadRequest(MSG_INPUT_REQUIRED.to_string())
    })?;

    let user_input = request
        .user_input
        .as_deref()
        .and_then(non_empty)
        .ok_or_else(|| ApiError::BadRequest(MSG_INPUT_REQUIRED.to_string()))?;

    info!(
        "Recommendation request: {:?} (excluding {} books)",
        user_input,
        request.exclude_ids.len()
    );

    let catalog = match backend.list_books().await {
        Ok(books) => books,
        Err(e) => {
            warn!(
                "Failed to load catalog from {} backend, scoring built-in catalog: {}",
                backend.name(),
                e
            );
            mock_books()
        }
    };

    let exclude: HashSet<u32> = request.exclude_ids.into_iter().collect();
    let scored = {
        let mut rng = rand::thread_rng();
        recommend(&catalog, user_input, &exclude, &mut rng)
    };
    let books: Vec<Book> = scored.into_iter().map(|s| s.book).collect();

    if books.is_empty() {
        info!("No recommendation found for {:?}", user_input);
        return Ok(Json(RecommendationResponse {
            books,
            error: Some(MSG_NO_RECOMMENDATION.to_string()),
        }));
    }

    if let Err(e) = backend.record_recommendation(user_input, &books).await {
        warn!("Failed to record recommendation: {}", e);
    }

    Ok(Json(RecommendationResponse { books, error: None }))
}
