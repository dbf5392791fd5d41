use crate::error::ApiError;
use crate::models::book::Book;
use crate::models::storage::CatalogBackend;
use crate::utils::text::non_empty;
use tracing::{error, info};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

pub const MSG_QUERY_REQUIRED: &str = "Arama sorgusu gerekli";
pub const MSG_SEARCH_FAILED: &str = "Arama yapılamadı";
pub const MSG_INVALID_LIMIT: &str = "Geçersiz sonuç sınırı";

/// Catalog entries whose title, author or genre contains `query`
/// case-insensitively, in catalog order, at most `limit` of them.
pub fn filter_catalog<'a>(books: &'a [Book], query: &str, limit: usize) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.matches_query(&needle))
        .take(limit)
        .collect()
}

pub async fn search_catalog(
    backend: &(dyn CatalogBackend + Send + Sync),
    query: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Book>, ApiError> {
    let query = query
        .and_then(non_empty)
        .ok_or_else(|| ApiError::BadRequest(MSG_QUERY_REQUIRED.to_string()))?;

    let limit = match limit {
        None => DEFAULT_SEARCH_LIMIT,
        Some(0) => return Err(ApiError::BadRequest(MSG_INVALID_LIMIT.to_string())),
        Some(n) => n,
    };

    info!("Search query: {:?} (limit {})", query, limit);

    backend.search_books(query, limit).await.map_err(|e| {
        error!("Search failed on {} backend: {}", backend.name(), e);
        ApiError::Internal(MSG_SEARCH_FAILED.to_string())
    })
}
