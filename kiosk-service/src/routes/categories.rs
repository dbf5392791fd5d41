use crate::models::catalog::mock_categories;
use crate::models::responses::CategoriesResponse;
use crate::models::storage::{Backend, CatalogBackend};
use axum::{extract::State, response::Json};
use tracing::warn;

pub async fn list_categories(State(backend): State<Backend>) -> Json<CategoriesResponse> {
    let categories = match backend.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            warn!(
                "Failed to load categories from {} backend, serving built-in list: {}",
                backend.name(),
                e
            );
            mock_categories()
        }
    };

    Json(CategoriesResponse { categories })
}
