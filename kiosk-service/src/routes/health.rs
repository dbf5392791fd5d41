use crate::models::responses::HealthResponse;
use crate::models::storage::{Backend, CatalogBackend};
use axum::{extract::State, response::Json};

pub async fn health_check(State(backend): State<Backend>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "kiosk-service".to_string(),
        status: "running".to_string(),
        backend: backend.name().to_string(),
    })
}
