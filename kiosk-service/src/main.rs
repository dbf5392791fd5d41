use kiosk_service::app;
use kiosk_service::config::{BackendType, Config};
use kiosk_service::models::storage::{Backend, CatalogBackend, MockBackend, PostgresBackend};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn connect_backend(config: &Config) -> Backend {
    match config.backend_type {
        BackendType::Postgres => {
            info!("Using PostgreSQL backend");
            match PostgresBackend::new(&config.database_url).await {
                Ok(backend) => Arc::new(backend),
                Err(e) => {
                    error!("Failed to connect to PostgreSQL, falling back to mock catalog: {}", e);
                    Arc::new(MockBackend::new())
                }
            }
        }
        BackendType::Mock => {
            info!("Using mock catalog backend");
            Arc::new(MockBackend::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kiosk_service=info,tower_http=info")),
        )
        .init();

    let config = Config::load();
    let backend = connect_backend(&config).await;

    if let Err(e) = backend.test_connection().await {
        error!("Storage backend connection check failed: {}", e);
    } else {
        info!("Storage backend connection successful");
    }

    let app = app(backend);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Kiosk service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
