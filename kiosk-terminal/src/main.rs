use tracing::info;
use tracing_subscriber::EnvFilter;

mod client;
mod kiosk;
mod terminal;

use client::KioskClient;

const DEFAULT_SERVICE_URL: &str = "http://0.0.0.0:7003";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kiosk_terminal=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Get command line arguments
    let args: Vec<String> = std::env::args().collect();
    let service_url = match args.get(1) {
        Some(url) => url.clone(),
        None => std::env::var("KIOSK_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string()),
    };

    let client = KioskClient::new(&service_url);
    client.wait_for_service().await;

    info!("Starting kiosk against {}", service_url);
    terminal::run(&client).await?;

    Ok(())
}
