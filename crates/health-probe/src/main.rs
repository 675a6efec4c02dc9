//! health-probe: manual smoke check against the health-measurement API.
//!
//! Posts a fixed sample measurement, then fetches it back by session id.
//!
//! Usage:
//!   cargo run -p health-probe
//!   HEALTH_API_URL=http://host:5000/api/health_measurements cargo run -p health-probe

use health_api_client::{ApiConfig, HealthApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_probe=info,health_api_client=info".into()),
        )
        .init();

    let config = ApiConfig::default();
    tracing::info!(base_url = %config.base_url, "probing health-measurement API");

    let client = HealthApiClient::from_config(&config)?;
    health_probe::run(&client).await
}
