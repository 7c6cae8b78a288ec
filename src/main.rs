//! # Queue Advisor
//!
//! HTTP service that recommends Amazon SQS or Apache Kafka (MSK) for a
//! messaging workload and prices both in a chosen AWS region.
//!
//! ## Endpoints
//!
//! - `POST /compare` - recommendation, explanation, radar scores, pricing
//! - `GET /regions` - supported AWS regions
//! - `GET /pricing?region=<code>` - price table for one region
//! - `GET /presets` - example workloads
//! - `GET /health` - liveness

use queue_advisor::config::{AppConfig, DEFAULT_LOG_FILTER};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    info!("Starting queue advisor");

    let app = queue_advisor::create_app();

    // Bind and serve
    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
