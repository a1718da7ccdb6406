//! Main entry point for the Marquee server.
//!
//! Resolves configuration from the environment (dotenv-aware), initialises
//! tracing, and serves the REST API. Configuration is read once here and
//! passed into services; request handlers never touch the environment.

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_api_rest::AppState;
use marquee_core::{CoreConfig, MovieService, DEFAULT_DATA_DIR};

/// # Environment Variables
/// - `MARQUEE_ADDR`: server address (default: "0.0.0.0:5000")
/// - `MARQUEE_DATA_DIR`: root of the movie document store (default:
///   "movie_data", created when absent)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory cannot be created,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marquee=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MARQUEE_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());
    let data_dir = PathBuf::from(
        std::env::var("MARQUEE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into()),
    );
    std::fs::create_dir_all(&data_dir)?;

    tracing::info!("-- Starting Marquee REST API on {}", addr);
    tracing::info!("-- Movie data directory: {}", data_dir.display());

    let cfg = Arc::new(CoreConfig::new(data_dir));
    let state = AppState {
        movie_service: MovieService::new(cfg),
    };

    marquee_api_rest::serve(&addr, state).await
}
