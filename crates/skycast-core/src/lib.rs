pub mod config;
pub mod error;
pub mod op_state;

pub use config::{Config, LocationConfig, PinnedCoordinates, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, LocationError, WeatherError};
pub use op_state::OpState;

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skycast core initialized");
    Ok(())
}
