//! HUD server binary for TransCity.
//!
//! Wires configuration, the reference catalog and the state store into
//! the Axum HUD API and serves it until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `transcity-config.yaml` (or `TRANSCITY_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Load the reference catalog
//! 4. Open the state store (`PostgreSQL` or in-memory seed)
//! 5. Serve the HUD API

mod error;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use transcity_core::config::{LogFormat, LoggingConfig, StoreBackend, StoreConfig};
use transcity_core::{Catalog, HudConfig};
use transcity_db::{MemoryStore, PostgresConfig, PostgresPool, StateStore};
use transcity_hud::{AppState, ServerConfig};

use crate::error::StartupError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "transcity-config.yaml";

/// Application entry point for the HUD server.
///
/// # Errors
///
/// Returns an error if any startup step fails or the server stops
/// with a fatal error.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config_path = std::env::var("TRANSCITY_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = HudConfig::load_or_default(&config_path)?;

    init_tracing(&config.logging);
    info!(config = %config_path.display(), "transcity-hud starting");

    let catalog = Catalog::from_file(&config.catalog.path)?;
    info!(
        path = %config.catalog.path.display(),
        businesses = catalog.businesses.len(),
        estates = catalog.estates.len(),
        events = catalog.events.len(),
        "Catalog loaded"
    );

    let store = open_store(&config.store).await?;
    info!(backend = store.name(), "State store ready");

    let state = Arc::new(AppState::new(store.clone(), Arc::new(catalog)));
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    transcity_hud::start_server(&server_config, state).await?;

    if let StateStore::Postgres(pool) = store {
        pool.close().await;
    }
    info!("transcity-hud stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn open_store(config: &StoreConfig) -> Result<StateStore, StartupError> {
    match config.backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| StartupError::MissingSetting {
                    message: String::from(
                        "postgres backend needs store.database_url or DATABASE_URL",
                    ),
                })?;
            let pg_config = PostgresConfig::new(url)
                .with_max_connections(config.max_connections)
                .with_connect_timeout(Duration::from_secs(config.connect_timeout_secs))
                .with_read_only(!config.run_migrations);
            let pool = PostgresPool::connect(&pg_config).await?;
            if config.run_migrations {
                pool.run_migrations().await?;
                info!("Database migrations applied");
            }
            Ok(StateStore::from(pool))
        }
        StoreBackend::Memory => {
            let store = match &config.seed_path {
                Some(path) => MemoryStore::from_seed_file(path)?,
                None => MemoryStore::new(),
            };
            let players = store.player_count().await;
            if players == 0 {
                tracing::warn!("In-memory store has no players, every lookup will 404");
            }
            info!(players, "In-memory store ready");
            Ok(StateStore::from(store))
        }
    }
}
