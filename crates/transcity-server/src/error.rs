//! Error types for the HUD server binary.
//!
//! [`StartupError`] wraps every failure that can stop the process before
//! or while serving, so `main` can propagate with `?`.

/// Top-level error for the HUD server binary.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: transcity_core::ConfigError,
    },

    /// The reference catalog could not be loaded.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: transcity_core::CatalogError,
    },

    /// The state store could not be opened.
    #[error("store error: {source}")]
    Store {
        /// The underlying database error.
        #[from]
        source: transcity_db::DbError,
    },

    /// The selected backend is missing a required setting.
    #[error("store misconfigured: {message}")]
    MissingSetting {
        /// What is missing.
        message: String,
    },

    /// The HTTP server failed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: transcity_hud::ServerError,
    },
}
