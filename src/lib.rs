mod app_state;
pub mod config;
pub mod database;
pub mod models;
pub mod routes;
pub use app_state::AppState;
pub use config::Config;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over `level`.
pub fn configure_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
