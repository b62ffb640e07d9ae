use std::sync::Arc;

use account_service::{
    configure_logger,
    database::{self, AccountRepository, InMemoryDatabase, PostgreDatabase},
    routes::make_app,
    AppState, Config,
};
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    configure_logger(&config.log_level);

    let db: Arc<dyn AccountRepository> = match config.db_url.as_deref() {
        Some(db_url) => {
            info!("Connecting to PostgreSQL...");
            let pool = database::connect_sqlx(db_url, config.db_max_connections)
                .await
                .context("Could not connect to the database")?;
            let db = PostgreDatabase::new(pool);
            db.init_schema().await.context("Could not create the account table")?;
            info!("Connected to PostgreSQL!");
            Arc::new(db)
        }
        None => {
            warn!("DATABASE_URI is not set; accounts are kept in memory only");
            Arc::new(InMemoryDatabase::new())
        }
    };

    let addr = config.bind_address()?;
    let state = Arc::new(AppState::new(db, config));
    let app = make_app(state)?;

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Server started successfully on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
