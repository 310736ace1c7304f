// crates/server/src/main.rs
//! Task CRM server binary.
//!
//! Reads configuration from the environment, opens the database, then serves
//! the app on localhost. Expired sessions are purged in the background.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use task_crm_core::AppConfig;
use task_crm_db::Database;
use task_crm_server::{create_app, AppState};
use tracing_subscriber::EnvFilter;

/// How often expired sessions are dropped from the store.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,task_crm_server=info,task_crm_db=info".into()),
        )
        .compact()
        .init();

    eprintln!("\ntask-crm v{}\n", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env()?;
    if !config.credentials().is_configured() {
        tracing::warn!("APP_USER or APP_PASSWORD is not set; every login will be rejected");
    }
    if config.signing_secret.is_none() {
        tracing::warn!("SIGNING_SECRET is not set; logins will fail until it is provided");
    }

    let db = Database::new(&config.db_path).await?;
    tracing::info!(path = %config.db_path.display(), "Database ready");

    let state = AppState::new(db, &config);

    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired(Utc::now().timestamp());
            if purged > 0 {
                tracing::debug!(purged, remaining = sessions.len(), "Purged expired sessions");
            }
        }
    });

    let app = create_app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("  Listening on http://{addr}\n");
    tracing::info!(%addr, "Server started");

    axum::serve(listener, app).await?;
    Ok(())
}
