// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;

use task_crm_core::{AppConfig, Credentials, SessionTokens};
use task_crm_db::Database;

use crate::session::SessionStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Task and status store.
    pub db: Database,
    /// The configured login pair.
    pub credentials: Credentials,
    /// Issuer/verifier for session tokens.
    pub tokens: SessionTokens,
    /// Server-side sessions keyed by the session cookie.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, config: &AppConfig) -> Arc<Self> {
        Self::with_auth(db, config.credentials(), config.session_tokens())
    }

    pub fn with_auth(db: Database, credentials: Credentials, tokens: SessionTokens) -> Arc<Self> {
        Arc::new(Self {
            db,
            credentials,
            tokens,
            sessions: SessionStore::new(),
        })
    }
}
