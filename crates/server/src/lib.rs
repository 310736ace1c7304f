// crates/server/src/lib.rs
//! Task CRM server library.
//!
//! Axum-based HTTP server with a login gate in front of four views:
//! home, add task, task list (search and edit) and add status.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::*;
pub use routes::app_routes;
pub use session::{CurrentUser, Session, SessionStore, SESSION_COOKIE};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and request tracing.
pub fn create_app(state: Arc<AppState>) -> Router {
    app_routes(state).layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{login, send, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_endpoint_response_structure() {
        let app = create_app(test_state().await);
        let resp = send(app, "GET", "/api/health", None, None).await;

        assert_eq!(resp.status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert!(json.get("status").is_some());
        assert!(json.get("version").is_some());
        assert_eq!(json["database"], serde_json::Value::Bool(true));
    }

    #[tokio::test]
    async fn test_root_redirects_to_login() {
        let app = create_app(test_state().await);
        let resp = send(app, "GET", "/", None, None).await;
        assert_eq!(resp.status, StatusCode::SEE_OTHER);
        assert_eq!(resp.location(), Some("/login"));
    }

    #[tokio::test]
    async fn test_404_for_unknown_path() {
        let app = create_app(test_state().await);
        let resp = send(app, "GET", "/nonexistent", None, None).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_every_view_reachable_after_login() {
        let app = create_app(test_state().await);
        let session = login(app.clone()).await;

        for uri in ["/", "/tasks/new", "/tasks", "/statuses/new"] {
            let resp = send(app.clone(), "GET", uri, None, Some(&session)).await;
            assert_eq!(resp.status, StatusCode::OK, "GET {uri}");
            assert!(resp.body.contains("Welcome, admin!"), "GET {uri}");
            assert!(resp.body.contains("action=\"/logout\""), "GET {uri}");
        }
    }

    #[tokio::test]
    async fn test_multiple_requests() {
        let app = create_app(test_state().await);

        for _ in 0..3 {
            let resp = send(app.clone(), "GET", "/api/health", None, None).await;
            assert_eq!(resp.status, StatusCode::OK);
        }
    }
}
