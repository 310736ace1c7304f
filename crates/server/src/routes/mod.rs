//! Route handlers for the task-crm server.

pub mod auth;
pub mod health;
pub mod home;
pub mod statuses;
pub mod tasks;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET  /api/health - Health check (no login required)
/// - GET  /login - Login form
/// - POST /login - Check credentials and start a session
/// - POST /logout - End the session
/// - GET  / - Home view
/// - GET  /tasks/new - Add-task form
/// - POST /tasks - Create a task
/// - GET  /tasks?q= - List or search tasks, each with an edit form
/// - POST /tasks/{id} - Overwrite one task
/// - GET  /statuses/new - Add-status form
/// - POST /statuses - Create a status
pub fn app_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .merge(auth::router())
        .merge(home::router())
        .merge(tasks::router())
        .merge(statuses::router())
        .with_state(state)
}
