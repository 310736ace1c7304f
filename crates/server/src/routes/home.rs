// crates/server/src/routes/home.rs
//! Home view: welcome text plus any one-shot confirmation.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::{self, Notice};

/// GET / - Home view, with any confirmation left by the previous request.
async fn home(State(state): State<Arc<AppState>>, user: CurrentUser) -> Html<String> {
    let notice = state.sessions.take_flash(&user.session_id).map(Notice::success);
    Html(views::home_page(&user.username, notice.as_ref()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}
