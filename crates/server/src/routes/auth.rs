// crates/server/src/routes/auth.rs
//! Login and logout.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use task_crm_core::ACCESS_TOKEN_TTL_SECS;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::session::{
    current_user, removal_cookie, session_cookie, Session, LOGIN_PATH, SESSION_COOKIE,
};
use crate::state::AppState;
use crate::views::{self, Notice};

/// The only message shown for a rejected login, whichever field was wrong.
pub const LOGIN_FAILED: &str = "Invalid username or password.";

/// Shown once on the first view after a successful login.
pub const LOGGED_IN: &str = "Logged in successfully!";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// GET /login - Login form, or straight to home when already logged in.
async fn login_form(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if current_user(&state, &jar).is_some() {
        return Redirect::to("/").into_response();
    }
    Html(views::login_page(None)).into_response()
}

/// POST /login - Check credentials, issue a token, start a session and
/// redirect home so a refresh does not resubmit the form.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    if !state.credentials.check(&form.username, &form.password) {
        warn!("Rejected login attempt");
        let page = views::login_page(Some(&Notice::error(LOGIN_FAILED)));
        return Ok((StatusCode::UNAUTHORIZED, Html(page)).into_response());
    }

    let now = Utc::now().timestamp();
    let access_token = state.tokens.issue_at(&form.username, now)?;

    // A browser logging in again replaces its previous session.
    if let Some(previous) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(previous.value());
    }
    let session_id = state.sessions.create(Session {
        access_token,
        username: form.username.clone(),
        authenticated: true,
        expires_at: now + ACCESS_TOKEN_TTL_SECS,
        flash: Some(LOGGED_IN.to_string()),
    });
    info!(username = %form.username, "User logged in");

    Ok((jar.add(session_cookie(session_id)), Redirect::to("/")).into_response())
}

/// POST /logout - Discard the session and clear the cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Some(session) = state.sessions.remove(cookie.value()) {
            info!(username = %session.username, "User logged out");
        }
    }
    (jar.remove(removal_cookie()), Redirect::to(LOGIN_PATH))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", post(logout))
}
