// crates/server/src/session.rs
//! Server-side session store and the `CurrentUser` gate.
//!
//! The browser only holds an opaque session id in a cookie. The signed access
//! token lives in the store and is re-verified on every request, so an expired
//! token behaves exactly like a missing session.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "task_crm_session";

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// One browser's authenticated context.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub username: String,
    pub authenticated: bool,
    /// Unix seconds, copied from the token's `exp` claim.
    pub expires_at: i64,
    /// One-shot confirmation for the next rendered view.
    pub flash: Option<String>,
}

/// Sessions keyed by session id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under a fresh random id and return the id.
    pub fn create(&self, session: Session) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), session);
        id
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.get(id).map(|s| s.value().clone())
    }

    /// Take the pending confirmation, leaving none behind.
    pub fn take_flash(&self, id: &str) -> Option<String> {
        self.sessions.get_mut(id)?.flash.take()
    }

    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions.remove(id).map(|(_, s)| s)
    }

    /// Drop every session whose token expired at or before `now`.
    /// Returns how many were removed.
    pub fn purge_expired(&self, now: i64) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.expires_at > now);
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Build the session cookie for `session_id`.
pub fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie value that clears the session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// The verified user behind a request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: String,
    pub username: String,
}

/// Resolve the session cookie to a verified user.
///
/// Unknown ids, unauthenticated sessions and tokens that fail verification
/// all yield `None`. A session whose token no longer verifies is dropped.
pub fn current_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let session_id = jar.get(SESSION_COOKIE)?.value().to_string();
    let session = state.sessions.get(&session_id)?;
    if !session.authenticated {
        return None;
    }

    match state.tokens.verify(&session.access_token) {
        Ok(username) => Some(CurrentUser {
            session_id,
            username,
        }),
        Err(e) => {
            debug!(error = %e, "session token rejected, treating as logged out");
            state.sessions.remove(&session_id);
            None
        }
    }
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        current_user(state, &jar).ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}
