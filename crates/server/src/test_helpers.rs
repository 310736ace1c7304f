// crates/server/src/test_helpers.rs
//! Shared fixtures for route tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use task_crm_core::{Credentials, SessionTokens};
use task_crm_db::Database;
use tower::ServiceExt;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// State with an in-memory DB, `admin`/`secret` credentials and a signing key.
pub async fn test_state() -> Arc<AppState> {
    let db = Database::new_in_memory().await.expect("in-memory DB");
    AppState::with_auth(
        db,
        Credentials::new(Some(TEST_USER.into()), Some(TEST_PASSWORD.into())),
        SessionTokens::new(Some("route-test-secret")),
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Value of the session cookie set by this response, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| {
                let pair = v.split(';').next()?;
                let (name, value) = pair.split_once('=')?;
                (name == SESSION_COOKIE).then(|| value.to_string())
            })
    }
}

/// Send one request through the app.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    form: Option<&str>,
    session: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = session {
        builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={id}"));
    }
    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Log in with the test credentials and return the session id.
pub async fn login(app: Router) -> String {
    let form = format!("username={TEST_USER}&password={TEST_PASSWORD}");
    let resp = send(app, "POST", "/login", Some(&form), None).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER, "login should succeed");
    resp.session_cookie().expect("login should set a session cookie")
}
