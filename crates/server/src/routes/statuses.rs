// crates/server/src/routes/statuses.rs
//! Add-status view.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use task_crm_core::validate_status_name;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::{self, Notice};

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    name: String,
}

/// GET /statuses/new - Add-status form with the existing statuses.
async fn new_status_form(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Html<String>> {
    let statuses = state.db.list_statuses().await?;
    Ok(Html(views::add_status_page(&user.username, &statuses, None)))
}

/// POST /statuses - Add a status unless one with the same name exists.
///
/// The existence check and the insert are separate statements, so two
/// concurrent submissions of the same name can both succeed.
async fn create_status(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Form(form): Form<StatusForm>,
) -> ApiResult<(StatusCode, Html<String>)> {
    let (code, notice) = match validate_status_name(&form.name) {
        Err(e) => {
            warn!(error = %e, "Rejected new status");
            (StatusCode::UNPROCESSABLE_ENTITY, Notice::error(e.to_string()))
        }
        Ok(name) => {
            if state.db.status_exists(&name).await? {
                warn!(status = %name, "Duplicate status");
                (
                    StatusCode::CONFLICT,
                    Notice::error(format!("The status '{name}' already exists.")),
                )
            } else {
                let status = state.db.create_status(&name).await?;
                info!(status_id = status.id, status = %status.name, "Status created");
                (
                    StatusCode::OK,
                    Notice::success(format!("New status '{}' added successfully.", status.name)),
                )
            }
        }
    };

    let statuses = state.db.list_statuses().await?;
    let page = views::add_status_page(&user.username, &statuses, Some(&notice));
    Ok((code, Html(page)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statuses", post(create_status))
        .route("/statuses/new", get(new_status_form))
}
