// crates/server/src/routes/tasks.rs
//! Add-task, list/search and edit-task views.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use task_crm_core::{validate_task_form, Task};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::{self, Notice, TaskDraft};

/// Fields posted by both the add-task and edit-task forms.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    hours_required: String,
    /// Search query to keep after an edit.
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

type Page = (StatusCode, Html<String>);

/// All tasks, or those whose title contains `query` when it is non-empty.
async fn load_tasks(state: &AppState, query: &str) -> ApiResult<Vec<Task>> {
    let tasks = if query.is_empty() {
        state.db.list_tasks().await?
    } else {
        state.db.search_tasks(query).await?
    };
    Ok(tasks)
}

/// GET /tasks/new - Add-task form.
async fn new_task_form(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Html<String>> {
    let statuses = state.db.list_statuses().await?;
    Ok(Html(views::add_task_page(&user.username, &statuses, None, None)))
}

/// POST /tasks - Create a task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Form(form): Form<TaskForm>,
) -> ApiResult<Page> {
    let statuses = state.db.list_statuses().await?;

    let fields = match validate_task_form(&form.title, form.status.as_deref(), &form.hours_required)
    {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "Rejected new task");
            let draft = TaskDraft {
                title: form.title,
                status: form.status,
                hours_required: form.hours_required,
            };
            let page = views::add_task_page(
                &user.username,
                &statuses,
                Some(&draft),
                Some(&Notice::error(e.to_string())),
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)));
        }
    };

    let task = state.db.create_task(&fields).await?;
    info!(task_id = task.id, status = %task.status, "Task created");

    let page = views::add_task_page(
        &user.username,
        &statuses,
        None,
        Some(&Notice::success("Task added successfully!")),
    );
    Ok((StatusCode::OK, Html(page)))
}

/// GET /tasks?q= - List or search tasks.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Html<String>> {
    let tasks = load_tasks(&state, &params.q).await?;
    let statuses = state.db.list_statuses().await?;
    Ok(Html(views::task_list_page(
        &user.username,
        &params.q,
        &tasks,
        &statuses,
        None,
    )))
}

/// POST /tasks/{id} - Overwrite title, status and hours of one task.
async fn update_task(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<TaskForm>,
) -> ApiResult<Page> {
    let (status, notice) =
        match validate_task_form(&form.title, form.status.as_deref(), &form.hours_required) {
            Ok(fields) => {
                if !state.db.update_task(id, &fields).await? {
                    return Err(ApiError::TaskNotFound(id));
                }
                info!(task_id = id, status = %fields.status, "Task updated");
                (
                    StatusCode::OK,
                    Notice::success(format!("Task '{}' updated successfully!", fields.title)),
                )
            }
            Err(e) => {
                warn!(task_id = id, error = %e, "Rejected task update");
                (StatusCode::UNPROCESSABLE_ENTITY, Notice::error(e.to_string()))
            }
        };

    let tasks = load_tasks(&state, &form.q).await?;
    let statuses = state.db.list_statuses().await?;
    let page = views::task_list_page(&user.username, &form.q, &tasks, &statuses, Some(&notice));
    Ok((status, Html(page)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/new", get(new_task_form))
        .route("/tasks/{id}", post(update_task))
}
