// crates/core/src/types.rs
//! Row types for the two persisted tables.

use serde::{Deserialize, Serialize};

/// Maximum length of a task title.
pub const TITLE_MAX_LEN: usize = 100;
/// Maximum length of the status text stored on a task. New status names are
/// held to the same limit so every listed status can be assigned to a task.
pub const TASK_STATUS_MAX_LEN: usize = 20;
/// Inclusive bounds for `hours_required`.
pub const MIN_HOURS: i64 = 1;
pub const MAX_HOURS: i64 = 100;

/// A task row from the `tasks` table.
///
/// `status` is expected to match some [`Status::name`] but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub hours_required: i64,
}

/// A status row from the `states` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
}

/// Validated field values for inserting or overwriting a task.
///
/// Built by [`crate::validate_task_form`]; the store trusts these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub status: String,
    pub hours_required: i64,
}
