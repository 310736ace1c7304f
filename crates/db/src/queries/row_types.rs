// crates/db/src/queries/row_types.rs
// Internal row types mapping SQLite rows onto the core domain types.

use sqlx::Row;
use task_crm_core::{Status, Task};

#[derive(Debug)]
pub(crate) struct TaskRow {
    id: i64,
    title: String,
    status: String,
    hours_required: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for TaskRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            status: row.try_get("status")?,
            hours_required: row.try_get("hours_required")?,
        })
    }
}

impl TaskRow {
    pub(crate) fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            status: self.status,
            hours_required: self.hours_required,
        }
    }
}

#[derive(Debug)]
pub(crate) struct StatusRow {
    id: i64,
    name: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for StatusRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

impl StatusRow {
    pub(crate) fn into_status(self) -> Status {
        Status {
            id: self.id,
            name: self.name,
        }
    }
}
