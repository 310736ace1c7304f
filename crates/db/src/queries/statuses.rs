// crates/db/src/queries/statuses.rs
// Status queries: create, list, existence check by exact name.

use super::row_types::StatusRow;
use crate::{Database, DbResult};
use task_crm_core::Status;

impl Database {
    /// Insert a status name.
    ///
    /// Uniqueness is not enforced here; callers check [`Database::status_exists`]
    /// first. The check and the insert are not atomic.
    pub async fn create_status(&self, name: &str) -> DbResult<Status> {
        let result = sqlx::query("INSERT INTO states (name) VALUES (?1)")
            .bind(name)
            .execute(self.pool())
            .await?;
        Ok(Status {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// All statuses in insertion order.
    pub async fn list_statuses(&self) -> DbResult<Vec<Status>> {
        let rows: Vec<StatusRow> = sqlx::query_as("SELECT id, name FROM states ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(StatusRow::into_status).collect())
    }

    /// Whether a status with exactly this name exists (case-sensitive).
    pub async fn status_exists(&self, name: &str) -> DbResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM states WHERE name = ?1)")
                .bind(name)
                .fetch_one(self.pool())
                .await?;
        Ok(exists)
    }
}
