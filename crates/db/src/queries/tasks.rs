// crates/db/src/queries/tasks.rs
// Task queries: create, list, substring search, update by id.

use super::escape_like;
use super::row_types::TaskRow;
use crate::{Database, DbResult};
use task_crm_core::{NewTask, Task};

const TASK_COLUMNS: &str = "id, title, status, hours_required";

impl Database {
    /// Insert a task and return the stored row.
    pub async fn create_task(&self, task: &NewTask) -> DbResult<Task> {
        let result =
            sqlx::query("INSERT INTO tasks (title, status, hours_required) VALUES (?1, ?2, ?3)")
                .bind(&task.title)
                .bind(&task.status)
                .bind(task.hours_required)
                .execute(self.pool())
                .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            title: task.title.clone(),
            status: task.status.clone(),
            hours_required: task.hours_required,
        })
    }

    /// All tasks in insertion order.
    pub async fn list_tasks(&self) -> DbResult<Vec<Task>> {
        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    /// Tasks whose title contains `query`.
    ///
    /// Matching follows SQLite's `LIKE` (case-insensitive for ASCII). An empty
    /// query matches every task.
    pub async fn search_tasks(&self, query: &str) -> DbResult<Vec<Task>> {
        let pattern = format!("%{}%", escape_like(query));
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE title LIKE ?1 ESCAPE '\\' ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    pub async fn get_task(&self, id: i64) -> DbResult<Option<Task>> {
        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))
                .bind(id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.map(TaskRow::into_task))
    }

    /// Overwrite title, status and hours of one task.
    ///
    /// Returns `false` when no task has that id. Last writer wins.
    pub async fn update_task(&self, id: i64, task: &NewTask) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?1, status = ?2, hours_required = ?3 WHERE id = ?4",
        )
        .bind(&task.title)
        .bind(&task.status)
        .bind(task.hours_required)
        .bind(id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use task_crm_core::NewTask;

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            status: "pendiente".to_string(),
            hours_required: 3,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let db = Database::new_in_memory().await.unwrap();
        let a = db.create_task(&new_task("a")).await.unwrap();
        let b = db.create_task(&new_task("b")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_get_missing_task() {
        let db = Database::new_in_memory().await.unwrap();
        assert!(db.get_task(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_task_returns_false() {
        let db = Database::new_in_memory().await.unwrap();
        assert!(!db.update_task(42, &new_task("ghost")).await.unwrap());
        assert!(db.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let db = Database::new_in_memory().await.unwrap();
        db.create_task(&new_task("done 100%")).await.unwrap();
        db.create_task(&new_task("done 1000")).await.unwrap();

        let found = db.search_tasks("100%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "done 100%");

        assert!(db.search_tasks("_").await.unwrap().is_empty());
    }
}
