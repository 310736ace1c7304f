/// Inline schema for the task-crm database.
///
/// Column lengths are documentation only; SQLite does not enforce
/// `VARCHAR(n)`, so limits are checked in `task_crm_core::validation`.
/// `tasks.status` is plain text with no foreign key to `states`.

pub const STATEMENTS: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS tasks (
    id             INTEGER PRIMARY KEY,
    title          VARCHAR(100) NOT NULL,
    status         VARCHAR(20) NOT NULL,
    hours_required INTEGER NOT NULL
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS states (
    id   INTEGER PRIMARY KEY,
    name VARCHAR(50) NOT NULL
);
"#,
];
