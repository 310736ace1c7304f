// crates/db/src/queries/mod.rs
// Task and status CRUD operations for the task-crm SQLite database.

pub(crate) mod row_types;
mod statuses;
mod tasks;

/// Escape `LIKE` wildcards so `query` matches as a literal substring.
///
/// Pair with `ESCAPE '\'` in the SQL.
pub(crate) fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
