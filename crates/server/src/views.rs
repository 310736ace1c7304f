// crates/server/src/views.rs
//! Server-rendered HTML for the login form and the four views.
//!
//! Every user-supplied string goes through [`escape`] before it is written
//! into markup.

use std::fmt::Write;

use task_crm_core::types::{MAX_HOURS, MIN_HOURS, TASK_STATUS_MAX_LEN, TITLE_MAX_LEN};
use task_crm_core::{Status, Task};

/// The four sidebar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    AddTask,
    Tasks,
    AddStatus,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::AddTask, View::Tasks, View::AddStatus];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::AddTask => "Add Task",
            View::Tasks => "View Tasks",
            View::AddStatus => "Add Status",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::AddTask => "/tasks/new",
            View::Tasks => "/tasks",
            View::AddStatus => "/statuses/new",
        }
    }
}

/// An inline confirmation or error shown at the top of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Notice::Success(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Notice::Error(msg.into())
    }
}

/// Field values to pre-fill the add-task form with after a rejected submit.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub status: Option<String>,
    pub hours_required: String,
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex;min-height:100vh}\
nav{width:14rem;background:#f0f2f6;padding:1rem}\
nav a{display:block;padding:.4rem 0}nav a.active{font-weight:bold}\
main{flex:1;padding:1.5rem 2rem}\
.notice{padding:.6rem 1rem;border-radius:.3rem;margin-bottom:1rem}\
.success{background:#e3f6e8}.error{background:#fde8e8}\
label{display:block;margin-top:.6rem}details{margin:.6rem 0}";

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{title}</title><style>{STYLE}</style></head><body>{body}</body></html>\n",
        title = escape(title),
    )
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice::Success(msg)) => {
            format!("<div class=\"notice success\">{}</div>", escape(msg))
        }
        Some(Notice::Error(msg)) => {
            format!("<div class=\"notice error\" role=\"alert\">{}</div>", escape(msg))
        }
        None => String::new(),
    }
}

/// Wrap a view body with the greeting, sidebar and logout control.
fn layout(username: &str, active: View, notice: Option<&Notice>, content: &str) -> String {
    let mut nav = String::from("<nav><h2>Navigation</h2>");
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(
            nav,
            "<a href=\"{}\"{}>{}</a>",
            view.path(),
            class,
            view.label()
        );
    }
    nav.push_str(
        "<form method=\"post\" action=\"/logout\"><button type=\"submit\">Log out</button></form></nav>",
    );

    let body = format!(
        "{nav}<main><p class=\"greeting\">Welcome, {user}!</p>{notice}{content}</main>",
        user = escape(username),
        notice = notice_html(notice),
    );
    document(active.label(), &body)
}

pub fn login_page(notice: Option<&Notice>) -> String {
    let body = format!(
        "<main><h1>Log in</h1>{notice}\
<form method=\"post\" action=\"/login\">\
<label>Username <input type=\"text\" name=\"username\" autocomplete=\"username\"></label>\
<label>Password <input type=\"password\" name=\"password\" autocomplete=\"current-password\"></label>\
<button type=\"submit\">Log in</button></form></main>",
        notice = notice_html(notice),
    );
    document("Log in", &body)
}

pub fn home_page(username: &str, notice: Option<&Notice>) -> String {
    layout(
        username,
        View::Home,
        notice,
        "<h1>Welcome to the Task CRM</h1><p>Use the sidebar to add or view tasks.</p>",
    )
}

/// `<option>` list for a status select. `selected` is marked if present.
fn status_options(names: &[&str], selected: Option<&str>) -> String {
    let mut out = String::new();
    for name in names {
        let sel = if Some(*name) == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{v}\"{sel}>{v}</option>",
            v = escape(name)
        );
    }
    out
}

pub fn add_task_page(
    username: &str,
    statuses: &[Status],
    draft: Option<&TaskDraft>,
    notice: Option<&Notice>,
) -> String {
    let draft = draft.cloned().unwrap_or_default();
    let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();
    let hours = if draft.hours_required.is_empty() {
        MIN_HOURS.to_string()
    } else {
        draft.hours_required.clone()
    };
    let hint = if names.is_empty() {
        "<p class=\"hint\">No statuses yet. Add one from the Add Status page.</p>"
    } else {
        ""
    };

    let content = format!(
        "<h1>Add New Task</h1>{hint}\
<form method=\"post\" action=\"/tasks\">\
<label>Title <input type=\"text\" name=\"title\" maxlength=\"{TITLE_MAX_LEN}\" value=\"{title}\"></label>\
<label>Status <select name=\"status\">{options}</select></label>\
<label>Hours required <input type=\"number\" name=\"hours_required\" min=\"{MIN_HOURS}\" max=\"{MAX_HOURS}\" step=\"1\" value=\"{hours}\"></label>\
<button type=\"submit\">Add Task</button></form>",
        title = escape(&draft.title),
        options = status_options(&names, draft.status.as_deref()),
        hours = escape(&hours),
    );
    layout(username, View::AddTask, notice, &content)
}

/// One task's summary and its edit form. The form posts to the task's own
/// URL so several open forms never interfere.
fn task_entry(task: &Task, statuses: &[Status], query: &str) -> String {
    let mut names: Vec<&str> = vec![task.status.as_str()];
    for status in statuses {
        if status.name != task.status {
            names.push(status.name.as_str());
        }
    }
    let title = escape(&task.title);

    format!(
        "<details id=\"task-{id}\"><summary>{title}</summary>\
<p><strong>Status</strong>: {status}</p>\
<p><strong>Hours required</strong>: {hours}</p>\
<form method=\"post\" action=\"/tasks/{id}\" id=\"modify_form_{id}\">\
<input type=\"hidden\" name=\"q\" value=\"{q}\">\
<label>New title <input type=\"text\" name=\"title\" maxlength=\"{TITLE_MAX_LEN}\" value=\"{title}\"></label>\
<label>New status <select name=\"status\">{options}</select></label>\
<label>New hours <input type=\"number\" name=\"hours_required\" min=\"{MIN_HOURS}\" max=\"{MAX_HOURS}\" step=\"1\" value=\"{hours}\"></label>\
<button type=\"submit\">Save changes for {title}</button></form></details>",
        id = task.id,
        status = escape(&task.status),
        hours = task.hours_required,
        q = escape(query),
        options = status_options(&names, Some(task.status.as_str())),
    )
}

pub fn task_list_page(
    username: &str,
    query: &str,
    tasks: &[Task],
    statuses: &[Status],
    notice: Option<&Notice>,
) -> String {
    let mut content = format!(
        "<h1>Task List</h1>\
<form method=\"get\" action=\"/tasks\">\
<label>Search tasks by name <input type=\"search\" name=\"q\" value=\"{}\"></label>\
<button type=\"submit\">Search</button></form>",
        escape(query)
    );

    if tasks.is_empty() {
        content.push_str("<p class=\"empty\">No tasks found.</p>");
    } else {
        for task in tasks {
            content.push_str(&task_entry(task, statuses, query));
        }
    }
    layout(username, View::Tasks, notice, &content)
}

pub fn add_status_page(username: &str, statuses: &[Status], notice: Option<&Notice>) -> String {
    let mut content = format!(
        "<h1>Add New Status</h1>\
<form method=\"post\" action=\"/statuses\">\
<label>New status name <input type=\"text\" name=\"name\" maxlength=\"{TASK_STATUS_MAX_LEN}\"></label>\
<button type=\"submit\">Add Status</button></form>",
    );

    if !statuses.is_empty() {
        content.push_str("<h2>Existing statuses</h2><ul class=\"statuses\">");
        for status in statuses {
            let _ = write!(content, "<li>{}</li>", escape(&status.name));
        }
        content.push_str("</ul>");
    }
    layout(username, View::AddStatus, notice, &content)
}

/// Stand-alone page for errors that abort a request.
pub fn error_page(heading: &str, detail: &str) -> String {
    let body = format!(
        "<main><h1>{}</h1><p>{}</p><p><a href=\"/\">Back to home</a></p></main>",
        escape(heading),
        escape(detail)
    );
    document(heading, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, status: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            status: status.to_string(),
            hours_required: 5,
        }
    }

    fn status(id: i64, name: &str) -> Status {
        Status {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b onclick="x">&'"#),
            "&lt;b onclick=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_layout_has_sidebar_and_logout() {
        let html = home_page("admin", None);
        assert!(html.contains("Welcome, admin!"));
        for view in View::ALL {
            assert!(html.contains(&format!("href=\"{}\"", view.path())));
            assert!(html.contains(view.label()));
        }
        assert!(html.contains("action=\"/logout\""));
        assert!(html.contains("class=\"active\">Home"));
    }

    #[test]
    fn test_login_page_has_no_sidebar() {
        let html = login_page(Some(&Notice::error("Invalid username or password.")));
        assert!(html.contains("name=\"password\""));
        assert!(html.contains("Invalid username or password."));
        assert!(!html.contains("/logout"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = task_list_page(
            "<admin>",
            "",
            &[task(1, "<script>alert(1)</script>", "done")],
            &[],
            None,
        );
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Welcome, &lt;admin&gt;!"));
    }

    #[test]
    fn test_edit_forms_keyed_by_id() {
        let html = task_list_page(
            "admin",
            "rep",
            &[task(3, "Write report", "en proceso"), task(9, "Review report", "pendiente")],
            &[status(1, "pendiente"), status(2, "en proceso")],
            None,
        );
        assert!(html.contains("action=\"/tasks/3\" id=\"modify_form_3\""));
        assert!(html.contains("action=\"/tasks/9\" id=\"modify_form_9\""));
        assert!(html.contains("name=\"q\" value=\"rep\""));
    }

    #[test]
    fn test_edit_form_lists_current_status_first_without_duplicates() {
        let entry = task_entry(
            &task(1, "t", "en proceso"),
            &[status(1, "pendiente"), status(2, "en proceso")],
            "",
        );
        let first = entry.find("<option value=\"en proceso\" selected>").unwrap();
        let second = entry.find("<option value=\"pendiente\">").unwrap();
        assert!(first < second);
        assert_eq!(entry.matches("value=\"en proceso\"").count(), 1);
    }

    #[test]
    fn test_empty_task_list() {
        let html = task_list_page("admin", "xyz", &[], &[], None);
        assert!(html.contains("No tasks found."));
    }

    #[test]
    fn test_add_task_page_prefills_draft() {
        let draft = TaskDraft {
            title: "".to_string(),
            status: Some("b".to_string()),
            hours_required: "7".to_string(),
        };
        let html = add_task_page(
            "admin",
            &[status(1, "a"), status(2, "b")],
            Some(&draft),
            Some(&Notice::error("Please fill in all fields.")),
        );
        assert!(html.contains("<option value=\"b\" selected>"));
        assert!(html.contains("value=\"7\""));
        assert!(html.contains("role=\"alert\">Please fill in all fields."));
    }

    #[test]
    fn test_add_task_page_without_statuses_shows_hint() {
        let html = add_task_page("admin", &[], None, None);
        assert!(html.contains("No statuses yet."));
        assert!(html.contains("value=\"1\""));
    }

    #[test]
    fn test_add_status_page_lists_existing() {
        let html = add_status_page("admin", &[status(1, "bloqueado")], None);
        assert!(html.contains("<li>bloqueado</li>"));
    }
}
