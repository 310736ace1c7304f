// crates/core/src/validation.rs
//! Input checks for the add-task, edit-task and add-status forms.

use crate::error::ValidationError;
use crate::types::{NewTask, MAX_HOURS, MIN_HOURS, TASK_STATUS_MAX_LEN, TITLE_MAX_LEN};

/// Clamp an hours value into `MIN_HOURS..=MAX_HOURS`.
pub fn clamp_hours(hours: i64) -> i64 {
    hours.clamp(MIN_HOURS, MAX_HOURS)
}

/// Parse the hours field of a form. A blank field means the minimum.
pub fn parse_hours(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(MIN_HOURS);
    }
    raw.parse::<i64>()
        .map(clamp_hours)
        .map_err(|_| ValidationError::InvalidHours)
}

fn check_len(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Validate the raw fields of a task form.
///
/// Title and status must both be present after trimming. The status is not
/// checked against the `states` table.
pub fn validate_task_form(
    title: &str,
    status: Option<&str>,
    hours: &str,
) -> Result<NewTask, ValidationError> {
    let title = title.trim();
    let status = status.map(str::trim).unwrap_or_default();
    if title.is_empty() || status.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    check_len(title, "Title", TITLE_MAX_LEN)?;
    check_len(status, "Status", TASK_STATUS_MAX_LEN)?;
    let hours_required = parse_hours(hours)?;

    Ok(NewTask {
        title: title.to_string(),
        status: status.to_string(),
        hours_required,
    })
}

/// Validate a new status name, returning it trimmed.
///
/// The limit is the task status width, not the wider `states.name` column, so
/// any status that can be created can also be chosen for a task.
pub fn validate_status_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyStatusName);
    }
    check_len(name, "Status name", TASK_STATUS_MAX_LEN)?;
    Ok(name.to_string())
}
