// crates/core/src/error.rs
use thiserror::Error;

/// Errors raised when user input for a task or status is rejected.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a status name.")]
    EmptyStatusName,

    #[error("{field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("Hours required must be a whole number.")]
    InvalidHours,
}

/// Errors from issuing or verifying session tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No signing secret is configured")]
    MissingSigningKey,

    #[error("Session token has expired")]
    Expired,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Failed to sign session token: {0}")]
    Signing(String),
}

/// Errors from reading process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "Title",
                max: 100
            }
            .to_string(),
            "Title must be at most 100 characters."
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "TASK_CRM_PORT",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for TASK_CRM_PORT: abc");
    }
}
