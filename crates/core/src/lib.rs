// crates/core/src/lib.rs
//! Domain types, validation rules and authentication primitives for task-crm.
//!
//! Nothing in here touches the database or HTTP; the `db` and `server` crates
//! build on these types.

pub mod auth;
pub mod config;
pub mod error;
pub mod token;
pub mod types;
pub mod validation;

pub use auth::Credentials;
pub use config::AppConfig;
pub use error::{AuthError, ConfigError, ValidationError};
pub use token::{Claims, SessionTokens, ACCESS_TOKEN_TTL_SECS};
pub use types::{NewTask, Status, Task};
pub use validation::{clamp_hours, parse_hours, validate_status_name, validate_task_form};
