// crates/core/src/config.rs
//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use crate::auth::Credentials;
use crate::error::ConfigError;
use crate::token::SessionTokens;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8501;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "tasks.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub signing_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub db_path: PathBuf,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let port = match get("TASK_CRM_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "TASK_CRM_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            signing_secret: get("SIGNING_SECRET"),
            username: get("APP_USER"),
            password: get("APP_PASSWORD"),
            db_path: get("TASK_CRM_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            port,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    pub fn session_tokens(&self) -> SessionTokens {
        SessionTokens::new(self.signing_secret.as_deref())
    }
}
