use std::path::PathBuf;

use abstracts_core::deadline::{parse_deadline, DeadlineParseError};
use abstracts_core::types::{DbId, Timestamp};

/// Error raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("SUBMISSION_DEADLINE is invalid: {0}")]
    Deadline(#[from] DeadlineParseError),
}

/// Server configuration loaded from environment variables.
///
/// Everything except the submission deadline has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite://submissions.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `index.html` and its assets (default: `static`).
    pub static_dir: PathBuf,
    /// Rules and addresses used by the submission flow.
    pub submissions: SubmissionConfig,
}

/// Settings for accepting and editing submissions.
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    /// Cutoff copied onto every new submission; edits are refused after it.
    pub deadline: Timestamp,
    /// Externally reachable origin used to build modification links.
    pub public_base_url: String,
    /// Recipient of new-submission notices. `None` disables the notice.
    pub admin_email: Option<String>,
    /// Name used in the submitter confirmation email.
    pub conference_name: String,
}

impl SubmissionConfig {
    /// Absolute link a submitter can use to edit submission `id`.
    pub fn modify_url(&self, id: DbId) -> String {
        format!("{}/modify/{id}", self.public_base_url.trim_end_matches('/'))
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://submissions.db`  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `static`                   |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `SUBMISSION_DEADLINE`  | required                   |
    /// | `ADMIN_EMAIL`          | unset                      |
    /// | `CONFERENCE_NAME`      | `the conference`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = var("PORT", "3000")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "PORT",
                message: e.to_string(),
            })?;

        let request_timeout_secs = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                message: e.to_string(),
            })?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let deadline = lookup("SUBMISSION_DEADLINE")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SUBMISSION_DEADLINE"))?;

        let submissions = SubmissionConfig {
            deadline: parse_deadline(&deadline)?,
            public_base_url: var("PUBLIC_BASE_URL", "http://localhost:3000"),
            admin_email: lookup("ADMIN_EMAIL").filter(|v| !v.trim().is_empty()),
            conference_name: var("CONFERENCE_NAME", "the conference"),
        };

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            database_url: var("DATABASE_URL", "sqlite://submissions.db"),
            cors_origins,
            request_timeout_secs,
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            submissions,
        })
    }
}
