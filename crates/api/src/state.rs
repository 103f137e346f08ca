use std::sync::Arc;

use abstracts_notify::SubmissionNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: abstracts_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound email for new submissions. `None` when SMTP is not configured.
    pub notifier: Option<SubmissionNotifier>,
}
