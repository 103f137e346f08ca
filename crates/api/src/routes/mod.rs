pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{modification, submission};
use crate::state::AppState;

/// Build the form-facing route tree.
///
/// ```text
/// POST /submit               create a submission
/// GET  /modify/{id}          edit form (before the deadline)
/// POST /update/{id}          apply edits (before the deadline)
/// ```
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submission::create))
        .route("/modify/{id}", get(modification::edit_form))
        .route("/update/{id}", post(modification::update))
}
