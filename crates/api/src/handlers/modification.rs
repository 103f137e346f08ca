//! Handlers for editing a submission before its deadline.

use abstracts_core::deadline::ensure_editable;
use abstracts_core::error::CoreError;
use abstracts_core::submission::SubmissionChanges;
use abstracts_core::types::DbId;
use abstracts_db::models::submission::Submission;
use abstracts_db::repositories::SubmissionRepo;
use axum::extract::State;
use axum::response::Html;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::extract::{SubmissionId, ValidForm};
use crate::handlers::{RETRIEVE_FAILED, UPDATE_FAILED};
use crate::render;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Submission",
        id,
    })
}

/// Load a submission that is still open for edits.
async fn find_editable(state: &AppState, id: DbId) -> AppResult<Submission> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::persistence(RETRIEVE_FAILED))?
        .ok_or_else(|| not_found(id))?;
    ensure_editable(Utc::now(), submission.deadline)?;
    Ok(submission)
}

/// GET /modify/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    SubmissionId(id): SubmissionId,
) -> AppResult<Html<String>> {
    let submission = find_editable(&state, id).await?;
    Ok(Html(render::edit_form(&submission)))
}

/// POST /update/{id}
///
/// The deadline is checked again here, so a form rendered just before the
/// cutoff cannot be submitted after it.
pub async fn update(
    State(state): State<AppState>,
    SubmissionId(id): SubmissionId,
    ValidForm(changes): ValidForm<SubmissionChanges>,
) -> AppResult<Html<String>> {
    find_editable(&state, id).await?;
    let changes = changes.validate()?;

    SubmissionRepo::update(&state.pool, id, &changes)
        .await
        .map_err(AppError::persistence(UPDATE_FAILED))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(id, "Submission updated");
    Ok(Html(render::UPDATE_SUCCEEDED.to_string()))
}
