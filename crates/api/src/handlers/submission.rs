//! Handler for new submissions.

use abstracts_core::submission::SubmissionForm;
use abstracts_db::repositories::SubmissionRepo;
use axum::extract::State;
use axum::response::Html;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::extract::ValidForm;
use crate::handlers::SAVE_FAILED;
use crate::render;
use crate::state::AppState;

/// POST /submit
///
/// Validates the form, stores it with the configured deadline and replies
/// with the modification link. Emails are sent from a background task and
/// cannot affect the response.
pub async fn create(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<SubmissionForm>,
) -> AppResult<Html<String>> {
    let input = form.validate()?;

    let submissions = &state.config.submissions;
    let submission = SubmissionRepo::create(&state.pool, &input, Utc::now(), submissions.deadline)
        .await
        .map_err(AppError::persistence(SAVE_FAILED))?;

    tracing::info!(id = submission.id, "Submission saved to database");

    let modify_url = submissions.modify_url(submission.id);

    match state.notifier.clone() {
        Some(notifier) => {
            let link = modify_url.clone();
            tokio::spawn(async move {
                notifier.submission_received(&submission, &link).await;
            });
        }
        None => tracing::warn!(
            id = submission.id,
            "Email delivery not configured; no confirmation sent"
        ),
    }

    Ok(Html(render::submission_received(&modify_url)))
}
