//! Submission entity model.

use abstracts_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: DbId,
    pub submitter_name: String,
    pub submitter_email: String,
    pub abstract_title: String,
    pub abstract_type: String,
    pub theme: String,
    pub company: String,
    pub discipline: String,
    pub abstract_content: String,
    pub author_names: String,
    pub author_emails: String,
    pub author_positions: String,
    pub author_contact: String,
    pub submitted_at: Timestamp,
    pub deadline: Timestamp,
}
