//! Repository for the `submissions` table.

use abstracts_core::submission::{NewSubmission, SubmissionChanges};
use abstracts_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::submission::Submission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, submitter_name, submitter_email, abstract_title, abstract_type, \
    theme, company, discipline, abstract_content, author_names, author_emails, \
    author_positions, author_contact, submitted_at, deadline";

/// Provides create, lookup and partial-update operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a validated submission, returning the created row with its
    /// newly assigned id.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewSubmission,
        submitted_at: Timestamp,
        deadline: Timestamp,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (
                submitter_name, submitter_email, abstract_title, abstract_type, theme,
                company, discipline, abstract_content, author_names, author_emails,
                author_positions, author_contact, submitted_at, deadline
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        let submission = sqlx::query_as::<_, Submission>(&query)
            .bind(&input.submitter_name)
            .bind(&input.submitter_email)
            .bind(&input.abstract_title)
            .bind(&input.abstract_type)
            .bind(&input.theme)
            .bind(&input.company)
            .bind(&input.discipline)
            .bind(&input.abstract_content)
            .bind(&input.author_names)
            .bind(&input.author_emails)
            .bind(&input.author_positions)
            .bind(&input.author_contact)
            .bind(submitted_at)
            .bind(deadline)
            .fetch_one(pool)
            .await?;

        tracing::debug!(id = submission.id, "Inserted submission");
        Ok(submission)
    }

    /// Find a submission by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a submission. Only non-`None` fields in `input` are applied;
    /// `submitted_at` and `deadline` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &SubmissionChanges,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET
                submitter_name = COALESCE($2, submitter_name),
                submitter_email = COALESCE($3, submitter_email),
                abstract_title = COALESCE($4, abstract_title),
                abstract_type = COALESCE($5, abstract_type),
                theme = COALESCE($6, theme),
                company = COALESCE($7, company),
                discipline = COALESCE($8, discipline),
                abstract_content = COALESCE($9, abstract_content),
                author_names = COALESCE($10, author_names),
                author_emails = COALESCE($11, author_emails),
                author_positions = COALESCE($12, author_positions),
                author_contact = COALESCE($13, author_contact)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(&input.submitter_name)
            .bind(&input.submitter_email)
            .bind(&input.abstract_title)
            .bind(&input.abstract_type)
            .bind(&input.theme)
            .bind(&input.company)
            .bind(&input.discipline)
            .bind(&input.abstract_content)
            .bind(&input.author_names)
            .bind(&input.author_emails)
            .bind(&input.author_positions)
            .bind(&input.author_contact)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored submissions.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
