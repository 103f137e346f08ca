use crate::types::{DbId, Timestamp};

/// Domain-level failures shared by the repository and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Deadline for modification has passed ({deadline})")]
    DeadlineExpired { deadline: Timestamp },
}

/// A rejected submission or update.
///
/// The `Display` text is the message shown to the submitter, so it names
/// the violated rule and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required form field was absent, empty or whitespace-only. Carries
    /// the form name of the first offending field for logging.
    #[error("All fields are required.")]
    MissingField(&'static str),

    #[error("Invalid submitter email address.")]
    InvalidEmail,

    #[error("One or more author email addresses are invalid.")]
    InvalidAuthorEmail,

    #[error("Abstract exceeds the {limit}-word limit. Current word count: {count}.")]
    AbstractTooLong { count: usize, limit: usize },

    #[error("No changes were submitted.")]
    NoChanges,
}
