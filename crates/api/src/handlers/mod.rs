//! Request handlers for the submission form pages.

pub mod modification;
pub mod submission;

/// Client-facing messages for storage failures, one per operation.
pub const SAVE_FAILED: &str = "Could not save your submission.";
pub const RETRIEVE_FAILED: &str = "Could not retrieve the submission.";
pub const UPDATE_FAILED: &str = "Could not update the submission.";
