//! Submission form input and the validation rules applied to it.
//!
//! Form field names are the camelCase names posted by the HTML form. Lists
//! of authors are kept as the comma-joined text the submitter typed.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of words allowed in an abstract body.
pub const MAX_ABSTRACT_WORDS: usize = 350;

/// Conservative `local@domain.tld` shape: no whitespace, exactly one `@`,
/// and at least one `.` after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Primitive checks
// ---------------------------------------------------------------------------

/// Returns `true` if `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if every comma-separated entry in `emails` is a valid
/// address. Entries are trimmed first.
///
/// Empty entries are invalid, so empty input and trailing or doubled commas
/// are rejected.
pub fn validate_multiple_emails(emails: &str) -> bool {
    emails.split(',').map(str::trim).all(is_valid_email)
}

/// Count whitespace-separated words. Blank input has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reject an abstract body longer than [`MAX_ABSTRACT_WORDS`].
pub fn validate_word_count(content: &str) -> Result<(), ValidationError> {
    let count = count_words(content);
    if count > MAX_ABSTRACT_WORDS {
        return Err(ValidationError::AbstractTooLong {
            count,
            limit: MAX_ABSTRACT_WORDS,
        });
    }
    Ok(())
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    non_blank(value).ok_or(ValidationError::MissingField(field))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// New submissions
// ---------------------------------------------------------------------------

/// Raw `POST /submit` body. Every field is optional here so that a missing
/// field becomes a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionForm {
    pub submitter_name: Option<String>,
    pub submitter_email: Option<String>,
    pub abstract_title: Option<String>,
    pub abstract_type: Option<String>,
    pub theme: Option<String>,
    pub company: Option<String>,
    pub discipline: Option<String>,
    pub abstract_content: Option<String>,
    pub author_names: Option<String>,
    pub author_emails: Option<String>,
    pub author_positions: Option<String>,
    pub author_contact: Option<String>,
}

/// A submission that passed every rule in [`SubmissionForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
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
}

impl SubmissionForm {
    /// Validate the form in order: presence of all twelve fields, submitter
    /// email, author emails, then abstract length. The first failure wins.
    ///
    /// Values are trimmed of surrounding whitespace.
    pub fn validate(self) -> Result<NewSubmission, ValidationError> {
        let submission = NewSubmission {
            submitter_name: required("submitterName", self.submitter_name)?,
            submitter_email: required("submitterEmail", self.submitter_email)?,
            abstract_title: required("abstractTitle", self.abstract_title)?,
            abstract_type: required("abstractType", self.abstract_type)?,
            theme: required("theme", self.theme)?,
            company: required("company", self.company)?,
            discipline: required("discipline", self.discipline)?,
            abstract_content: required("abstractContent", self.abstract_content)?,
            author_names: required("authorNames", self.author_names)?,
            author_emails: required("authorEmails", self.author_emails)?,
            author_positions: required("authorPositions", self.author_positions)?,
            author_contact: required("authorContact", self.author_contact)?,
        };

        if !is_valid_email(&submission.submitter_email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validate_multiple_emails(&submission.author_emails) {
            return Err(ValidationError::InvalidAuthorEmail);
        }
        validate_word_count(&submission.abstract_content)?;

        Ok(submission)
    }
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// `POST /update/{id}` body. Only fields that are present and non-blank are
/// applied; everything else keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionChanges {
    pub submitter_name: Option<String>,
    pub submitter_email: Option<String>,
    pub abstract_title: Option<String>,
    pub abstract_type: Option<String>,
    pub theme: Option<String>,
    pub company: Option<String>,
    pub discipline: Option<String>,
    pub abstract_content: Option<String>,
    pub author_names: Option<String>,
    pub author_emails: Option<String>,
    pub author_positions: Option<String>,
    pub author_contact: Option<String>,
}

impl SubmissionChanges {
    /// Drop blank fields, then apply the same email and length rules as a
    /// new submission to whatever remains.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let changes = Self {
            submitter_name: non_blank(self.submitter_name),
            submitter_email: non_blank(self.submitter_email),
            abstract_title: non_blank(self.abstract_title),
            abstract_type: non_blank(self.abstract_type),
            theme: non_blank(self.theme),
            company: non_blank(self.company),
            discipline: non_blank(self.discipline),
            abstract_content: non_blank(self.abstract_content),
            author_names: non_blank(self.author_names),
            author_emails: non_blank(self.author_emails),
            author_positions: non_blank(self.author_positions),
            author_contact: non_blank(self.author_contact),
        };

        if changes.is_empty() {
            return Err(ValidationError::NoChanges);
        }
        if let Some(email) = &changes.submitter_email {
            if !is_valid_email(email) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        if let Some(emails) = &changes.author_emails {
            if !validate_multiple_emails(emails) {
                return Err(ValidationError::InvalidAuthorEmail);
            }
        }
        if let Some(content) = &changes.abstract_content {
            validate_word_count(content)?;
        }

        Ok(changes)
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
