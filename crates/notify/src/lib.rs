//! Outbound email for abstract submissions.
//!
//! - [`Mailer`]: the transport seam, with [`SmtpMailer`] as the production
//!   implementation.
//! - [`messages`]: builders for the submitter confirmation and the admin
//!   notification.
//! - [`SubmissionNotifier`]: sends both messages for a new submission and
//!   logs, but never propagates, delivery failures.

pub mod email;
pub mod messages;
pub mod notifier;

pub use email::{EmailConfig, EmailError, Mailer, OutgoingEmail, SmtpMailer};
pub use notifier::SubmissionNotifier;
