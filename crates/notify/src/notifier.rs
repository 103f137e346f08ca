use std::sync::Arc;

use abstracts_db::models::submission::Submission;

use crate::email::Mailer;
use crate::messages::{admin_notification_email, confirmation_email};

/// Sends the emails that follow an accepted submission.
///
/// Delivery is best-effort: each failure is logged and the next message is
/// still attempted. Nothing is returned to the caller.
#[derive(Clone)]
pub struct SubmissionNotifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    admin_email: Option<String>,
    conference_name: String,
}

impl SubmissionNotifier {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        from: impl Into<String>,
        admin_email: Option<String>,
        conference_name: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            from: from.into(),
            admin_email,
            conference_name: conference_name.into(),
        }
    }

    /// Send the submitter confirmation, then the admin notification if an
    /// admin address is configured.
    pub async fn submission_received(&self, submission: &Submission, modify_url: &str) {
        let confirmation =
            confirmation_email(&self.from, &self.conference_name, submission, modify_url);
        match self.mailer.send(confirmation).await {
            Ok(()) => tracing::info!(id = submission.id, "Confirmation email sent to submitter"),
            Err(e) => tracing::error!(
                id = submission.id,
                error = %e,
                "Error sending confirmation email to submitter"
            ),
        }

        let Some(admin_email) = &self.admin_email else {
            tracing::debug!(id = submission.id, "ADMIN_EMAIL not set; skipping admin notification");
            return;
        };

        let notice = admin_notification_email(&self.from, admin_email, submission);
        match self.mailer.send(notice).await {
            Ok(()) => tracing::info!(id = submission.id, "Notification email sent to admin"),
            Err(e) => tracing::error!(
                id = submission.id,
                error = %e,
                "Error sending notification email to admin"
            ),
        }
    }
}
