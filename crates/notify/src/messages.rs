//! Message bodies sent when a submission is accepted.

use abstracts_db::models::submission::Submission;

use crate::email::OutgoingEmail;

/// Human-readable deadline format used in email bodies.
const DEADLINE_FORMAT: &str = "%B %-d, %Y at %H:%M UTC";

/// Confirmation sent to the submitter, including the link they can use to
/// edit their entry until the deadline.
pub fn confirmation_email(
    from: &str,
    conference_name: &str,
    submission: &Submission,
    modify_url: &str,
) -> OutgoingEmail {
    let text = format!(
        "Dear {name},

We received your abstract submission to {conference_name}.

Authors: {authors}
Title: {title}
Type: {kind}
Theme: {theme}
Company: {company}
Discipline: {discipline}
Submission ID: {id}

You can modify your submission until the deadline: {deadline}.

Modify your submission here: {modify_url}

Best regards,
Abstract Submission Team",
        name = submission.submitter_name,
        authors = submission.author_names,
        title = submission.abstract_title,
        kind = submission.abstract_type,
        theme = submission.theme,
        company = submission.company,
        discipline = submission.discipline,
        id = submission.id,
        deadline = submission.deadline.format(DEADLINE_FORMAT),
    );

    OutgoingEmail {
        from: from.to_string(),
        to: submission.submitter_email.clone(),
        subject: format!(
            "Abstract Submission Confirmation: {}",
            submission.abstract_title
        ),
        text,
    }
}

/// Full-detail notice sent to the conference administrators.
pub fn admin_notification_email(from: &str, admin_email: &str, submission: &Submission) -> OutgoingEmail {
    let text = format!(
        "A new abstract has been submitted.

Submission ID: {id}
Submitter Name: {name}
Submitter Email: {email}

Abstract Title: {title}
Abstract Type: {kind}
Theme: {theme}
Company: {company}
Discipline: {discipline}

Author/Co-author Details:
- Names: {names}
- Emails: {emails}
- Positions: {positions}
- Contact Numbers: {contact}

Abstract Content:
{content}

Submitted At: {submitted_at}",
        id = submission.id,
        name = submission.submitter_name,
        email = submission.submitter_email,
        title = submission.abstract_title,
        kind = submission.abstract_type,
        theme = submission.theme,
        company = submission.company,
        discipline = submission.discipline,
        names = submission.author_names,
        emails = submission.author_emails,
        positions = submission.author_positions,
        contact = submission.author_contact,
        content = submission.abstract_content,
        submitted_at = submission.submitted_at.to_rfc3339(),
    );

    OutgoingEmail {
        from: from.to_string(),
        to: admin_email.to_string(),
        subject: "New Abstract Submission Received".to_string(),
        text,
    }
}
