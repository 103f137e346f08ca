//! HTML fragments returned by the form handlers.
//!
//! Every stored value is escaped before interpolation.

use abstracts_db::models::submission::Submission;

/// Body returned after a successful edit.
pub const UPDATE_SUCCEEDED: &str = "Your submission has been updated successfully.";

/// Escape text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Acknowledgement page for a new submission.
pub fn submission_received(modify_url: &str) -> String {
    let url = escape_html(modify_url);
    format!(
        "Thank you for your submission. Use the following link to modify your \
         submission if needed: <a href=\"{url}\">{url}</a>"
    )
}

enum Control {
    Text,
    Email,
    TextArea,
}

/// Edit form for `submission`, posting to `/update/{id}` with every editable
/// field pre-filled.
pub fn edit_form(submission: &Submission) -> String {
    let fields: [(&str, &str, &str, Control); 12] = [
        ("submitterName", "Submitter Name", submission.submitter_name.as_str(), Control::Text),
        ("submitterEmail", "Submitter Email", submission.submitter_email.as_str(), Control::Email),
        ("abstractTitle", "Abstract Title", submission.abstract_title.as_str(), Control::Text),
        ("abstractType", "Abstract Type", submission.abstract_type.as_str(), Control::Text),
        ("theme", "Theme", submission.theme.as_str(), Control::Text),
        ("company", "Company", submission.company.as_str(), Control::Text),
        ("discipline", "Discipline", submission.discipline.as_str(), Control::Text),
        ("abstractContent", "Abstract Content", submission.abstract_content.as_str(), Control::TextArea),
        ("authorNames", "Author Names (comma separated)", submission.author_names.as_str(), Control::Text),
        ("authorEmails", "Author Emails (comma separated)", submission.author_emails.as_str(), Control::Text),
        ("authorPositions", "Author Positions (comma separated)", submission.author_positions.as_str(), Control::Text),
        ("authorContact", "Author Contact Numbers (comma separated)", submission.author_contact.as_str(), Control::Text),
    ];

    let mut html = format!(
        "<form action=\"/update/{id}\" method=\"POST\">\n",
        id = submission.id
    );
    for (name, label, value, control) in fields {
        let value = escape_html(value);
        html.push_str(&format!("  <label for=\"{name}\">{label}:</label>\n"));
        html.push_str(&match control {
            Control::Text => format!(
                "  <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" required />\n"
            ),
            Control::Email => format!(
                "  <input type=\"email\" id=\"{name}\" name=\"{name}\" value=\"{value}\" required />\n"
            ),
            Control::TextArea => format!(
                "  <textarea id=\"{name}\" name=\"{name}\" rows=\"12\" required>{value}</textarea>\n"
            ),
        });
    }
    html.push_str("  <button type=\"submit\">Submit Changes</button>\n</form>\n");
    html
}
