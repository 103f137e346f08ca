//! Outbound mail: the [`Mailer`] seam and its SMTP implementation.
//!
//! Handlers never talk to `lettre` directly. They hold an `Arc<dyn Mailer>`,
//! which is an [`SmtpMailer`] in production and a recording double in tests.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Why a message could not be handed to the relay.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("SMTP relay rejected or dropped the message: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Unusable email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Could not assemble message: {0}")]
    Build(String),
}

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "noreply@abstracts.local";

/// SMTP relay settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_host: String,
    /// Defaults to 587 when `SMTP_PORT` is unset or not a port number.
    pub smtp_port: u16,
    /// Sender of both the confirmation and the committee notice.
    pub from_address: String,
    /// Credentials are only sent when both are present.
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Read `SMTP_HOST`, `SMTP_PORT`, `SMTP_FROM`, `SMTP_USER` and
    /// `SMTP_PASSWORD`. `None` means submissions are stored without email.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EmailConfig::from_env`], reading values through `lookup`.
    ///
    /// A blank value counts as unset, so a `.env` line like `SMTP_HOST=`
    /// disables email instead of pointing the relay at an empty host.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Some(Self {
            smtp_host: var("SMTP_HOST")?,
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: var("SMTP_FROM").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: var("SMTP_USER"),
            smtp_password: var("SMTP_PASSWORD"),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// A plain-text message ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Attempts delivery of a single message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// Sends email through an SMTP relay with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the relay transport from configuration. No connection is made
    /// until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.transport.send(message).await?;
        tracing::info!(to = %email.to, "Email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Option<EmailConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EmailConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_or_blank_host_disables_email() {
        assert_eq!(load(&[]), None);
        assert_eq!(load(&[("SMTP_HOST", "")]), None);
        assert_eq!(load(&[("SMTP_HOST", "   "), ("SMTP_FROM", "a@b.c")]), None);
    }

    #[test]
    fn blank_optional_values_fall_back_to_defaults() {
        let config = load(&[
            ("SMTP_HOST", "smtp.conf.test"),
            ("SMTP_PORT", ""),
            ("SMTP_FROM", " "),
            ("SMTP_USER", ""),
            ("SMTP_PASSWORD", ""),
        ])
        .unwrap();

        assert_eq!(
            config,
            EmailConfig {
                smtp_host: "smtp.conf.test".to_string(),
                smtp_port: 587,
                from_address: "noreply@abstracts.local".to_string(),
                smtp_user: None,
                smtp_password: None,
            }
        );
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let config = load(&[
            ("SMTP_HOST", " smtp.conf.test "),
            ("SMTP_PORT", "2525"),
            ("SMTP_FROM", "program@conf.test"),
            ("SMTP_USER", "program"),
            ("SMTP_PASSWORD", "hunter2"),
        ])
        .unwrap();

        assert_eq!(config.smtp_host, "smtp.conf.test");
        assert_eq!(config.smtp_port, 2525);
        assert_eq!(config.from_address, "program@conf.test");
        assert_eq!(config.smtp_user.as_deref(), Some("program"));
        assert_eq!(config.smtp_password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn unparseable_port_falls_back_to_587() {
        let config = load(&[("SMTP_HOST", "smtp.conf.test"), ("SMTP_PORT", "smtp")]).unwrap();
        assert_eq!(config.smtp_port, 587);
    }

    #[tokio::test]
    async fn smtp_mailer_rejects_bad_recipient_before_connecting() {
        let config = load(&[("SMTP_HOST", "smtp.invalid")]).unwrap();
        let mailer = SmtpMailer::new(&config).unwrap();
        let result = mailer
            .send(OutgoingEmail {
                from: config.from_address.clone(),
                to: "not an address".to_string(),
                subject: "s".to_string(),
                text: "t".to_string(),
            })
            .await;
        assert!(matches!(result, Err(EmailError::Address(_))));
    }
}
