#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use abstracts_api::config::{ServerConfig, SubmissionConfig};
use abstracts_api::router::build_app_router;
use abstracts_api::state::AppState;
use abstracts_core::types::Timestamp;
use abstracts_notify::{EmailError, Mailer, OutgoingEmail, SubmissionNotifier};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration as ChronoDuration, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "committee@conf.test";
pub const FROM_EMAIL: &str = "noreply@conf.test";
pub const INDEX_HTML: &str = "<html><body><form action=\"/submit\"></form></body></html>";

// ---------------------------------------------------------------------------
// Mail doubles
// ---------------------------------------------------------------------------

/// Forwards every message to a channel the test can read from.
pub struct ChannelMailer {
    tx: mpsc::UnboundedSender<OutgoingEmail>,
}

#[async_trait]
impl Mailer for ChannelMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let _ = self.tx.send(email);
        Ok(())
    }
}

/// Fails every delivery.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), EmailError> {
        Err(EmailError::Build("smtp unavailable".to_string()))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(static_dir: &Path, deadline: Timestamp) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: static_dir.to_path_buf(),
        submissions: SubmissionConfig {
            deadline,
            public_base_url: "http://localhost:3000".to_string(),
            admin_email: Some(ADMIN_EMAIL.to_string()),
            conference_name: "the Test Conference".to_string(),
        },
    }
}

/// A router wired the same way as `main.rs`, plus the handles tests need.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    /// Messages delivered through the channel mailer.
    pub outbox: mpsc::UnboundedReceiver<OutgoingEmail>,
    _static_dir: TempDir,
}

impl TestApp {
    /// App whose deadline is a week away.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_deadline(pool, Utc::now() + ChronoDuration::days(7))
    }

    /// App whose configured deadline is `deadline`.
    pub fn with_deadline(pool: SqlitePool, deadline: Timestamp) -> Self {
        let (tx, outbox) = mpsc::unbounded_channel();
        Self::build(pool, deadline, Some(Arc::new(ChannelMailer { tx })), outbox)
    }

    /// App whose mailer fails every delivery.
    pub fn with_failing_mailer(pool: SqlitePool) -> Self {
        let (_tx, outbox) = mpsc::unbounded_channel();
        Self::build(
            pool,
            Utc::now() + ChronoDuration::days(7),
            Some(Arc::new(FailingMailer)),
            outbox,
        )
    }

    /// App with email delivery disabled.
    pub fn without_mailer(pool: SqlitePool) -> Self {
        let (_tx, outbox) = mpsc::unbounded_channel();
        Self::build(pool, Utc::now() + ChronoDuration::days(7), None, outbox)
    }

    fn build(
        pool: SqlitePool,
        deadline: Timestamp,
        mailer: Option<Arc<dyn Mailer>>,
        outbox: mpsc::UnboundedReceiver<OutgoingEmail>,
    ) -> Self {
        let static_dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).expect("write index");

        let config = test_config(static_dir.path(), deadline);
        let notifier = mailer.map(|mailer| {
            SubmissionNotifier::new(
                mailer,
                FROM_EMAIL,
                config.submissions.admin_email.clone(),
                config.submissions.conference_name.clone(),
            )
        });
        let state = AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
            notifier,
        };

        Self {
            router: build_app_router(state, &config),
            pool,
            outbox,
            _static_dir: static_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        get(self.router.clone(), uri).await
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, String)]) -> Response<Body> {
        post_form(self.router.clone(), uri, fields).await
    }

    /// Wait for the next delivered email.
    pub async fn next_email(&mut self) -> OutgoingEmail {
        tokio::time::timeout(Duration::from_secs(5), self.outbox.recv())
            .await
            .expect("timed out waiting for email")
            .expect("mailer channel closed")
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn row_count(&self) -> i64 {
        abstracts_db::repositories::SubmissionRepo::count(&self.pool)
            .await
            .expect("count submissions")
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, String)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `application/x-www-form-urlencoded` encoding of `fields`.
pub fn form_body(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str) -> String {
    let mut out = String::new();
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// `n` distinct words.
pub fn words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A complete, valid submission form.
pub fn valid_form() -> Vec<(&'static str, String)> {
    vec![
        ("submitterName", "Ada Lovelace".to_string()),
        ("submitterEmail", "ada@example.com".to_string()),
        ("abstractTitle", "Analytical Engines".to_string()),
        ("abstractType", "Oral".to_string()),
        ("theme", "Computation".to_string()),
        ("company", "Babbage & Co".to_string()),
        ("discipline", "Mathematics".to_string()),
        ("abstractContent", words(120)),
        ("authorNames", "Ada Lovelace, Charles Babbage".to_string()),
        (
            "authorEmails",
            "ada@example.com, charles@example.com".to_string(),
        ),
        ("authorPositions", "Analyst, Inventor".to_string()),
        ("authorContact", "+44 1, +44 2".to_string()),
    ]
}

/// `valid_form` with `field` replaced by `value`.
pub fn form_with(field: &str, value: &str) -> Vec<(&'static str, String)> {
    let mut form = valid_form();
    for entry in form.iter_mut() {
        if entry.0 == field {
            entry.1 = value.to_string();
        }
    }
    form
}

/// `valid_form` without `field`.
pub fn form_without(field: &str) -> Vec<(&'static str, String)> {
    valid_form()
        .into_iter()
        .filter(|(name, _)| *name != field)
        .collect()
}
