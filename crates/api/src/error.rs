use abstracts_core::error::{CoreError, ValidationError};
use axum::extract::rejection::FormRejection;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Header carrying the machine-readable error code alongside the
/// human-readable body.
pub const ERROR_CODE_HEADER: HeaderName = HeaderName::from_static("x-error-code");

/// Body text for a form that could not be decoded.
pub const MALFORMED_FORM_MESSAGE: &str = "The submitted form could not be read.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the request and storage
/// failure variants. Implements [`IntoResponse`] to produce
/// `Error: {message}` plain text bodies, which is what the form pages display.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `abstracts_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A path id that does not parse as a [`DbId`](abstracts_core::types::DbId).
    #[error("{entity} not found: unparseable id {raw:?}")]
    UnknownId { entity: &'static str, raw: String },

    /// The form body could not be read or deserialized.
    #[error("Malformed form body: {0}")]
    MalformedForm(#[from] FormRejection),

    /// A database failure. `message` is what the client sees; `source` is
    /// only logged.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a sqlx error with the client-facing
    /// message for the operation that failed.
    pub fn persistence(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Persistence { message, source }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(err) => {
                    tracing::info!(error = ?err, "Rejected invalid input");
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
                CoreError::NotFound { entity, id } => {
                    tracing::info!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{entity} not found."))
                }
                CoreError::DeadlineExpired { deadline } => {
                    tracing::info!(%deadline, "Modification after deadline refused");
                    (
                        StatusCode::FORBIDDEN,
                        "DEADLINE_EXPIRED",
                        "Deadline for modification has passed.".to_string(),
                    )
                }
            },

            AppError::UnknownId { entity, raw } => {
                tracing::info!(entity, raw = %raw, "Unparseable id");
                (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{entity} not found."))
            }

            AppError::MalformedForm(rejection) => {
                tracing::info!(
                    status = %rejection.status(),
                    detail = %rejection.body_text(),
                    "Rejected malformed form"
                );
                (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_FORM",
                    MALFORMED_FORM_MESSAGE.to_string(),
                )
            }

            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    message.to_string(),
                )
            }
        };

        (
            status,
            [(ERROR_CODE_HEADER, HeaderValue::from_static(code))],
            format!("Error: {message}"),
        )
            .into_response()
    }
}
