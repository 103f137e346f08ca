//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Path` and `Form` rejections carry their own status codes
//! and parser details. These wrappers turn them into the same
//! `Error: {message}` responses the handlers produce.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;

use abstracts_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of `/modify/{id}` and `/update/{id}`.
///
/// An id that is not a valid integer cannot name a stored submission, so it
/// is rejected as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for SubmissionId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .unwrap_or_default();

        raw.parse().map(SubmissionId).map_err(|_| AppError::UnknownId {
            entity: "Submission",
            raw,
        })
    }
}

/// `application/x-www-form-urlencoded` body.
///
/// ```ignore
/// async fn create(ValidForm(form): ValidForm<SubmissionForm>) -> AppResult<Html<String>> {
///     // form deserialized, or the request was already answered with 400
/// }
/// ```
pub struct ValidForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
