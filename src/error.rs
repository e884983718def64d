//! Service error types.

use http::StatusCode;
use thiserror::Error;

use crate::external::ExternalError;

/// Errors a request handler can produce.
///
/// Every variant maps to one HTTP status and a JSON `{"message": …}` body.
/// The mapping to a [`Response`](crate::Response) lives in the
/// [`IntoResponse`](crate::IntoResponse) impl, so handlers return
/// `Result<Response, ApiError>` and let failures convert themselves.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input field is absent or empty. Carries the exact message
    /// of the route that detected it (`/users` and `/posts` word theirs
    /// differently).
    #[error("{0}")]
    MissingField(&'static str),

    /// Another user already registered this email.
    #[error("Email already exists")]
    DuplicateEmail,

    /// The `authorId` on a post creation resolves to no user.
    #[error("Author not found")]
    AuthorNotFound,

    /// The outbound call behind `/posts-with-external-data` failed. The
    /// underlying cause is reported in the response's `error` field.
    #[error("Error fetching combined data")]
    ExternalFetch(#[from] ExternalError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::AuthorNotFound => StatusCode::NOT_FOUND,
            Self::ExternalFetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Infrastructure failures: binding the port or accepting a connection.
///
/// Application-level errors (400, 404, 409, 500 bodies) are [`ApiError`]
/// values, not `ServerError`s — they never bubble this far.
#[derive(Debug, Error)]
#[error("io: {0}")]
pub struct ServerError(#[from] std::io::Error);
