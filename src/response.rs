//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it — or return
//! `Result<Response, ApiError>` and let the error map itself.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use http_body_util::Full;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

const APPLICATION_JSON: &str = "application/json";
const TEXT_HTML: &str = "text/html; charset=utf-8";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// An outgoing HTTP response.
///
/// ```rust
/// use http::StatusCode;
/// use corkboard::Response;
///
/// Response::json(&serde_json::json!({"id": 1}));
/// Response::text("ok");
/// Response::builder().status(StatusCode::CREATED).json(&serde_json::json!({"id": 1}));
/// ```
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` with a serialized JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::builder().json(value)
    }

    /// `200 OK` — `text/html`. Takes a static page (the dashboard is
    /// embedded at compile time).
    pub fn html(body: &'static str) -> Self {
        Self { status: StatusCode::OK, content_type: Some(TEXT_HTML), body: Bytes::from_static(body.as_bytes()) }
    }

    /// `200 OK` — `text/plain`.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(TEXT_PLAIN),
            body: Bytes::from(body.into()),
        }
    }

    /// Response with no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Bytes::new() }
    }

    /// Builder for responses that need a non-200 status.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: StatusCode::OK }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn into_hyper(self) -> http::Response<Full<Bytes>> {
        let mut response = http::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        response
    }
}

/// Fluent builder, obtained via [`Response::builder`]. Defaults to 200 and
/// is terminated by a typed body method.
pub struct ResponseBuilder {
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Terminate with a serialized JSON body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Response {
        match serde_json::to_vec(value) {
            Ok(body) => Response {
                status: self.status,
                content_type: Some(APPLICATION_JSON),
                body: Bytes::from(body),
            },
            // Serialization of the crate's derive types does not fail.
            Err(_) => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

}

/// Conversion into an HTTP [`Response`], so handlers can return their
/// natural type and the router normalizes.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::ExternalFetch(cause) => {
                json!({ "message": self.to_string(), "error": cause.to_string() })
            }
            _ => json!({ "message": self.to_string() }),
        };
        Response::builder().status(status).json(&body)
    }
}

impl<T: IntoResponse> IntoResponse for Result<T, ApiError> {
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(err) => err.into_response(),
        }
    }
}
