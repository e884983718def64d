//! Incoming HTTP request type.

use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;

/// An incoming request after hyper has done the wire work: the method and
/// path it was routed on, plus the fully collected body.
///
/// Handlers receive these from the server loop; constructing one directly is
/// mainly useful in tests driving [`Router::dispatch`](crate::Router::dispatch).
pub struct Request {
    method: Method,
    path: String,
    body: Bytes,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, body: Bytes) -> Self {
        Self { method, path: path.into(), body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Deserializes the JSON body. `None` for an empty or malformed body, or
    /// one whose shape does not fit `T` — each route decides what that means
    /// for it.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(&self.body).ok()
    }
}
