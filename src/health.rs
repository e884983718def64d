//! Liveness and readiness probe handlers.
//!
//! The store lives in process memory and the external source is only touched
//! on demand, so both probes are unconditional: if the process answers HTTP
//! at all, it can serve traffic.

use crate::{Request, Response};

/// Liveness probe — `200 OK`, body `"ok"`.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// Readiness probe — `200 OK`, body `"ready"`.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
