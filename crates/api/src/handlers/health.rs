//! Health check endpoint for Kubernetes-style probes.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections; it does not touch storage.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
