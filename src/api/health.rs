//! Health check endpoint.

/// Liveness probe for load balancers and monitoring.
#[tracing::instrument()]
pub async fn health() -> &'static str {
    "ok"
}
