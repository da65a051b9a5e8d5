//! Liveness and readiness endpoints, mounted at the root.

use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Upper bound on the readiness round trip. A pool that cannot hand out a
/// connection would otherwise hold the request until its acquire timeout.
const DB_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness payload. `db_latency_ms` is absent when the check failed.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_latency_ms: Option<u64>,
}

/// GET /health -- 200 when storage answers, 503 otherwise.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let outcome =
        tokio::time::timeout(DB_CHECK_TIMEOUT, vigil_db::health_check(&state.pool)).await;

    let db_latency_ms = match outcome {
        Ok(Ok(())) => Some(started.elapsed().as_millis() as u64),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Readiness check: database unreachable");
            None
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = DB_CHECK_TIMEOUT.as_millis() as u64,
                "Readiness check: database timed out",
            );
            None
        }
    };
    let db_healthy = db_latency_ms.is_some();

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            db_latency_ms,
        }),
    )
}

/// GET /health/live -- answers as long as the process serves requests.
async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health routes (root-level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(readiness))
        .route("/health/live", get(liveness))
}
