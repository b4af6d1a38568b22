//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store statistics

use axum::{extract::State, http::StatusCode, Json};

use rollbook_core::health::HealthReport;

use crate::{handlers::AppError, state::AppState};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Reports the number of stored learners.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthReport>, AppError> {
    let learners = state.learner_repo.count_learners().await?;
    Ok(Json(HealthReport::ok(learners, env!("CARGO_PKG_VERSION"))))
}
