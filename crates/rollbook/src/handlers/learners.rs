//! Learner CRUD handlers.
//!
//! Path IDs arrive as raw strings so a non-numeric ID is reported as a bad
//! request rather than an extractor rejection. Request bodies are decoded
//! leniently; a malformed body registers or updates with zero-valued fields.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};

use rollbook_core::learner::{decode_learner_input, parse_learner_id, Learner, LearnerSummary};

use crate::{handlers::AppError, state::AppState};

/// Register a learner (POST /learners).
pub async fn create_learner(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Learner>, AppError> {
    let input = decode_learner_input(&body);
    let learner = state.learner_repo.create_learner(input).await?;

    tracing::info!(learner_id = learner.id, name = %learner.name, "Registered learner");

    Ok(Json(learner))
}

/// List all learners (GET /learners).
pub async fn list_learners(State(state): State<AppState>) -> Result<Json<Vec<Learner>>, AppError> {
    let learners = state.learner_repo.list_learners().await?;
    Ok(Json(learners))
}

/// Get a single learner by ID (GET /learners/{id}).
pub async fn get_learner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Learner>, AppError> {
    let id = parse_learner_id(&raw_id)?;
    let learner = state.learner_repo.get_learner(id).await?;
    Ok(Json(learner))
}

/// Get a learner's summary, computing it on first request (GET /learners/summary/{id}).
pub async fn get_learner_summary(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<LearnerSummary>, AppError> {
    let id = parse_learner_id(&raw_id)?;
    let summary = state.learner_repo.get_learner_summary(id).await?;
    Ok(Json(LearnerSummary { summary }))
}

/// Replace a learner's fields (PUT /learners/{id}).
pub async fn update_learner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Learner>, AppError> {
    let id = parse_learner_id(&raw_id)?;
    let input = decode_learner_input(&body);
    let learner = state.learner_repo.update_learner(id, input).await?;

    tracing::info!(learner_id = id, "Updated learner");

    Ok(Json(learner))
}

/// Delete a learner by ID (DELETE /learners/{id}).
pub async fn delete_learner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_learner_id(&raw_id)?;
    state.learner_repo.delete_learner(id).await?;

    tracing::info!(learner_id = id, "Deleted learner");

    Ok(StatusCode::NO_CONTENT)
}

/// Answer HEAD on learner routes with 405.
///
/// Without an explicit HEAD handler axum runs the GET handler, which would
/// compute and cache a summary.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Fallback for paths no route matched.
///
/// Under `/learners/` the whole remainder is the ID, so an empty ID or one
/// with extra segments (`/learners/`, `/learners/1/extra`) is a bad request
/// for the verbs that path accepts. Anything else is 404.
pub async fn unmatched_path(method: Method, uri: Uri) -> Result<StatusCode, AppError> {
    let path = uri.path();
    let (raw_id, allowed) = if let Some(rest) = path.strip_prefix("/learners/summary/") {
        (rest, method == Method::GET)
    } else if let Some(rest) = path.strip_prefix("/learners/") {
        let allowed = method == Method::GET || method == Method::PUT || method == Method::DELETE;
        (rest, allowed)
    } else {
        return Ok(StatusCode::NOT_FOUND);
    };

    if !allowed {
        return Ok(StatusCode::METHOD_NOT_ALLOWED);
    }

    parse_learner_id(raw_id)?;
    Ok(StatusCode::NOT_FOUND)
}
