use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::{healthz, livez},
        learners::{
            create_learner, delete_learner, get_learner, get_learner_summary, list_learners,
            method_not_allowed, unmatched_path, update_learner,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let cors = if config.cors_allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
    };

    // Unsupported verbs on these paths get 405 from the method router.
    // HEAD is listed explicitly so it never reaches the GET handlers.
    let learner_routes = Router::new()
        .route(
            "/learners",
            get(list_learners)
                .post(create_learner)
                .head(method_not_allowed),
        )
        .route(
            "/learners/{id}",
            get(get_learner)
                .put(update_learner)
                .delete(delete_learner)
                .head(method_not_allowed),
        )
        .route(
            "/learners/summary/{id}",
            get(get_learner_summary).head(method_not_allowed),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(learner_routes)
        .fallback(unmatched_path)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
