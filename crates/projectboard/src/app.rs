use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::projects::{create_project, list_projects, method_not_allowed, preflight},
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The single `/` route dispatches by method: OPTIONS acknowledges
/// preflight, POST creates, GET lists, and everything else lands on the
/// method-router fallback with a 405. The `CorsLayer` answers preflight
/// requests itself and stamps the allow-origin header on every response.
pub fn create_app(state: AppState, allowed_origin: &str) -> Router {
    let cors = if allowed_origin == "*" {
        CorsLayer::new().allow_origin(Any)
    } else {
        match allowed_origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new().allow_origin(origin),
            Err(_) => {
                tracing::warn!(
                    allowed_origin,
                    "invalid ALLOWED_ORIGIN value, falling back to wildcard"
                );
                CorsLayer::new().allow_origin(Any)
            }
        }
    }
    .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
    .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/",
            get(list_projects)
                .post(create_project)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(cors)
        .with_state(state)
}
