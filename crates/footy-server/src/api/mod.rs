mod fixtures;
mod health;
mod leagues;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use footy_core::{AppConfig, FixtureService, ScheduleSource, ServiceError};

/// Shared per-request state: the fixture service over whichever schedule
/// source the binary injected, plus the startup config.
pub struct AppState<S> {
    pub service: Arc<FixtureService<S>>,
    pub config: Arc<AppConfig>,
}

// Manual impl so `S` itself never needs to be `Clone`; both fields are Arcs.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

/// Error responses use the flat `{"error": "..."}` body the consuming
/// frontend already parses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 with a descriptive, caller-facing message.
    BadRequest(String),
    /// 404 from the fallback route.
    NotFound,
    /// 500 with a generic message; detail is logged where it occurred.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Endpoint not found".to_owned()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_owned(),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Unknown leagues are the caller's mistake and keep their message; any
/// source failure is logged here and collapsed to an opaque 500.
pub(super) fn map_service_error(error: ServiceError) -> ApiError {
    match error {
        ServiceError::UnknownLeague(_) => ApiError::BadRequest(error.to_string()),
        ServiceError::Source(_) => {
            tracing::error!(error = %error, "fixtures request failed");
            ApiError::Internal
        }
    }
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in [&config.frontend_origin, &config.backend_origin] {
        match HeaderValue::from_str(origin) {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(origin = %origin, "ignoring unparseable CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app<S: ScheduleSource + 'static>(state: AppState<S>) -> Router {
    let cors = build_cors(&state.config);

    Router::new()
        .route("/health", get(health::health::<S>))
        .route("/api/leagues", get(leagues::list_leagues))
        .route("/api/fixtures/{league_code}", get(fixtures::get_fixtures::<S>))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
