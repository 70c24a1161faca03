//! # REST API HTTP Server
//!
//! Axum router and handlers. The boundary validates input, dispatches to
//! the service layer, and serializes the outcome envelope; no business
//! logic lives here.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::{ApplicationService, ServiceResponse};
use crate::observability::MetricsRegistry;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::validation::{parse_list_query, validate_create, validate_id, validate_patch};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ApplicationService>,
    pub metrics: Arc<MetricsRegistry>,
}

/// REST API server.
pub struct RestServer {
    config: HttpServerConfig,
    state: AppState,
}

impl RestServer {
    pub fn new(config: HttpServerConfig, service: Arc<ApplicationService>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            config,
            state: AppState { service, metrics },
        }
    }

    /// Build the axum router with all routes and middleware.
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health-check", get(health_check_handler))
            .route("/metrics", get(metrics_handler))
            .route("/applications", get(list_applications_handler))
            .route("/applications", post(create_application_handler))
            .route("/applications/:id", get(get_application_handler))
            .route("/applications/:id", patch(update_application_handler))
            .route("/applications/:id", delete(delete_application_handler))
            .fallback(unknown_route_handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(addr = %addr, "intake server listening");

        axum::serve(listener, self.router()).await
    }
}

/// Health check: always a success envelope.
async fn health_check_handler() -> impl IntoResponse {
    ServiceResponse::<()>::success_empty("Service is healthy", 200)
}

/// Metrics snapshot as JSON.
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.increment_http_requests();
    Json(state.metrics.snapshot())
}

/// GET /applications — paginated, filtered, sorted listing.
async fn list_applications_handler(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    state.metrics.increment_http_requests();

    let params = parse_list_query(&raw).map_err(|e| rejected(&state, e))?;

    let response = state.service.find_all(params);
    if response.success {
        state.metrics.increment_queries_executed();
    }
    Ok(response)
}

/// GET /applications/:id
async fn get_application_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.metrics.increment_http_requests();

    let id = validate_id(&raw_id).map_err(|e| rejected(&state, e))?;
    Ok(state.service.find_by_id(&id))
}

/// POST /applications
async fn create_application_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    state.metrics.increment_http_requests();

    let fields = validate_create(&body).map_err(|e| rejected(&state, e))?;

    let response = state.service.create(fields);
    if response.success {
        state.metrics.increment_created();
    }
    Ok(response)
}

/// PATCH /applications/:id
async fn update_application_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    state.metrics.increment_http_requests();

    let id = validate_id(&raw_id).map_err(|e| rejected(&state, e))?;
    let patch = validate_patch(&body).map_err(|e| rejected(&state, e))?;

    let response = state.service.update(&id, patch);
    if response.success {
        state.metrics.increment_updated();
    }
    Ok(response)
}

/// DELETE /applications/:id
async fn delete_application_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.metrics.increment_http_requests();

    let id = validate_id(&raw_id).map_err(|e| rejected(&state, e))?;

    let response = state.service.delete(&id);
    if response.success {
        state.metrics.increment_deleted();
    }
    Ok(response)
}

/// Unknown routes render the standard envelope with a 404.
async fn unknown_route_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ServiceResponse::<()>::failure("Not Found", 404)),
    )
}

fn rejected(state: &AppState, err: ApiError) -> ApiError {
    state.metrics.increment_requests_rejected();
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationStore;

    #[test]
    fn test_router_builds() {
        let store = Arc::new(ApplicationStore::new());
        let service = Arc::new(ApplicationService::new(store));
        let metrics = Arc::new(MetricsRegistry::new());
        let server = RestServer::new(HttpServerConfig::default(), service, metrics);
        let _router = server.router();
    }
}
