//! HTTP API Layer
//!
//! REST surface of the fund registry, built on Axum.
//!
//! # Routes
//!
//! - `GET /health`, `GET /health/ready`: liveness and store readiness
//! - `GET /funds`: listing summary with strategies and total AUM
//! - `POST /funds/upload`: multipart CSV import (`csv_file` field)
//! - `GET /api/funds`, `POST /api/funds`, `GET /api/funds/:id`: JSON access
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_fund::FundService;

use crate::config::ApiConfig;
use crate::handlers::{fund, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: FundService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Fund service backed by the configured store
/// * `config` - API configuration
pub fn create_router(service: FundService, config: ApiConfig) -> Router {
    let body_limit = config.max_upload_bytes;
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Each resource also answers with a trailing slash
    let fund_routes = Router::new()
        .route("/funds", get(fund::list_view))
        .route("/funds/", get(fund::list_view))
        .route("/funds/upload", post(fund::upload_csv))
        .route("/funds/upload/", post(fund::upload_csv))
        .route("/api/funds", get(fund::list_funds).post(fund::create_fund))
        .route("/api/funds/", get(fund::list_funds).post(fund::create_fund))
        .route("/api/funds/:id", get(fund::get_fund))
        .route("/api/funds/:id/", get(fund::get_fund));

    Router::new()
        .merge(public_routes)
        .merge(fund_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_logging))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
