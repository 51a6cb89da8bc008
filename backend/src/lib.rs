//! # Earnings Calculator Backend
//!
//! Serves the earnings calculation over HTTP and hosts the built frontend.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (earnings calculator)
//! ```
//!
//! There is no storage layer: every request is answered from its query
//! string alone.

pub mod config;
pub mod domain;
pub mod io;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::domain::EarningsCalculatorService;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "earnings_calculator_backend=info";

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub earnings_calculator: EarningsCalculatorService,
}

/// Install the global tracing subscriber
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    info!("Setting up domain model");
    let earnings_calculator = EarningsCalculatorService::new();
    info!(
        "Calculator constants: {:?}",
        earnings_calculator.get_config()
    );

    AppState {
        earnings_calculator,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/calculateEarnings", get(io::calculate_earnings))
        .route("/logs", post(io::log_message));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state)
}
