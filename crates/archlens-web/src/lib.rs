//! ArchLens Web Server
//!
//! Axum-based REST API for analyses, blueprints and the dashboard.

pub mod error;
pub mod routes;
pub mod state;

use archlens_core::SharedAnalysisService;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Analyses
        .route("/analysis", get(routes::analysis::missing_analysis_id))
        .route("/analysis/", get(routes::analysis::missing_analysis_id))
        .route("/analysis/{id}", get(routes::analysis::get_analysis))
        // Blueprints
        .route("/blueprints/{id}/rate", post(routes::blueprints::rate_blueprint))
        // Dashboard
        .route("/dashboard", get(routes::dashboard::get_stats))
        // Projects
        .route("/projects/{id}", delete(routes::projects::delete_project));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(service: SharedAnalysisService, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(service);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
