//! Normal distribution explorer server
//!
//! Serves the interactive page, the CSV download and a JSON report for the
//! `normviz` pipeline.

mod api;
pub mod config;
pub mod error;
mod page;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::page::index))
        .route("/download", get(api::download::csv))
        .route("/health", get(api::health))
        .nest("/api/v1", api::report::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
