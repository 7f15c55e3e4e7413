//! JSON report API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use normviz::params::Inputs;
use normviz::report::Report;
use serde_json::Value;

use crate::AppState;
use crate::error::{Result, ServerError};

/// Build the report API router
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/report", get(report))
}

/// GET /api/v1/report - numbers and plot model behind the page
async fn report(
    State(state): State<Arc<AppState>>,
    inputs: std::result::Result<Query<Inputs>, QueryRejection>,
) -> Result<Json<Value>> {
    let interaction = super::interaction(&state, inputs)?;
    let theme = state.config.theme;

    let summary = tokio::task::spawn_blocking(move || -> Result<Value> {
        let report = Report::compute(&interaction, theme)?;
        Ok(serde_json::to_value(report.summary())?)
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))??;

    Ok(Json(summary))
}
