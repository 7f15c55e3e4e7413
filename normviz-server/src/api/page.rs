//! Interactive page handler

use std::sync::Arc;

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use normviz::params::Inputs;
use normviz::report::Report;
use tracing::info;

use crate::AppState;
use crate::error::{Result, ServerError};
use crate::page;

/// GET / - compute and render one report
pub async fn index(
    State(state): State<Arc<AppState>>,
    inputs: std::result::Result<Query<Inputs>, QueryRejection>,
) -> Result<Html<String>> {
    let interaction = super::interaction(&state, inputs)?;
    let theme = state.config.theme;
    let size = state.config.plot_size();

    // Sampling and SVG drawing are CPU-bound
    let html = tokio::task::spawn_blocking(move || -> Result<String> {
        let report = Report::compute(&interaction, theme)?;
        let svgs = report.render(size)?;
        info!(
            mean = report.params.mean,
            std_dev = report.params.std_dev,
            samples = report.params.sample_count,
            seed = report.seed,
            "rendered page"
        );
        Ok(page::render(&report, &svgs, theme))
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))??;

    Ok(Html(html))
}
