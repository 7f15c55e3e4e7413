//! CSV download handler

use std::sync::Arc;

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use normviz::export::{EXPORT_FILENAME, EXPORT_MIME, to_csv};
use normviz::params::Inputs;
use normviz::sample::{Sample, fresh_seed};
use tracing::debug;

use crate::AppState;
use crate::error::Result;

/// GET /download - the sample for the given parameters and seed as CSV
pub async fn csv(
    State(state): State<Arc<AppState>>,
    inputs: std::result::Result<Query<Inputs>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let interaction = super::interaction(&state, inputs)?;
    let seed = interaction.seed.unwrap_or_else(fresh_seed);

    let sample = Sample::seeded(&interaction.params, seed)?;
    let body = to_csv(sample.values());
    debug!(seed, n = sample.len(), bytes = body.len(), "csv export");

    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
