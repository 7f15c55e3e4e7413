//! HTTP handlers

pub mod download;
pub mod page;
pub mod report;

use axum::extract::{Query, rejection::QueryRejection};
use normviz::params::{Inputs, Interaction};

use crate::AppState;
use crate::error::ServerError;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// Resolve query-string inputs, filling the seed from config when the
/// request does not pin one.
fn interaction(
    state: &AppState,
    inputs: Result<Query<Inputs>, QueryRejection>,
) -> Result<Interaction, ServerError> {
    let Query(inputs) = inputs.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let mut interaction = inputs.resolve();
    interaction.seed = interaction.seed.or(state.config.seed);
    Ok(interaction)
}
