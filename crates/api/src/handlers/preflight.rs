//! Handlers for preflight dispatch.
//!
//! The polling process lists pending preflight URLs; the UI asks for the
//! command an operator can paste to run one by hand.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use kotsadm_core::types::Sequence;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing pending preflights.
#[derive(Debug, Deserialize)]
pub struct PendingParams {
    #[serde(default)]
    pub incluster: bool,
}

/// Response body for the operator command.
#[derive(Debug, Serialize)]
pub struct PreflightCommand {
    pub command: String,
}

/// GET /preflights/pending
pub async fn list_pending(
    State(state): State<AppState>,
    Query(params): Query<PendingParams>,
) -> AppResult<impl IntoResponse> {
    let data = state
        .preflights
        .get_pending_preflight_params(&state.config.endpoints, params.incluster)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /preflights/command/{app_slug}/{cluster_slug}/{sequence}
pub async fn get_command(
    State(state): State<AppState>,
    Path((app_slug, cluster_slug, sequence)): Path<(String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let sequence = parse_sequence(&sequence)?;

    let command = state.preflights.get_preflight_command(
        &state.config.endpoints,
        &app_slug,
        &cluster_slug,
        sequence,
    )?;
    Ok(Json(DataResponse {
        data: PreflightCommand { command },
    }))
}

/// Parse a path segment as a non-negative deployment sequence.
fn parse_sequence(raw: &str) -> Result<Sequence, AppError> {
    let sequence: Sequence = raw.parse().map_err(|_| {
        AppError::BadRequest(format!("sequence must be an integer, got '{raw}'"))
    })?;
    if sequence < 0 {
        return Err(AppError::BadRequest(format!(
            "sequence must be non-negative, got {sequence}"
        )));
    }
    Ok(sequence)
}
