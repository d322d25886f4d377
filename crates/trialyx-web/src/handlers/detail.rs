//! GET /ensayo_detalle and /criterios_ensayo — per-trial detail records.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::handlers::error_body;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct DetalleParams {
    pub id: String,
}

pub async fn ensayo_detalle(
    State(state): State<SharedState>,
    Query(params): Query<DetalleParams>,
) -> Response {
    match state.source.fetch_detail(&params.id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => Json(json!({
            "error": format!("No se pudo obtener el detalle del ensayo: {}", e),
            "kind": e.kind(),
        }))
        .into_response(),
    }
}

/// Criteria-only variant: same fetch, narrower extraction.
pub async fn criterios_ensayo(
    State(state): State<SharedState>,
    Query(params): Query<DetalleParams>,
) -> Response {
    match state.source.fetch_detail(&params.id).await {
        Ok(detail) => Json(json!({
            "id": detail.id,
            "criterios_inclusion_exclusion": detail.eligibility_criteria,
        }))
        .into_response(),
        Err(e) => error_body(&e).into_response(),
    }
}
