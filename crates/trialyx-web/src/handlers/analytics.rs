//! GET /comparar_moleculas and /resumen_molecula.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use trialyx_registry::analytics::{compare_molecules, summarize_molecule};

use crate::handlers::error_body;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct CompararParams {
    pub molecula1: String,
    pub molecula2: String,
    pub patologia: String,
}

/// Each side is a typed `Result` internally; this is the single place the
/// v1 flattening (failure → 0) happens, and the swallowed error is logged.
pub async fn comparar_moleculas(
    State(state): State<SharedState>,
    Query(params): Query<CompararParams>,
) -> Json<Value> {
    let (a, b) = compare_molecules(
        state.source.as_ref(),
        &params.molecula1,
        &params.molecula2,
        &params.patologia,
    )
    .await;

    let mut body = serde_json::Map::new();
    body.insert(a.molecule.clone(), a.count_or_zero().into());
    body.insert(b.molecule.clone(), b.count_or_zero().into());
    body.insert("patologia".to_string(), params.patologia.into());
    Json(Value::Object(body))
}

#[derive(Debug, Deserialize)]
pub struct ResumenParams {
    pub molecula: String,
    pub patologia: String,
}

pub async fn resumen_molecula(
    State(state): State<SharedState>,
    Query(params): Query<ResumenParams>,
) -> Response {
    match summarize_molecule(state.source.as_ref(), &params.molecula, &params.patologia).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_body(&e).into_response(),
    }
}
