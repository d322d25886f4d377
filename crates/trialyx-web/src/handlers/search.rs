//! GET /buscar_ensayos — feed search with optional post-filters.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use trialyx_registry::filter::SearchFilters;
use trialyx_registry::search::{render_text_summary, search_trials};
use trialyx_registry::TrialQuery;

use crate::handlers::{error_body, non_empty};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct BuscarParams {
    pub molecula: Option<String>,
    pub patologia: Option<String>,
    pub estado: Option<String>,
    pub fase: Option<String>,
    pub pais: Option<String>,
    pub formato: Option<String>,
}

pub async fn buscar_ensayos(
    State(state): State<SharedState>,
    Query(params): Query<BuscarParams>,
) -> Response {
    let query = TrialQuery {
        molecule: non_empty(params.molecula),
        pathology: non_empty(params.patologia),
        filters: SearchFilters {
            status: non_empty(params.estado),
            phase: non_empty(params.fase),
            country: non_empty(params.pais),
        },
    };

    match search_trials(state.source.as_ref(), state.enricher.as_ref(), &query).await {
        Ok(trials) => match params.formato.as_deref() {
            Some("texto") | Some("text") => render_text_summary(&trials).into_response(),
            _ => Json(json!({ "ensayos": trials })).into_response(),
        },
        Err(e) => error_body(&e).into_response(),
    }
}
