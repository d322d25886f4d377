//! GET /exportar_ensayos_pdf and /exportar_ensayos_csv — attachment
//! byte streams over the active data source.

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use trialyx_registry::search::search_trials;
use trialyx_registry::TrialQuery;

use crate::handlers::{error_body, non_empty};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub molecula: String,
    pub patologia: Option<String>,
}

pub async fn exportar_ensayos_pdf(
    State(_state): State<SharedState>,
    Query(params): Query<ExportParams>,
) -> Response {
    match trialyx_export::trials_export_pdf(&params.molecula, params.patologia.as_deref()) {
        Ok(bytes) => attachment(
            "application/pdf",
            format!("ensayos_{}.pdf", params.molecula),
            bytes,
        ),
        Err(e) => error_body(&e).into_response(),
    }
}

pub async fn exportar_ensayos_csv(
    State(state): State<SharedState>,
    Query(params): Query<ExportParams>,
) -> Response {
    let query = TrialQuery {
        molecule: Some(params.molecula.clone()),
        pathology: non_empty(params.patologia.clone()),
        ..Default::default()
    };

    let trials = match search_trials(state.source.as_ref(), state.enricher.as_ref(), &query).await {
        Ok(trials) => trials,
        Err(e) => return error_body(&e).into_response(),
    };

    match trialyx_export::trials_csv(&trials) {
        Ok(bytes) => attachment(
            "text/csv",
            format!("ensayos_{}.csv", params.molecula),
            bytes,
        ),
        Err(e) => error_body(&e).into_response(),
    }
}

fn attachment(content_type: &str, filename: String, bytes: Vec<u8>) -> Response {
    (
        [
            (CONTENT_TYPE, content_type.to_string()),
            (CONTENT_DISPOSITION, format!("attachment;filename={}", filename)),
        ],
        bytes,
    )
        .into_response()
}
