//! GET /analisis_endpoint, /pico_sugerido, /tendencias_investigacion —
//! static/simulated reference payloads.

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use trialyx_registry::reference::{common_endpoints, pico_scheme, research_trends};

use crate::handlers::error_body;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalisisParams {
    pub patologia: String,
    pub fase: Option<String>,
}

pub async fn analisis_endpoint(
    State(_state): State<SharedState>,
    Query(params): Query<AnalisisParams>,
) -> Json<Value> {
    let endpoints = common_endpoints(&params.patologia);
    Json(json!({
        "patologia": params.patologia,
        "fase": params.fase,
        "endpoints_comunes": endpoints,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PicoParams {
    pub molecula: String,
    pub patologia: String,
    pub formato: Option<String>,
}

pub async fn pico_sugerido(
    State(_state): State<SharedState>,
    Query(params): Query<PicoParams>,
) -> Response {
    let pico = pico_scheme(&params.molecula, &params.patologia);

    if params.formato.as_deref() == Some("pdf") {
        return match trialyx_export::pico_pdf(&params.molecula, &params.patologia, &pico) {
            Ok(bytes) => (
                [
                    (CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        CONTENT_DISPOSITION,
                        format!("attachment;filename=pico_{}.pdf", params.molecula),
                    ),
                ],
                bytes,
            )
                .into_response(),
            Err(e) => error_body(&e).into_response(),
        };
    }

    Json(pico).into_response()
}

#[derive(Debug, Deserialize)]
pub struct TendenciasParams {
    pub patologia: String,
}

pub async fn tendencias_investigacion(
    State(_state): State<SharedState>,
    Query(params): Query<TendenciasParams>,
) -> Json<Value> {
    match research_trends(&params.patologia) {
        Some(trends) => {
            // {"patologia": ..., **trends}
            let mut body = serde_json::Map::new();
            body.insert("patologia".to_string(), params.patologia.clone().into());
            if let Ok(Value::Object(fields)) = serde_json::to_value(&trends) {
                body.extend(fields);
            }
            Json(Value::Object(body))
        }
        None => Json(json!({
            "error": format!("No hay datos simulados para {}", params.patologia),
            "kind": "validation",
        })),
    }
}
