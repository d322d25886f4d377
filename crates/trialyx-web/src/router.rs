//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    analytics::{comparar_moleculas, resumen_molecula},
    detail::{criterios_ensayo, ensayo_detalle},
    export::{exportar_ensayos_csv, exportar_ensayos_pdf},
    reference::{analisis_endpoint, pico_sugerido, tendencias_investigacion},
    search::buscar_ensayos,
    system::health,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Live-data endpoints
        .route("/buscar_ensayos", get(buscar_ensayos))
        .route("/ensayo_detalle", get(ensayo_detalle))
        .route("/criterios_ensayo", get(criterios_ensayo))
        .route("/comparar_moleculas", get(comparar_moleculas))
        .route("/resumen_molecula", get(resumen_molecula))

        // Static/simulated endpoints
        .route("/analisis_endpoint", get(analisis_endpoint))
        .route("/pico_sugerido", get(pico_sugerido))
        .route("/tendencias_investigacion", get(tendencias_investigacion))

        // Exports
        .route("/exportar_ensayos_pdf", get(exportar_ensayos_pdf))
        .route("/exportar_ensayos_csv", get(exportar_ensayos_csv))

        // Operational
        .route("/health", get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
