//! Request handlers, one module per endpoint family.
//!
//! Every failure is flattened at this boundary into HTTP 200 with a
//! uniform `{"error", "kind"}` body, preserving the v1 wire contract;
//! `kind` is the added discriminator.

pub mod analytics;
pub mod detail;
pub mod export;
pub mod reference;
pub mod search;
pub mod system;

use axum::Json;
use serde_json::json;
use trialyx_common::RegistryError;

/// The uniform error body.
pub(crate) fn error_body(err: &RegistryError) -> Json<serde_json::Value> {
    Json(json!({ "error": err.to_string(), "kind": err.kind() }))
}

/// Query-string params arrive as `Some("")` when present but empty; the
/// v1 semantics treat those as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
