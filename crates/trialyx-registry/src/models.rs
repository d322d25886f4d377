//! Wire-level data model. Serde renames carry the Spanish v1 JSON keys;
//! field names stay English in code.

use serde::{Deserialize, Serialize};

/// Derived status for every feed entry. No real signal is extracted.
pub const STATUS_ONGOING: &str = "En curso";
/// Sentinel for an underivable phase or location.
pub const UNKNOWN: &str = "Desconocida";
/// Sentinel for a scalar detail field absent from the source record.
pub const NOT_AVAILABLE: &str = "No disponible";
/// Sentinel identifier when a feed entry carries no link.
pub const MISSING_ID: &str = "N/A";

/// One raw entry of the registry's RSS feed. Title and link pass through
/// untouched; everything else is derived later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
}

/// One search result; lifetime is a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSummary {
    #[serde(rename = "identificador")]
    pub identifier: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fase")]
    pub phase: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
}

/// Full per-trial record. Scalar fields default to [`NOT_AVAILABLE`] when
/// the source omits them; list fields collapse to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialDetail {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "resumen")]
    pub summary: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fase")]
    pub phase: String,
    #[serde(rename = "tipo_estudio")]
    pub study_type: String,
    #[serde(rename = "patrocinador")]
    pub sponsor: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: String,
    #[serde(rename = "condiciones")]
    pub conditions: Vec<String>,
    #[serde(rename = "intervenciones")]
    pub interventions: Vec<String>,
    #[serde(rename = "ubicaciones")]
    pub locations: Vec<String>,
    #[serde(rename = "criterios")]
    pub eligibility_criteria: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_with_spanish_keys() {
        let t = TrialSummary {
            identifier: "NCT0001".into(),
            title: "Ensayo".into(),
            status: STATUS_ONGOING.into(),
            phase: "3".into(),
            location: UNKNOWN.into(),
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["identificador"], "NCT0001");
        assert_eq!(json["estado"], "En curso");
        assert_eq!(json["ubicacion"], "Desconocida");
    }
}
