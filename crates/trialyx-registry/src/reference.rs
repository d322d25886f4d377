//! Static reference payloads: common endpoints per pathology, research
//! trend snapshots, and the PICO question template. Simulated data, not
//! derived from the registry.

use serde::Serialize;
use std::collections::BTreeMap;

const COMMON_ENDPOINTS: [(&str, [&str; 2]); 3] = [
    ("cáncer", ["supervivencia global", "respuesta objetiva"]),
    ("diabetes", ["HbA1c", "peso corporal"]),
    ("vitiligo", ["re-pigmentación", "mejora de VASI"]),
];

/// Common endpoints for a pathology; unknown pathologies report
/// "No especificados".
pub fn common_endpoints(pathology: &str) -> Vec<String> {
    let key = pathology.to_lowercase();
    COMMON_ENDPOINTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, endpoints)| endpoints.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| vec!["No especificados".to_string()])
}

/// Four-field clinical question template. Pure formatting.
#[derive(Debug, Clone, Serialize)]
pub struct PicoScheme {
    #[serde(rename = "Paciente")]
    pub patient: String,
    #[serde(rename = "Intervención")]
    pub intervention: String,
    #[serde(rename = "Comparador")]
    pub comparator: String,
    #[serde(rename = "Outcome")]
    pub outcome: String,
}

pub fn pico_scheme(molecule: &str, pathology: &str) -> PicoScheme {
    PicoScheme {
        patient: format!("Pacientes con {}", pathology),
        intervention: molecule.to_string(),
        comparator: "Placebo o tratamiento estándar".to_string(),
        outcome: "Mejora clínica significativa".to_string(),
    }
}

impl PicoScheme {
    /// Ordered key-value rows for tabular renderings (PDF).
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Paciente", self.patient.as_str()),
            ("Intervención", self.intervention.as_str()),
            ("Comparador", self.comparator.as_str()),
            ("Outcome", self.outcome.as_str()),
        ]
    }
}

/// Simulated research-trend snapshot for one pathology.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchTrends {
    #[serde(rename = "moleculas_en_alza")]
    pub rising_molecules: Vec<String>,
    #[serde(rename = "endpoints_frecuentes")]
    pub frequent_endpoints: Vec<String>,
    #[serde(rename = "zonas_con_mayor_actividad")]
    pub most_active_regions: Vec<String>,
    #[serde(rename = "nuevos_estudios_por_año")]
    pub new_studies_per_year: BTreeMap<String, u32>,
}

/// Trend data exists only for the simulated pathologies; `None` maps to
/// the "No hay datos simulados" error at the boundary.
pub fn research_trends(pathology: &str) -> Option<ResearchTrends> {
    fn years(counts: [(u32, u32); 4]) -> BTreeMap<String, u32> {
        counts.iter().map(|(y, n)| (y.to_string(), *n)).collect()
    }
    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    match pathology.to_lowercase().as_str() {
        "vitiligo" => Some(ResearchTrends {
            rising_molecules: strings(&["ruxolitinib", "tofacitinib", "baricitinib"]),
            frequent_endpoints: strings(&[
                "mejora del VASI",
                "calidad de vida",
                "re-pigmentación facial",
            ]),
            most_active_regions: strings(&["EEUU", "India", "España"]),
            new_studies_per_year: years([(2021, 6), (2022, 10), (2023, 14), (2024, 18)]),
        }),
        "diabetes" => Some(ResearchTrends {
            rising_molecules: strings(&["semaglutida", "tirzepatida", "dapagliflozina"]),
            frequent_endpoints: strings(&["HbA1c", "peso corporal", "riesgo CV"]),
            most_active_regions: strings(&["EEUU", "México", "Brasil"]),
            new_studies_per_year: years([(2021, 20), (2022, 25), (2023, 30), (2024, 34)]),
        }),
        _ => None,
    }
}
