//! Cross-trial analytics: molecule comparison counts and the clinical
//! molecule summary.

use serde::Serialize;
use tracing::warn;
use trialyx_common::Result;

use crate::enrich::detect_phases;
use crate::source::TrialDataSource;

pub const SUMMARY_NOTES: &str = "Resumen automático. Requiere evaluación experta.";
pub const RECOMMEND_FAVORABLE: &str = "Revisión favorable";
pub const RECOMMEND_PRELIMINARY: &str = "Revisión preliminar";

/// Raw item count for one molecule/pathology pair.
pub async fn count_trials(
    source: &dyn TrialDataSource,
    molecule: &str,
    pathology: &str,
) -> Result<usize> {
    Ok(source.search_feed(molecule, pathology).await?.len())
}

/// One side of a molecule comparison. The count stays a `Result` so the
/// caller decides whether partial failure is surfaced or flattened.
pub struct ComparisonSide {
    pub molecule: String,
    pub count: Result<usize>,
}

impl ComparisonSide {
    /// v1 wire behavior: a failed side reports zero trials. The swallowed
    /// error is logged so it stays observable.
    pub fn count_or_zero(&self) -> usize {
        match &self.count {
            Ok(n) => *n,
            Err(e) => {
                warn!(molecule = %self.molecule, error = %e, "feed count failed, reporting 0");
                0
            }
        }
    }
}

/// Run the same fetch-and-count step once per molecule, same pathology.
pub async fn compare_molecules(
    source: &dyn TrialDataSource,
    molecule_a: &str,
    molecule_b: &str,
    pathology: &str,
) -> (ComparisonSide, ComparisonSide) {
    let a = ComparisonSide {
        molecule: molecule_a.to_string(),
        count: count_trials(source, molecule_a, pathology).await,
    };
    let b = ComparisonSide {
        molecule: molecule_b.to_string(),
        count: count_trials(source, molecule_b, pathology).await,
    };
    (a, b)
}

/// Automatic clinical summary for one molecule against one pathology.
#[derive(Debug, Clone, Serialize)]
pub struct MoleculeSummary {
    #[serde(rename = "molécula")]
    pub molecule: String,
    #[serde(rename = "patología")]
    pub pathology: String,
    #[serde(rename = "ensayos_encontrados")]
    pub trials_found: usize,
    #[serde(rename = "fases_detectadas")]
    pub phases: Vec<String>,
    #[serde(rename = "centros_participantes_estimados")]
    pub estimated_centers: String,
    #[serde(rename = "recomendación")]
    pub recommendation: String,
    #[serde(rename = "observaciones")]
    pub notes: String,
}

/// One fetch; per item the three phase markers are checked independently,
/// the deduplicated set drives the recommendation, and the estimated
/// participating-center count is `min(5 + n, 50)`.
pub async fn summarize_molecule(
    source: &dyn TrialDataSource,
    molecule: &str,
    pathology: &str,
) -> Result<MoleculeSummary> {
    let items = source.search_feed(molecule, pathology).await?;
    let count = items.len();

    let mut phases: Vec<&'static str> = Vec::new();
    for item in &items {
        for label in detect_phases(&item.title) {
            if !phases.contains(&label) {
                phases.push(label);
            }
        }
    }

    let recommendation = if phases.contains(&"Fase 3") {
        RECOMMEND_FAVORABLE
    } else {
        RECOMMEND_PRELIMINARY
    };

    let phases = if phases.is_empty() {
        vec!["No especificadas".to_string()]
    } else {
        phases.into_iter().map(String::from).collect()
    };

    Ok(MoleculeSummary {
        molecule: molecule.to_string(),
        pathology: pathology.to_string(),
        trials_found: count,
        phases,
        estimated_centers: format!("{} (estimación)", estimated_centers(count)),
        recommendation: recommendation.to_string(),
        notes: SUMMARY_NOTES.to_string(),
    })
}

fn estimated_centers(trial_count: usize) -> usize {
    (5 + trial_count).min(50)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use trialyx_common::RegistryError;

    use crate::models::{FeedItem, TrialDetail};

    /// Fails for one molecule, serves a fixed item list for the rest.
    struct HalfBrokenSource {
        failing_molecule: &'static str,
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl TrialDataSource for HalfBrokenSource {
        async fn search_feed(&self, molecule: &str, _p: &str) -> Result<Vec<FeedItem>> {
            if molecule == self.failing_molecule {
                return Err(RegistryError::Upstream("connection refused".into()));
            }
            Ok(self
                .titles
                .iter()
                .map(|t| FeedItem { title: t.to_string(), link: String::new() })
                .collect())
        }

        async fn fetch_detail(&self, _id: &str) -> Result<TrialDetail> {
            unreachable!("analytics never fetch detail records")
        }
    }

    #[tokio::test]
    async fn failed_side_flattens_to_zero_and_other_side_counts() {
        let source = HalfBrokenSource {
            failing_molecule: "A",
            titles: vec!["t1", "t2", "t3"],
        };
        let (a, b) = compare_molecules(&source, "A", "B", "cond").await;
        assert!(a.count.is_err());
        assert_eq!(a.count_or_zero(), 0);
        assert_eq!(b.count_or_zero(), 3);
    }

    #[test]
    fn estimated_centers_is_min_of_five_plus_n_and_fifty() {
        assert_eq!(estimated_centers(0), 5);
        assert_eq!(estimated_centers(10), 15);
        assert_eq!(estimated_centers(45), 50);
        assert_eq!(estimated_centers(50), 50);
        assert_eq!(estimated_centers(200), 50);
    }

    #[tokio::test]
    async fn summary_deduplicates_phases_and_recommends_favorable_on_phase_three() {
        let source = HalfBrokenSource {
            failing_molecule: "never",
            titles: vec![
                "A Phase 1/Phase 2 study",
                "Another Phase 2 study",
                "Pivotal PHASE 3 trial",
            ],
        };
        let s = summarize_molecule(&source, "rux", "vitiligo").await.unwrap();
        assert_eq!(s.trials_found, 3);
        assert_eq!(s.phases, vec!["Fase 1", "Fase 2", "Fase 3"]);
        assert_eq!(s.recommendation, RECOMMEND_FAVORABLE);
        assert_eq!(s.estimated_centers, "8 (estimación)");
        assert_eq!(s.notes, SUMMARY_NOTES);
    }

    #[tokio::test]
    async fn summary_without_phase_markers_is_preliminary() {
        let source = HalfBrokenSource {
            failing_molecule: "never",
            titles: vec!["Observational registry"],
        };
        let s = summarize_molecule(&source, "rux", "vitiligo").await.unwrap();
        assert_eq!(s.phases, vec!["No especificadas"]);
        assert_eq!(s.recommendation, RECOMMEND_PRELIMINARY);
    }

    #[tokio::test]
    async fn summary_propagates_fetch_failure() {
        let source = HalfBrokenSource { failing_molecule: "A", titles: vec![] };
        let err = summarize_molecule(&source, "A", "vitiligo").await.unwrap_err();
        assert_eq!(err.kind(), "upstream");
    }

    #[test]
    fn summary_serializes_with_accented_keys() {
        let s = MoleculeSummary {
            molecule: "rux".into(),
            pathology: "vitiligo".into(),
            trials_found: 2,
            phases: vec!["Fase 3".into()],
            estimated_centers: "7 (estimación)".into(),
            recommendation: RECOMMEND_FAVORABLE.into(),
            notes: SUMMARY_NOTES.into(),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["molécula"], "rux");
        assert_eq!(json["ensayos_encontrados"], 2);
        assert_eq!(json["recomendación"], "Revisión favorable");
    }
}
