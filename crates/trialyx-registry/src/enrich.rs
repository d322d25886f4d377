//! Attribute enrichment for feed entries.
//!
//! The heuristics here are the pinned v1 behavior: a coarse title
//! substring check, not a classifier. Better extraction plugs in behind
//! [`TrialEnricher`] without touching the fetch/filter pipeline.

use crate::models::{STATUS_ONGOING, UNKNOWN};

/// Derives coarse per-trial attributes from a raw feed title.
pub trait TrialEnricher: Send + Sync {
    fn phase(&self, title: &str) -> String;
    fn status(&self, title: &str) -> String;
    fn location(&self, title: &str) -> String;
}

/// The v1 heuristics: phase "3" iff the title mentions "phase 3" in any
/// case; status and location are constants, no signal is extracted.
pub struct TitleHeuristics;

impl TrialEnricher for TitleHeuristics {
    fn phase(&self, title: &str) -> String {
        if title.to_lowercase().contains("phase 3") {
            "3".to_string()
        } else {
            UNKNOWN.to_string()
        }
    }

    fn status(&self, _title: &str) -> String {
        STATUS_ONGOING.to_string()
    }

    fn location(&self, _title: &str) -> String {
        UNKNOWN.to_string()
    }
}

/// Phase markers recognised by the molecule summary, checked independently
/// so one title can contribute several.
const PHASE_MARKERS: [(&str, &str); 3] = [
    ("phase 1", "Fase 1"),
    ("phase 2", "Fase 2"),
    ("phase 3", "Fase 3"),
];

/// Every phase label whose marker appears in the title, in marker order.
pub fn detect_phases(title: &str) -> Vec<&'static str> {
    let lower = title.to_lowercase();
    PHASE_MARKERS
        .iter()
        .filter(|(marker, _)| lower.contains(marker))
        .map(|(_, label)| *label)
        .collect()
}
