//! Client-side post-filters for search results.
//!
//! All three are optional and AND-combined. The country filter matches
//! against the derived location, which the v1 heuristics always set to the
//! unknown sentinel — so any non-empty country filter empties the result
//! set. That dead-end is a pinned regression property, not a feature.

use crate::models::TrialSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Case-insensitive substring containment in the derived status.
    pub status: Option<String>,
    /// Case-insensitive exact match against the derived phase.
    pub phase: Option<String>,
    /// Case-insensitive substring containment in the derived location.
    pub country: Option<String>,
}

impl SearchFilters {
    pub fn retains(&self, trial: &TrialSummary) -> bool {
        if let Some(status) = &self.status {
            if !trial.status.to_lowercase().contains(&status.to_lowercase()) {
                return false;
            }
        }
        if let Some(phase) = &self.phase {
            if phase.to_lowercase() != trial.phase.to_lowercase() {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !trial.location.to_lowercase().contains(&country.to_lowercase()) {
                return false;
            }
        }
        true
    }
}
