//! The `buscar_ensayos` pipeline: validate, fetch, enrich, filter, render.

use trialyx_common::{RegistryError, Result};

use crate::enrich::TrialEnricher;
use crate::feed::trial_id_from_link;
use crate::filter::SearchFilters;
use crate::models::{FeedItem, TrialSummary};
use crate::source::TrialDataSource;

/// Verbatim v1 validation message.
pub const MISSING_TERMS_MSG: &str = "Debe especificar al menos 'molecula' o 'patologia'";

/// Plain-text rendering caps the list at this many entries; the header
/// still states the true total.
pub const TEXT_RENDER_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct TrialQuery {
    pub molecule: Option<String>,
    pub pathology: Option<String>,
    pub filters: SearchFilters,
}

impl TrialQuery {
    /// At least one search term must be present; enforced before any fetch.
    pub fn validate(&self) -> Result<()> {
        if self.molecule.is_none() && self.pathology.is_none() {
            return Err(RegistryError::Validation(MISSING_TERMS_MSG.to_string()));
        }
        Ok(())
    }
}

/// Run a feed search end to end. Validation failures never reach the
/// data source.
pub async fn search_trials(
    source: &dyn TrialDataSource,
    enricher: &dyn TrialEnricher,
    query: &TrialQuery,
) -> Result<Vec<TrialSummary>> {
    query.validate()?;

    let items = source
        .search_feed(
            query.molecule.as_deref().unwrap_or(""),
            query.pathology.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(items
        .iter()
        .map(|item| summarize_item(item, enricher))
        .filter(|trial| query.filters.retains(trial))
        .collect())
}

/// Derive one summary from one raw feed item.
pub fn summarize_item(item: &FeedItem, enricher: &dyn TrialEnricher) -> TrialSummary {
    TrialSummary {
        identifier: trial_id_from_link(&item.link),
        title: item.title.clone(),
        status: enricher.status(&item.title),
        phase: enricher.phase(&item.title),
        location: enricher.location(&item.title),
    }
}

/// Numbered plain-text list, at most [`TEXT_RENDER_LIMIT`] entries, with a
/// count-of-all-results header.
pub fn render_text_summary(trials: &[TrialSummary]) -> String {
    let mut out = format!("Se encontraron {} ensayos clínicos:\n\n", trials.len());
    for (i, trial) in trials.iter().take(TEXT_RENDER_LIMIT).enumerate() {
        out.push_str(&format!("{}. {} (ID: {})\n", i + 1, trial.title, trial.identifier));
    }
    out
}
