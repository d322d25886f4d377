//! Trial data sources.
//!
//! One capability trait, two implementations selected at process start:
//! [`LiveRegistry`] against ClinicalTrials.gov and [`MockRegistry`] serving
//! simulated payloads. Handlers never know which one they hold.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use trialyx_common::{RegistryHttpClient, Result};

use crate::detail::{extract_detail, DetailDoc};
use crate::feed::parse_feed;
use crate::models::{FeedItem, TrialDetail};

pub const DEFAULT_BASE_URL: &str = "https://clinicaltrials.gov";

#[async_trait]
pub trait TrialDataSource: Send + Sync {
    /// Fetch raw feed items for a molecule/pathology term pair. Terms pass
    /// through with only transport-level percent-encoding.
    async fn search_feed(&self, molecule: &str, pathology: &str) -> Result<Vec<FeedItem>>;

    /// Fetch and extract the full detail record for one trial identifier.
    async fn fetch_detail(&self, id: &str) -> Result<TrialDetail>;
}

/// Live client for the registry's two URL shapes: feed search by
/// term+condition and per-identifier detail XML.
pub struct LiveRegistry {
    client: RegistryHttpClient,
    base_url: String,
}

impl LiveRegistry {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        let mut client = RegistryHttpClient::new(timeout)?;
        if let Ok(parsed) = url::Url::parse(&base_url) {
            if let Some(host) = parsed.host_str() {
                client.allow_domain(host);
            }
        }
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl TrialDataSource for LiveRegistry {
    #[instrument(skip(self))]
    async fn search_feed(&self, molecule: &str, pathology: &str) -> Result<Vec<FeedItem>> {
        let url = format!("{}/ct2/results/rss.xml", self.base_url);
        let body = self
            .client
            .get(&url)?
            .query(&[("term", molecule), ("cond", pathology)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let items = parse_feed(&body)?;
        debug!(n = items.len(), "registry feed items retrieved");
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn fetch_detail(&self, id: &str) -> Result<TrialDetail> {
        let url = format!("{}/ct2/show/{}", self.base_url, id);
        let body = self
            .client
            .get(&url)?
            .query(&[("displayxml", "true")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let doc = DetailDoc::parse(&body)?;
        Ok(extract_detail(id, &doc))
    }
}

/// Simulated source: five phase-3 feed items and one canned detail record,
/// no network. Serves the same route set as the live source.
pub struct MockRegistry;

#[async_trait]
impl TrialDataSource for MockRegistry {
    async fn search_feed(&self, _molecule: &str, _pathology: &str) -> Result<Vec<FeedItem>> {
        Ok((1..=5)
            .map(|i| FeedItem {
                title: format!("Ensayo simulado {} (Phase 3)", i),
                link: format!("{}/ct2/show/NCT000{}", DEFAULT_BASE_URL, i),
            })
            .collect())
    }

    async fn fetch_detail(&self, id: &str) -> Result<TrialDetail> {
        Ok(TrialDetail {
            id: id.to_string(),
            title: "Ensayo simulado de referencia".to_string(),
            summary: "Estudio simulado para entornos sin acceso al registro.".to_string(),
            status: "Recruiting".to_string(),
            phase: "Phase 3".to_string(),
            study_type: "Interventional".to_string(),
            sponsor: "Trialyx".to_string(),
            start_date: "January 2024".to_string(),
            conditions: vec!["Vitiligo".to_string()],
            interventions: vec!["Ruxolitinib".to_string()],
            locations: vec!["Madrid".to_string()],
            eligibility_criteria: "Inclusion: adultos mayores de 18 años.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_serves_five_simulated_trials() {
        let items = MockRegistry.search_feed("x", "y").await.unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].title, "Ensayo simulado 1 (Phase 3)");
        assert!(items[4].link.ends_with("NCT0005"));
    }

    #[tokio::test]
    async fn mock_detail_echoes_the_identifier() {
        let d = MockRegistry.fetch_detail("NCT0003").await.unwrap();
        assert_eq!(d.id, "NCT0003");
        assert_eq!(d.phase, "Phase 3");
        assert!(!d.conditions.is_empty());
    }

    #[test]
    fn live_registry_builds_for_custom_base_url() {
        let live = LiveRegistry::new("http://127.0.0.1:9090", Duration::from_secs(1));
        assert!(live.is_ok());
    }
}
