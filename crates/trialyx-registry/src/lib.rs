//! trialyx-registry — ClinicalTrials.gov feed and detail extraction.
//!
//! The pipeline is deliberately thin: fetch, shallow XML extraction,
//! optional client-side filtering. Field derivation (phase/status/location)
//! is a coarse v1 heuristic behind the [`enrich::TrialEnricher`] seam, not
//! a classifier; its results are pinned by tests.

pub mod analytics;
pub mod detail;
pub mod enrich;
pub mod feed;
pub mod filter;
pub mod models;
pub mod reference;
pub mod search;
pub mod source;

pub use enrich::{TitleHeuristics, TrialEnricher};
pub use models::{FeedItem, TrialDetail, TrialSummary};
pub use search::TrialQuery;
pub use source::{LiveRegistry, MockRegistry, TrialDataSource};
