//! Detail record extraction.
//!
//! The registry's per-trial XML is flattened into (element-path, text)
//! pairs; fields are then looked up independently by path suffix with a
//! `"No disponible"` default, so one missing field never disturbs another.

use quick_xml::events::Event;
use quick_xml::Reader;
use trialyx_common::{RegistryError, Result};

use crate::models::{TrialDetail, NOT_AVAILABLE};

/// A parsed detail document: every element that carried direct text,
/// keyed by its slash-joined path from the root.
#[derive(Debug, Clone)]
pub struct DetailDoc {
    entries: Vec<(String, String)>,
}

impl DetailDoc {
    pub fn parse(xml: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Stack of (element name, accumulated direct text).
        let mut stack: Vec<(String, String)> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    stack.push((name, String::new()));
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(top) = stack.last_mut() {
                        let text = e.unescape().unwrap_or_default();
                        if !top.1.is_empty() {
                            top.1.push('\n');
                        }
                        top.1.push_str(text.trim());
                    }
                }
                Ok(Event::End(_)) => {
                    if let Some((name, text)) = stack.pop() {
                        if !text.is_empty() {
                            let mut path: Vec<&str> =
                                stack.iter().map(|(n, _)| n.as_str()).collect();
                            path.push(&name);
                            entries.push((path.join("/"), text));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(RegistryError::Parse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { entries })
    }

    /// First text whose path ends with `suffix` (segment-aligned).
    pub fn find(&self, suffix: &str) -> Option<&str> {
        let tail = format!("/{}", suffix);
        self.entries
            .iter()
            .find(|(path, _)| path.as_str() == suffix || path.ends_with(&tail))
            .map(|(_, text)| text.as_str())
    }

    /// Scalar lookup with the `"No disponible"` sentinel.
    pub fn text_or_sentinel(&self, suffix: &str) -> String {
        self.find(suffix).unwrap_or(NOT_AVAILABLE).to_string()
    }

    /// Every matching text, in document order. Absence is an empty list,
    /// never the sentinel.
    pub fn texts(&self, suffix: &str) -> Vec<String> {
        let tail = format!("/{}", suffix);
        self.entries
            .iter()
            .filter(|(path, _)| path.as_str() == suffix || path.ends_with(&tail))
            .map(|(_, text)| text.clone())
            .collect()
    }
}

/// Assemble the fixed field set, each looked up and defaulted on its own.
/// Title falls back from the official to the brief title before the
/// sentinel applies.
pub fn extract_detail(id: &str, doc: &DetailDoc) -> TrialDetail {
    let title = doc
        .find("official_title")
        .or_else(|| doc.find("brief_title"))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    TrialDetail {
        id: id.to_string(),
        title,
        summary: doc.text_or_sentinel("brief_summary/textblock"),
        status: doc.text_or_sentinel("overall_status"),
        phase: doc.text_or_sentinel("phase"),
        study_type: doc.text_or_sentinel("study_type"),
        sponsor: doc.text_or_sentinel("lead_sponsor/agency"),
        start_date: doc.text_or_sentinel("start_date"),
        conditions: doc.texts("condition"),
        interventions: doc.texts("intervention/intervention_name"),
        locations: doc.texts("location/facility/name"),
        eligibility_criteria: doc.text_or_sentinel("eligibility/criteria/textblock"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_DETAIL: &str = r#"<?xml version="1.0"?>
<clinical_study>
  <brief_title>Ruxolitinib for Vitiligo</brief_title>
  <official_title>A Randomized Phase 3 Trial of Ruxolitinib Cream in Vitiligo</official_title>
  <brief_summary><textblock>Evaluates repigmentation response.</textblock></brief_summary>
  <overall_status>Recruiting</overall_status>
  <phase>Phase 3</phase>
  <study_type>Interventional</study_type>
  <sponsors>
    <lead_sponsor><agency>Incyte Corporation</agency></lead_sponsor>
  </sponsors>
  <start_date>June 2021</start_date>
  <condition>Vitiligo</condition>
  <condition>Nonsegmental Vitiligo</condition>
  <intervention>
    <intervention_name>Ruxolitinib cream</intervention_name>
  </intervention>
  <location><facility><name>Hospital Clinic Barcelona</name></facility></location>
  <location><facility><name>Mount Sinai</name></facility></location>
  <eligibility>
    <criteria><textblock>Inclusion: adults 18-75.
Exclusion: segmental vitiligo.</textblock></criteria>
  </eligibility>
</clinical_study>"#;

    #[test]
    fn extracts_full_field_set() {
        let doc = DetailDoc::parse(SAMPLE_DETAIL).unwrap();
        let d = extract_detail("NCT04956640", &doc);
        assert_eq!(d.id, "NCT04956640");
        assert_eq!(d.title, "A Randomized Phase 3 Trial of Ruxolitinib Cream in Vitiligo");
        assert_eq!(d.summary, "Evaluates repigmentation response.");
        assert_eq!(d.status, "Recruiting");
        assert_eq!(d.phase, "Phase 3");
        assert_eq!(d.study_type, "Interventional");
        assert_eq!(d.sponsor, "Incyte Corporation");
        assert_eq!(d.start_date, "June 2021");
        assert_eq!(d.conditions, vec!["Vitiligo", "Nonsegmental Vitiligo"]);
        assert_eq!(d.interventions, vec!["Ruxolitinib cream"]);
        assert_eq!(d.locations, vec!["Hospital Clinic Barcelona", "Mount Sinai"]);
        assert!(d.eligibility_criteria.starts_with("Inclusion: adults 18-75."));
    }

    #[test]
    fn title_falls_back_to_brief_title() {
        let doc = DetailDoc::parse(
            "<clinical_study><brief_title>Short Name</brief_title></clinical_study>",
        )
        .unwrap();
        let d = extract_detail("NCT1", &doc);
        assert_eq!(d.title, "Short Name");
    }

    #[test]
    fn missing_scalars_use_sentinel_and_lists_stay_empty() {
        let doc = DetailDoc::parse("<clinical_study><phase>Phase 1</phase></clinical_study>").unwrap();
        let d = extract_detail("NCT2", &doc);
        assert_eq!(d.title, "No disponible");
        assert_eq!(d.summary, "No disponible");
        assert_eq!(d.sponsor, "No disponible");
        assert_eq!(d.eligibility_criteria, "No disponible");
        assert_eq!(d.phase, "Phase 1");
        assert!(d.conditions.is_empty());
        assert!(d.interventions.is_empty());
        assert!(d.locations.is_empty());
    }

    #[test]
    fn suffix_match_is_segment_aligned() {
        let doc = DetailDoc::parse(
            "<root><pre_condition>nope</pre_condition><condition>yes</condition></root>",
        )
        .unwrap();
        assert_eq!(doc.texts("condition"), vec!["yes"]);
    }

    #[test]
    fn malformed_detail_is_a_parse_error() {
        let err = DetailDoc::parse("<clinical_study><phase>Phase 1</wrong>").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
