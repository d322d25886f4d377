//! RSS feed extraction.
//!
//! Feed shape: `<rss><channel><item><title/><link/></item>…</channel></rss>`.
//! Only `<title>`/`<link>` inside an `<item>` are captured; the channel
//! carries its own title/link pair that must be ignored.

use quick_xml::events::Event;
use quick_xml::Reader;
use trialyx_common::{RegistryError, Result};

use crate::models::{FeedItem, MISSING_ID};

/// Parse a feed payload into raw items. Malformed XML is a hard parse
/// error, not a truncated result.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>> {
    let mut items = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut current: Option<FeedItem> = None;
    let mut in_title = false;
    let mut in_link = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"item" => {
                    current = Some(FeedItem {
                        title: String::new(),
                        link: String::new(),
                    });
                }
                b"title" => in_title = true,
                b"link" => in_link = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if let Some(ref mut item) = current {
                    if in_title {
                        item.title.push_str(&text);
                    }
                    if in_link {
                        item.link.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"title" => in_title = false,
                b"link" => in_link = false,
                b"item" => {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(RegistryError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

/// Identifier = last path segment of the entry link, `"N/A"` when the link
/// is empty.
pub fn trial_id_from_link(link: &str) -> String {
    if link.is_empty() {
        return MISSING_ID.to_string();
    }
    link.rsplit('/').next().unwrap_or(MISSING_ID).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>ClinicalTrials.gov search results</title>
    <link>https://clinicaltrials.gov/ct2/results</link>
    <item>
      <title>A Phase 3 Study of Ruxolitinib</title>
      <link>https://clinicaltrials.gov/ct2/show/NCT04956640</link>
    </item>
    <item>
      <title>Observational Study &amp; Registry</title>
      <link>https://clinicaltrials.gov/ct2/show/NCT01234567</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_and_skips_channel_metadata() {
        let items = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A Phase 3 Study of Ruxolitinib");
        assert_eq!(items[0].link, "https://clinicaltrials.gov/ct2/show/NCT04956640");
        assert_eq!(items[1].title, "Observational Study & Registry");
    }

    #[test]
    fn empty_channel_yields_no_items() {
        let items = parse_feed(r#"<rss><channel><title>empty</title></channel></rss>"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_feed("<rss><channel><item><title>broken</channel>").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn id_is_last_link_segment() {
        assert_eq!(
            trial_id_from_link("https://clinicaltrials.gov/ct2/show/NCT04956640"),
            "NCT04956640"
        );
    }

    #[test]
    fn empty_link_yields_sentinel_id() {
        assert_eq!(trial_id_from_link(""), "N/A");
    }
}
