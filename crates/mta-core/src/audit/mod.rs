//! Audits over the exports.
//!
//! - Description check: fetch each node page and compare its meta description
//!   with the stored search summary.
//! - Tag audit: list which metatag keys each node actually carries.

mod descriptions;
mod tags;

pub use descriptions::{check_descriptions, describe_url, CheckOutcome, CheckTally, DescriptionCheck};
pub use tags::{audit_tags, NodeTags};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, PageSource};
    use crate::records::{parse_meta_records, parse_metatag_export};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned HTML by URL and remembers what was requested.
    #[derive(Default)]
    struct CannedPages {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl CannedPages {
        fn with(mut self, url: &str, description: Option<&str>) -> Self {
            let head = description
                .map(|d| format!(r#"<meta name="description" content="{d}">"#))
                .unwrap_or_default();
            self.pages
                .insert(url.to_string(), format!("<html><head>{head}</head></html>"));
            self
        }
    }

    impl PageSource for CannedPages {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| FetchError::Http {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    #[test]
    fn check_descriptions_classifies_each_page() {
        let records = parse_meta_records(
            r#"[
                {"nid":"1","view_node":"https://example.com//node//1","field_search_summary_text":"Same text \n"},
                {"nid":"2","view_node":"https://example.com/node/2","field_search_summary_text":"Stored"},
                {"nid":"3","view_node":"https://example.com/node/3"},
                {"nid":"4","view_node":"https://example.com/node/4"},
                {"nid":"5","title":"no url"}
            ]"#,
        )
        .unwrap()
        .records;
        let pages = CannedPages::default()
            .with("https://example.com/node/1", Some("Same text"))
            .with("https://example.com/node/2", Some("Live"))
            .with("https://example.com/node/3", None);

        let checks = check_descriptions(&records, &pages);
        assert_eq!(checks.len(), 4);
        assert_eq!(checks[0].url, "https://example.com/node/1");
        assert_eq!(checks[0].outcome, CheckOutcome::Match);
        assert_eq!(
            checks[1].outcome,
            CheckOutcome::Mismatch {
                stored: "Stored".to_string(),
                page: "Live".to_string()
            }
        );
        assert_eq!(checks[2].outcome, CheckOutcome::NotFound);
        assert!(matches!(checks[3].outcome, CheckOutcome::FetchFailed(ref m) if m.contains("404")));
        assert_eq!(pages.requested.borrow().len(), 4);

        let tally = CheckTally::from_checks(&checks);
        assert_eq!(
            tally,
            CheckTally {
                matched: 1,
                mismatched: 1,
                not_found: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn describe_url_normalizes_first() {
        let pages = CannedPages::default().with("https://example.com/a/b", Some("Desc"));
        let (url, result) = describe_url(&pages, " https://example.com//a//b ");
        assert_eq!(url, "https://example.com/a/b");
        assert_eq!(result.unwrap().as_deref(), Some("Desc"));
    }

    #[test]
    fn audit_tags_filters_by_type() {
        let records = parse_meta_records(
            r#"[
                {"nid":"1","title":"Article one","type":"article"},
                {"nid":"2","title":"Page two","type":"page"},
                {"nid":"3","title":"Article bare","type":"article"},
                {"title":"No nid","type":"article"}
            ]"#,
        )
        .unwrap()
        .records;
        let metatags = parse_metatag_export(
            "1\t{\"description\":\"d\",\"og_image\":\"i.png\",\"og_description\":\"\"}\n2\t{\"title\":\"t\"}\n",
        );

        let all = audit_tags(&records, &metatags, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].tags, vec!["title".to_string()]);

        let articles = audit_tags(&records, &metatags, Some("article"));
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Article one");
        assert_eq!(articles[0].joined(), "description, og_image");
        assert!(articles[1].tags.is_empty());
    }
}
