//! Compare live page descriptions with stored summaries.

use crate::fetch::{page_description, FetchError, PageSource};
use crate::records::MetaRecord;
use crate::url_model::normalize_url;

/// Result of checking one node's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Page description equals the stored summary.
    Match,
    /// Page description differs from the stored summary.
    Mismatch { stored: String, page: String },
    /// Page loaded but has no description tag.
    NotFound,
    /// Page could not be fetched; holds the error message.
    FetchFailed(String),
}

/// One checked node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionCheck {
    pub nid: String,
    /// Normalized URL that was requested.
    pub url: String,
    pub outcome: CheckOutcome,
}

/// Tally of check outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckTally {
    pub matched: usize,
    pub mismatched: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl CheckTally {
    pub fn from_checks(checks: &[DescriptionCheck]) -> Self {
        let mut tally = CheckTally::default();
        for c in checks {
            match c.outcome {
                CheckOutcome::Match => tally.matched += 1,
                CheckOutcome::Mismatch { .. } => tally.mismatched += 1,
                CheckOutcome::NotFound => tally.not_found += 1,
                CheckOutcome::FetchFailed(_) => tally.failed += 1,
            }
        }
        tally
    }
}

/// Checks every node that has a `view_node` URL, in input order.
///
/// The URL is normalized before fetching; the stored value compared against is
/// the trimmed `field_search_summary_text`. Nodes without a URL are skipped.
pub fn check_descriptions<S: PageSource + ?Sized>(
    records: &[MetaRecord],
    source: &S,
) -> Vec<DescriptionCheck> {
    let mut checks = Vec::new();

    for record in records {
        let view_node = record.view_node().trim();
        if view_node.is_empty() {
            tracing::debug!("nid {} has no view_node, skipping", record.nid());
            continue;
        }
        let url = normalize_url(view_node);
        let stored = record.summary_text().trim();

        let outcome = match page_description(source, &url) {
            Ok(Some(page)) if page == stored => CheckOutcome::Match,
            Ok(Some(page)) => CheckOutcome::Mismatch {
                stored: stored.to_string(),
                page,
            },
            Ok(None) => CheckOutcome::NotFound,
            Err(e) => {
                tracing::warn!("fetch failed for nid {}: {}", record.nid(), e);
                CheckOutcome::FetchFailed(e.to_string())
            }
        };
        checks.push(DescriptionCheck {
            nid: record.nid().to_string(),
            url,
            outcome,
        });
    }

    checks
}

/// Normalizes `url` and looks up its page description.
///
/// Returns the normalized URL alongside the lookup result.
pub fn describe_url<S: PageSource + ?Sized>(
    source: &S,
    url: &str,
) -> (String, Result<Option<String>, FetchError>) {
    let url = normalize_url(url.trim());
    let result = page_description(source, &url);
    if let Err(e) = &result {
        tracing::warn!("{}", e);
    }
    (url, result)
}
