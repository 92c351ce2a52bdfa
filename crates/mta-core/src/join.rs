//! Left join of node records against the metatag index.
//!
//! Every node with a nid yields exactly one [`OutputRow`], matched or not;
//! unmatched nodes get blank metatag columns. Nodes without a nid are left
//! out and listed in the summary.

use serde::Serialize;

use crate::records::{MetaRecord, MetatagIndex, MetatagRecord};

/// One row of the combined report. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub nid: String,
    pub lang: String,
    pub title: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub view_node: String,
    pub field_search_summary_text: String,
    pub description: String,
    pub og_description: String,
    pub og_image: String,
    pub og_image_secure_url: String,
    pub og_image_url: String,
    pub twitter_cards_description: String,
    pub twitter_cards_image: String,
    pub twitter_cards_type: String,
}

impl OutputRow {
    /// Report header, in field order.
    pub const COLUMNS: [&'static str; 14] = [
        "nid",
        "lang",
        "title",
        "type",
        "view_node",
        "field_search_summary_text",
        "description",
        "og_description",
        "og_image",
        "og_image_secure_url",
        "og_image_url",
        "twitter_cards_description",
        "twitter_cards_image",
        "twitter_cards_type",
    ];

    fn build(nid: &str, meta: &MetaRecord, tags: Option<&MetatagRecord>) -> Self {
        let tag = |value: Option<&Option<String>>| value.cloned().flatten().unwrap_or_default();
        OutputRow {
            nid: nid.to_string(),
            lang: meta.lang().to_string(),
            title: meta.title().to_string(),
            node_type: meta.node_type().to_string(),
            view_node: meta.view_node().to_string(),
            field_search_summary_text: meta.summary_text_flat(),
            description: tags.map(MetatagRecord::description_flat).unwrap_or_default(),
            og_description: tag(tags.map(|t| &t.og_description)),
            og_image: tag(tags.map(|t| &t.og_image)),
            og_image_secure_url: tag(tags.map(|t| &t.og_image_secure_url)),
            og_image_url: tag(tags.map(|t| &t.og_image_url)),
            twitter_cards_description: tag(tags.map(|t| &t.twitter_cards_description)),
            twitter_cards_image: tag(tags.map(|t| &t.twitter_cards_image)),
            twitter_cards_type: tag(tags.map(|t| &t.twitter_cards_type)),
        }
    }

    /// True when every metatag column is blank.
    pub fn metatags_blank(&self) -> bool {
        self.values()[6..].iter().all(|v| v.is_empty())
    }

    /// Cell values in column order.
    pub fn values(&self) -> [&str; 14] {
        [
            &self.nid,
            &self.lang,
            &self.title,
            &self.node_type,
            &self.view_node,
            &self.field_search_summary_text,
            &self.description,
            &self.og_description,
            &self.og_image,
            &self.og_image_secure_url,
            &self.og_image_url,
            &self.twitter_cards_description,
            &self.twitter_cards_image,
            &self.twitter_cards_type,
        ]
    }
}

/// A node left out of the report because it has no nid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// 1-based position in the node export.
    pub position: usize,
    /// The entry rendered as JSON, for diagnosis.
    pub entry: String,
}

/// Matching statistics for one join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSummary {
    /// Nodes with a nid (equals the number of output rows).
    pub total: usize,
    /// Nodes that found a metatag record.
    pub matched: usize,
    /// Nids without a metatag record, in input order.
    pub unmatched_nids: Vec<String>,
    /// Nodes skipped for lacking a nid.
    pub missing_nid: Vec<SkippedEntry>,
}

impl JoinSummary {
    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }

    /// Share of matched nodes in `0.0..=1.0`; zero when there is nothing to match.
    pub fn match_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}

/// Output rows in node order, plus the summary.
#[derive(Debug, Clone, Default)]
pub struct JoinReport {
    pub rows: Vec<OutputRow>,
    pub summary: JoinSummary,
}

/// Joins `records` against `metatags` on nid.
pub fn join_records(records: &[MetaRecord], metatags: &MetatagIndex) -> JoinReport {
    let mut report = JoinReport::default();

    for (i, record) in records.iter().enumerate() {
        let Some(nid) = record.key() else {
            let entry = serde_json::to_string(record).unwrap_or_else(|_| format!("{:?}", record));
            tracing::warn!("entry {} has no nid, skipping: {}", i + 1, entry);
            report.summary.missing_nid.push(SkippedEntry {
                position: i + 1,
                entry,
            });
            continue;
        };

        let tags = metatags.get(nid);
        if tags.is_some() {
            report.summary.matched += 1;
        } else {
            tracing::debug!("no metatag record for nid {}", nid);
            report.summary.unmatched_nids.push(nid.to_string());
        }
        report.rows.push(OutputRow::build(nid, record, tags));
    }

    report.summary.total = report.rows.len();
    tracing::info!(
        "joined {} nodes: {} matched, {} unmatched, {} without nid",
        report.summary.total,
        report.summary.matched,
        report.summary.unmatched(),
        report.summary.missing_nid.len()
    );
    report
}
