//! Which metatags each node actually carries.

use crate::records::{MetaRecord, MetatagIndex};

/// Tag keys present for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTags {
    pub nid: String,
    pub title: String,
    /// Sorted, unique tag names with a non-empty value.
    pub tags: Vec<String>,
}

impl NodeTags {
    /// Tag names joined with `", "`.
    pub fn joined(&self) -> String {
        self.tags.join(", ")
    }
}

/// Lists tag keys per node, optionally only for nodes of `content_type`.
///
/// Nodes without a nid are skipped; nodes with no metatag record get an empty list.
pub fn audit_tags(
    records: &[MetaRecord],
    metatags: &MetatagIndex,
    content_type: Option<&str>,
) -> Vec<NodeTags> {
    records
        .iter()
        .filter(|r| content_type.map_or(true, |t| r.node_type() == t))
        .filter_map(|r| {
            let nid = r.key()?;
            Some(NodeTags {
                nid: nid.to_string(),
                title: r.title().to_string(),
                tags: metatags
                    .get(nid)
                    .map(|m| m.tag_names())
                    .unwrap_or_default(),
            })
        })
        .collect()
}
