//! Loader for the metatag export: one `<nid><TAB><json-object>` per line.

use std::collections::HashMap;
use std::path::Path;

use super::error::{MalformedReason, MalformedRecord, RecordError, RecordLocation};
use super::loader::strip_bom;
use super::model::MetatagRecord;

/// Metatag records keyed by nid, plus the lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct MetatagIndex {
    by_nid: HashMap<String, MetatagRecord>,
    pub malformed: Vec<MalformedRecord>,
}

impl MetatagIndex {
    pub fn get(&self, nid: &str) -> Option<&MetatagRecord> {
        self.by_nid.get(nid)
    }

    pub fn len(&self) -> usize {
        self.by_nid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_nid.is_empty()
    }

    /// Adds or replaces the record for `nid`. Returns the record it replaced.
    pub fn insert(&mut self, nid: impl Into<String>, record: MetatagRecord) -> Option<MetatagRecord> {
        self.by_nid.insert(nid.into(), record)
    }
}

impl<K: Into<String>> FromIterator<(K, MetatagRecord)> for MetatagIndex {
    fn from_iter<I: IntoIterator<Item = (K, MetatagRecord)>>(iter: I) -> Self {
        let mut index = MetatagIndex::default();
        for (nid, record) in iter {
            index.insert(nid, record);
        }
        index
    }
}

/// Parses the tab-delimited metatag export.
///
/// The line is split on the first tab only, since the payload may contain
/// escaped tabs. Lines without a tab, with an empty nid, or with a payload that
/// is not a JSON object are reported and skipped. Blank lines are ignored. When
/// an nid repeats, the later line wins.
pub fn parse_metatag_export(text: &str) -> MetatagIndex {
    let mut index = MetatagIndex::default();

    for (i, raw) in strip_bom(text).lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let location = RecordLocation::Line(i + 1);
        let reject = |reason: MalformedReason| MalformedRecord {
            location,
            content: raw.to_string(),
            reason,
        };

        let parsed = match raw.split_once('\t') {
            None => Err(reject(MalformedReason::MissingTab)),
            Some((nid, _)) if nid.trim().is_empty() => Err(reject(MalformedReason::EmptyNid)),
            Some((nid, payload)) => serde_json::from_str::<MetatagRecord>(payload.trim())
                .map(|record| (nid.trim().to_string(), record))
                .map_err(|e| reject(MalformedReason::InvalidJson(e.to_string()))),
        };

        match parsed {
            Ok((nid, record)) => {
                if index.insert(nid.clone(), record).is_some() {
                    tracing::debug!("metatag export repeats nid {} at {}", nid, location);
                }
            }
            Err(bad) => {
                tracing::warn!("skipping metatag {}", bad);
                index.malformed.push(bad);
            }
        }
    }

    index
}

/// Reads and parses the metatag export from disk.
pub fn load_metatag_export(path: &Path) -> Result<MetatagIndex, RecordError> {
    let text = std::fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let index = parse_metatag_export(&text);
    tracing::info!(
        "loaded {} metatag records from {} ({} malformed)",
        index.len(),
        path.display(),
        index.malformed.len()
    );
    Ok(index)
}
