//! Tolerant JSON / newline-delimited JSON loading for the node export.
//!
//! Exports come either as one JSON document (an object or an array of objects)
//! or as one object per line, sometimes with the trailing commas left over from
//! a hand-trimmed array. The whole document is tried first; only a syntax-shaped
//! failure switches to line-by-line parsing.

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value;
use std::path::Path;

use super::error::{MalformedReason, MalformedRecord, RecordError, RecordLocation};
use super::model::MetaRecord;

/// Which parse stage produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// The text was one JSON value (an array, or a single object wrapped into a list).
    WholeDocument,
    /// The text was parsed one line at a time.
    LineOriented,
}

/// Decoded records plus everything that was skipped along the way.
#[derive(Debug, Clone)]
pub struct RecordSet<T> {
    pub records: Vec<T>,
    pub strategy: ParseStrategy,
    pub malformed: Vec<MalformedRecord>,
}

impl<T> RecordSet<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses `text` into a list of JSON values (see module docs for accepted shapes).
pub fn parse_record_set(text: &str) -> Result<RecordSet<Value>, RecordError> {
    let located = parse_located(text)?;
    Ok(RecordSet {
        records: located.records.into_iter().map(|(_, v)| v).collect(),
        strategy: located.strategy,
        malformed: located.malformed,
    })
}

/// Parses `text` and decodes every value as `T`; values of the wrong shape are
/// reported as malformed and skipped.
pub fn parse_typed<T: DeserializeOwned>(text: &str) -> Result<RecordSet<T>, RecordError> {
    let located = parse_located(text)?;
    let mut malformed = located.malformed;
    let mut records = Vec::with_capacity(located.records.len());

    for (location, value) in located.records {
        let content = value.to_string();
        // Derived struct decoding also accepts sequences; records must be objects.
        let decoded = if value.is_object() {
            serde_json::from_value::<T>(value).map_err(|e| e.to_string())
        } else {
            Err(format!("expected a JSON object, found {}", kind(&value)))
        };
        match decoded {
            Ok(r) => records.push(r),
            Err(message) => {
                let bad = MalformedRecord {
                    location,
                    content,
                    reason: MalformedReason::InvalidJson(message),
                };
                tracing::warn!("skipping {}", bad);
                malformed.push(bad);
            }
        }
    }

    Ok(RecordSet {
        records,
        strategy: located.strategy,
        malformed,
    })
}

/// Parses the primary node export.
pub fn parse_meta_records(text: &str) -> Result<RecordSet<MetaRecord>, RecordError> {
    parse_typed(text)
}

/// Reads and parses the primary node export from disk.
pub fn load_meta_records(path: &Path) -> Result<RecordSet<MetaRecord>, RecordError> {
    let text = std::fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_meta_records(&text)?;
    tracing::info!(
        "loaded {} node records from {} ({:?}, {} malformed)",
        set.len(),
        path.display(),
        set.strategy,
        set.malformed.len()
    );
    Ok(set)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_located(text: &str) -> Result<RecordSet<(RecordLocation, Value)>, RecordError> {
    let text = strip_bom(text);
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(whole_document(value)),
        Err(e) => match e.classify() {
            Category::Syntax | Category::Eof => {
                tracing::debug!("whole-document parse failed ({}); parsing line by line", e);
                Ok(line_oriented(text))
            }
            // Unreachable when decoding text into `Value`; fatal rather than retried.
            Category::Io | Category::Data => Err(RecordError::Document(e)),
        },
    }
}

/// Drops a leading UTF-8 byte order mark, as written by some editors and exporters.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn whole_document(value: Value) -> RecordSet<(RecordLocation, Value)> {
    let values = match value {
        Value::Array(items) => items,
        other => vec![other],
    };
    RecordSet {
        records: values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (RecordLocation::Entry(i + 1), v))
            .collect(),
        strategy: ParseStrategy::WholeDocument,
        malformed: Vec::new(),
    }
}

fn line_oriented(text: &str) -> RecordSet<(RecordLocation, Value)> {
    let mut records = Vec::new();
    let mut malformed = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line = line.strip_suffix(',').unwrap_or(line);
        let location = RecordLocation::Line(i + 1);
        match serde_json::from_str::<Value>(line) {
            Ok(v) => records.push((location, v)),
            Err(e) => {
                let bad = MalformedRecord {
                    location,
                    content: raw.to_string(),
                    reason: MalformedReason::InvalidJson(e.to_string()),
                };
                tracing::warn!("skipping {}", bad);
                malformed.push(bad);
            }
        }
    }

    RecordSet {
        records,
        strategy: ParseStrategy::LineOriented,
        malformed,
    }
}
