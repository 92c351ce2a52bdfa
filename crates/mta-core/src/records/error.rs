//! Error and report types for record loading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal loading failure: the source could not be read or decoded at all.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode JSON document: {0}")]
    Document(#[source] serde_json::Error),
}

/// Why a single line or entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("no tab between nid and payload")]
    MissingTab,
    #[error("empty nid")]
    EmptyNid,
}

/// Where a skipped record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLocation {
    /// 1-based physical line (line-oriented sources).
    Line(usize),
    /// 1-based position in a whole-document array.
    Entry(usize),
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLocation::Line(n) => write!(f, "line {}", n),
            RecordLocation::Entry(n) => write!(f, "entry {}", n),
        }
    }
}

/// A line or entry that could not be decoded and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub location: RecordLocation,
    /// Offending text, for diagnosis.
    pub content: String,
    pub reason: MalformedReason,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.location, self.reason, self.content)
    }
}
