//! Node and metatag exports: typed records and tolerant loaders.
//!
//! The node export (JSON, array or newline-delimited) is the primary record
//! set; the metatag export (`<nid>\t<json>` per line) is keyed by nid for
//! lookup during the join. Undecodable lines are reported, never fatal.

mod error;
mod loader;
mod metatag;
mod model;

pub use error::{MalformedReason, MalformedRecord, RecordError, RecordLocation};
pub use loader::{
    load_meta_records, parse_meta_records, parse_record_set, parse_typed, ParseStrategy,
    RecordSet,
};
pub use metatag::{load_metatag_export, parse_metatag_export, MetatagIndex};
pub use model::{flatten_newlines, MetaRecord, MetatagRecord};
