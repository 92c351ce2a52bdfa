//! `mta tags` – list the metatag keys each node carries.

use anyhow::Result;
use mta_core::audit::audit_tags;
use mta_core::records::{load_meta_records, load_metatag_export};
use std::path::Path;

pub fn run_tags(meta: &Path, metatags: &Path, content_type: Option<&str>) -> Result<()> {
    let records = load_meta_records(meta)?;
    let index = load_metatag_export(metatags)?;
    let nodes = audit_tags(&records.records, &index, content_type);

    if nodes.is_empty() {
        println!("No nodes found.");
        return Ok(());
    }
    println!("{:<8} {:<40} {}", "NID", "TITLE", "META TAGS");
    for n in nodes {
        println!("{:<8} {:<40} {}", n.nid, n.title, n.joined());
    }
    Ok(())
}
