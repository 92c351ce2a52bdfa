//! `mta combine` – join node and metatag exports into a CSV report.

use anyhow::Result;
use mta_core::join::{join_records, JoinSummary};
use mta_core::records::{load_meta_records, load_metatag_export, MalformedRecord};
use mta_core::report::write_report;
use std::path::Path;

pub fn run_combine(meta: &Path, metatags: &Path, output: &Path) -> Result<()> {
    // Both sets are fully loaded before joining; the report is written last.
    let records = load_meta_records(meta)?;
    print_malformed(meta, &records.malformed);
    let index = load_metatag_export(metatags)?;
    print_malformed(metatags, &index.malformed);

    let report = join_records(&records.records, &index);
    write_report(output, &report.rows)?;

    println!(
        "CSV file created successfully at {} with {} entries",
        output.display(),
        report.rows.len()
    );
    print!("{}", format_summary(&report.summary));
    Ok(())
}

fn print_malformed(path: &Path, malformed: &[MalformedRecord]) {
    if malformed.is_empty() {
        return;
    }
    eprintln!("Skipped {} malformed record(s) in {}:", malformed.len(), path.display());
    for m in malformed {
        eprintln!("  {m}");
    }
}

pub(crate) fn format_summary(summary: &JoinSummary) -> String {
    let mut out = String::new();
    out.push_str("\nMatching statistics:\n");
    out.push_str(&format!("- Total entries processed: {}\n", summary.total));
    out.push_str(&format!(
        "- Entries with metatag matches: {} ({:.1}%)\n",
        summary.matched,
        summary.match_ratio() * 100.0
    ));
    out.push_str(&format!(
        "- Entries without metatag matches: {}\n",
        summary.unmatched()
    ));
    if !summary.unmatched_nids.is_empty() {
        out.push_str(&format!(
            "  unmatched nids: {}\n",
            summary.unmatched_nids.join(", ")
        ));
    }
    if !summary.missing_nid.is_empty() {
        out.push_str(&format!(
            "- Entries skipped for missing nid: {}\n",
            summary.missing_nid.len()
        ));
        for skipped in &summary.missing_nid {
            out.push_str(&format!("  entry {}: {}\n", skipped.position, skipped.entry));
        }
    }
    out
}
