//! `mta check <json>` – compare live page descriptions with stored summaries.

use anyhow::Result;
use mta_core::audit::{check_descriptions, CheckOutcome, CheckTally};
use mta_core::config::FetchConfig;
use mta_core::fetch::CurlPageSource;
use mta_core::records::load_meta_records;
use std::path::Path;

pub fn run_check(meta: &Path, fetch: &FetchConfig) -> Result<()> {
    let records = load_meta_records(meta)?;
    for m in &records.malformed {
        eprintln!("skipped {m}");
    }

    let source = CurlPageSource::new(fetch.clone());
    let checks = check_descriptions(&records.records, &source);

    for c in &checks {
        match &c.outcome {
            CheckOutcome::Match => {}
            CheckOutcome::Mismatch { stored, page } => {
                println!("\nNID: {}", c.nid);
                println!("URL: {}", c.url);
                println!("Difference found:");
                println!("JSON summary: {}", stored);
                println!("Page meta description: {}\n", page);
            }
            CheckOutcome::NotFound => {
                println!("{}: Could not retrieve meta description from page", c.nid);
            }
            CheckOutcome::FetchFailed(err) => {
                println!("{}: Error fetching {}: {}", c.nid, c.url, err);
            }
        }
    }

    let tally = CheckTally::from_checks(&checks);
    println!(
        "Checked {} pages: {} match, {} differ, {} without description, {} failed",
        checks.len(),
        tally.matched,
        tally.mismatched,
        tally.not_found,
        tally.failed
    );
    Ok(())
}
