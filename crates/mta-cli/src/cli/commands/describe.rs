//! `mta describe <url-list>` – print the meta description of each listed URL.

use anyhow::{Context, Result};
use mta_core::audit::describe_url;
use mta_core::config::FetchConfig;
use mta_core::fetch::CurlPageSource;
use std::path::Path;

pub fn run_describe(list: &Path, fetch: &FetchConfig) -> Result<()> {
    let text = std::fs::read_to_string(list)
        .with_context(|| format!("read URL list {}", list.display()))?;
    let source = CurlPageSource::new(fetch.clone());

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (url, result) = describe_url(&source, line);
        tracing::debug!("describe {}", url);
        match result {
            Ok(Some(description)) => println!("{description}"),
            Ok(None) => println!("No meta description found"),
            Err(e) => println!("Error fetching URL: {e}"),
        }
    }
    Ok(())
}
