//! CLI for mta, the metatag audit toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mta_core::config;
use std::path::PathBuf;

use commands::{run_check, run_combine, run_describe, run_normalize, run_tags};

/// Top-level CLI for mta.
#[derive(Debug, Parser)]
#[command(name = "mta")]
#[command(about = "mta: join node and metatag exports, audit meta descriptions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Join the node export with the metatag export into one CSV report.
    Combine {
        /// Node export: JSON object, JSON array, or one object per line.
        #[arg(long, value_name = "JSON")]
        meta: PathBuf,
        /// Metatag export: `<nid><TAB><json>` per line.
        #[arg(long, value_name = "TSV")]
        metatags: PathBuf,
        /// Report path (defaults to `output_path` from config.toml).
        #[arg(short, long, value_name = "CSV")]
        output: Option<PathBuf>,
    },

    /// Compare each node page's live meta description with its stored summary.
    Check {
        /// Node export with `view_node` and `field_search_summary_text`.
        meta: PathBuf,
    },

    /// Print the meta description of every URL in a list file (one per line).
    Describe {
        /// File with one URL per line.
        urls: PathBuf,
    },

    /// List the metatag keys each node carries.
    Tags {
        /// Node export.
        #[arg(long, value_name = "JSON")]
        meta: PathBuf,
        /// Metatag export.
        #[arg(long, value_name = "TSV")]
        metatags: PathBuf,
        /// Only nodes of this content type (the export's `type` field).
        #[arg(long, value_name = "TYPE")]
        content_type: Option<String>,
    },

    /// Collapse doubled slashes in URLs, keeping the scheme intact.
    Normalize {
        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Combine {
                meta,
                metatags,
                output,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let output = output.unwrap_or(cfg.output_path);
                run_combine(&meta, &metatags, &output)?;
            }
            CliCommand::Check { meta } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(&meta, &cfg.fetch)?;
            }
            CliCommand::Describe { urls } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_describe(&urls, &cfg.fetch)?;
            }
            CliCommand::Tags {
                meta,
                metatags,
                content_type,
            } => run_tags(&meta, &metatags, content_type.as_deref())?,
            CliCommand::Normalize { urls } => run_normalize(&urls),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
