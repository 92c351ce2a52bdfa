//! Logging init: append to `mta.log` under the XDG state dir, or log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info,mta=debug";

const LOG_FILE_NAME: &str = "mta.log";

/// Per-event sink: the shared log file handle, or stderr when the handle
/// cannot be duplicated for this event.
enum EventSink {
    Log(File),
    Stderr,
}

impl io::Write for EventSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventSink::Log(f) => f.write(buf),
            EventSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventSink::Log(f) => f.flush(),
            EventSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Hands out one [`EventSink`] per log event from an opened `mta.log`.
struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EventSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(EventSink::Log)
            .unwrap_or(EventSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Creates `dir` if needed and opens `dir/mta.log` for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((path, file))
}

/// Installs a subscriber writing to `$XDG_STATE_HOME/mta/mta.log`.
///
/// Errors when the state dir or log file is unusable, or a subscriber is
/// already installed; `main` then calls [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mta")?;
    let (path, file) = open_log_file(&xdg_dirs.get_state_home())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("mta logging to {}", path.display());
    Ok(())
}

/// Installs a stderr-only subscriber. A second install is ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
