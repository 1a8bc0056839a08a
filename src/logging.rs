//! File-only tracing setup.
//!
//! The terminal belongs to the wizard while it runs, so nothing is ever
//! written to stdout or stderr by the subscriber. Each session starts with an
//! empty log file. `RUST_LOG` overrides the default `info` filter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background writer alive; dropping it flushes the log.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn init_logging(log_dir: &Path) -> Result<LoggingGuard, io::Error> {
    let path = prepare_log_file(log_dir, default_log_file())?;

    let file_appender = tracing_appender::rolling::never(log_dir, default_log_file());
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
        path,
    })
}

/// Create `log_dir` if needed and truncate the log file in it.
fn prepare_log_file(log_dir: &Path, log_file: &str) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(log_file);
    fs::write(&path, "")?;
    Ok(path)
}

pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("dbca-wizard")
}

pub fn default_log_file() -> &'static str {
    "dbca-wizard.log"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        assert_eq!(default_log_file(), "dbca-wizard.log");
        assert!(default_log_dir().ends_with("dbca-wizard"));
    }

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");

        let path = prepare_log_file(&dir, "test.log").unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("test.log"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn truncates_previous_session() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("test.log");
        fs::write(&path, "old log data").unwrap();

        prepare_log_file(tmp.path(), "test.log").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
