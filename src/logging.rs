//! Log sink setup
//!
//! The terminal is in raw mode while the app runs, so logs go to a file
//! rather than stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{QuickLoanError, Result, APP_NAME, LOG_FILE};

/// Default log location: $DATA_DIR/quickloan/quickloan.log
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        QuickLoanError::LoggingError("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Filter directive for this crate at `level`
pub fn filter_directive(level: &str) -> String {
    format!("quickloan_aa={}", level.trim().to_ascii_lowercase())
}

/// Install the global subscriber, appending to `path`
pub fn init(level: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(level)))
        .map_err(|e| QuickLoanError::LoggingError(format!("Invalid log level {}: {}", level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| QuickLoanError::LoggingError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("DEBUG "), "quickloan_aa=debug");
    }

    #[test]
    fn test_default_log_path() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("quickloan/quickloan.log"));
        }
    }
}
