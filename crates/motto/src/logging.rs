//! File logging for the terminal UI.
//!
//! The terminal is owned by ratatui, so log output goes to
//! `<data-local dir>/motto/motto.log`, and only when `RUST_LOG` is set.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{OptionExt, WrapErr};
use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "motto.log";

/// Where the log file is written.
fn log_path() -> color_eyre::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "motto").ok_or_eyre("no data directory")?;
    Ok(dirs.data_local_dir().join(LOG_FILE))
}

/// Create the log file and its parent directories.
fn open_log(path: &Path) -> color_eyre::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating {}", parent.display()))?;
    }
    File::create(path).wrap_err_with(|| format!("creating {}", path.display()))
}

/// Install a subscriber writing to `path`.
fn init_at(filter: EnvFilter, path: &Path) -> color_eyre::Result<()> {
    let file = open_log(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

/// Install a file-backed subscriber if `RUST_LOG` is set.
///
/// Failure only disables logging; it is reported on stderr.
pub fn init() {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };

    if let Err(e) = log_path().and_then(|path| init_at(filter, &path)) {
        eprintln!("motto: logging disabled: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join(LOG_FILE);
        open_log(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let result = init_at(EnvFilter::new("debug"), &blocker.join(LOG_FILE));
        assert!(result.is_err());
    }
}
