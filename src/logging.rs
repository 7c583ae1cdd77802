//! File logging for the CLI.
//!
//! Both the users commands and the wizard write to stdout, so log records
//! never go to the terminal. They go to a file named by `SLICESTORE_LOG`,
//! or nowhere.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "SLICESTORE_LOG";

/// Install the global subscriber if `SLICESTORE_LOG` is set.
///
/// `RUST_LOG` picks the level, `info` by default.
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };
    let path = log_file_path(PathBuf::from(base), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{unix seconds}.{pid}`, one file per process.
fn log_file_path(base: PathBuf, pid: u32) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.into_os_string();
    name.push(format!(".{secs}.{pid}"));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_name_carries_pid() {
        let path = log_file_path(PathBuf::from("/tmp/slicestore.log"), 4242);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("slicestore.log."));
        assert!(name.ends_with(".4242"));
        assert_eq!(path.parent(), Some(std::path::Path::new("/tmp")));
    }
}
