//! Log output for the Newsdesk server.
//!
//! Request handling logs news fetches and generation outcomes at `info`, rejected input at
//! `warn`, and upstream or configuration failures at `error`. Events go to stdout and are
//! appended to `NEWSDESK_LOG_FILE` (default `logs/newsdesk.log`).
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_ENV: &str = "NEWSDESK_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "logs/newsdesk.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `debug` selects between `debug` and `info`.
pub fn init_tracing(debug: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(debug)));
    let stdout_layer = fmt::layer().with_target(false).compact();
    let file_layer = open_log_file().map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

fn default_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

fn log_file_path(configured: Option<String>) -> PathBuf {
    configured
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Non-blocking appender for the log file, or `None` when it cannot be opened.
fn open_log_file() -> Option<NonBlocking> {
    let path = log_file_path(std::env::var(LOG_FILE_ENV).ok());
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create log directory {}: {err}", parent.display());
            return None;
        }
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let _ = LOG_GUARD.set(guard);
            Some(writer)
        }
        Err(err) => {
            eprintln!("Failed to open log file {}: {err}", path.display());
            None
        }
    }
}
