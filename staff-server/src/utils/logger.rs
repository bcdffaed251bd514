//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the configured level. With a log
//! directory, output goes to a daily rolling file instead of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("staff_server={level},http_access={level},tower_http={level},sqlx=warn")
}

/// Initialize the logger with optional JSON formatting and file output
///
/// A second call is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let log_dir = match log_dir {
        Some(dir) if Path::new(dir).exists() => Some(dir),
        Some(dir) => {
            eprintln!("Log directory {dir} does not exist, logging to stdout");
            None
        }
        None => None,
    };

    let result = match (json, log_dir) {
        (true, Some(dir)) => subscriber
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, "staff-server"))
            .with_ansi(false)
            .try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(dir)) => subscriber
            .with_writer(tracing_appender::rolling::daily(dir, "staff-server"))
            .with_ansi(false)
            .try_init(),
        (false, None) => subscriber.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
