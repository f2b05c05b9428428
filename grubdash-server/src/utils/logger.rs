//! Logging Infrastructure
//!
//! Structured logging setup for both development and production environments:
//! - Console output, plain text or JSON
//! - Optional daily rotating JSON log files
//! - `RUST_LOG` overrides the configured level

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file name prefix inside the log directory
const LOG_FILE_PREFIX: &str = "grubdash-server";

/// Create the log directory (if needed) and a daily rotating appender in it
pub fn rolling_appender(log_dir: &Path) -> std::io::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)?;
    Ok(RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        LOG_FILE_PREFIX,
    ))
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON console output (production) instead of plain text
/// * `log_dir` - Optional directory for daily rotated JSON log files
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => Some(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_writer(rolling_appender(Path::new(dir))?),
        ),
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_thread_ids(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_target(false),
            )
            .try_init()?;
    }

    Ok(())
}
