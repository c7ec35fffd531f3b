//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! level. Output goes to stderr, or to a file through a non-blocking
//! `tracing-appender` writer whose guard must be held until shutdown.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Default filter directive, e.g. "info" or "foundations=debug"
    pub level: String,
    pub format: LogFormat,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init(options: &LogOptions) -> Result<Option<WorkerGuard>, TryInitError> {
    let (writer, guard) = match &options.file {
        Some(path) => {
            let appender = tracing_appender::rolling::never(
                path.parent().unwrap_or_else(|| Path::new(".")),
                path.file_name()
                    .unwrap_or_else(|| OsStr::new("foundations.log")),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };
    let ansi = options.file.is_none();

    let registry = tracing_subscriber::registry().with(build_filter(&options.level));
    match options.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Text => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(writer))
            .try_init()?,
    }

    Ok(guard)
}
