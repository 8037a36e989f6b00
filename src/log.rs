// src/log.rs
use std::path::PathBuf;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

#[derive(Clone, Debug)]
pub struct LogOptions {
    /// Directive used when `RUST_LOG` is unset (e.g. "info", "trivia_export=debug").
    pub default_filter: String,
    /// Also append plain-text lines to `<dir>/<LOG_FILE>`.
    pub to_file: bool,
    pub dir: PathBuf,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            default_filter: s!("info"),
            to_file: false,
            dir: PathBuf::from(STORE_DIR),
        }
    }
}

impl LogOptions {
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}

/// Install the global subscriber. Stdout is left alone: console export owns it.
///
/// Keep the returned guard alive for the whole run, otherwise buffered file
/// lines are dropped on exit. Calling this twice is harmless; the second
/// install fails quietly and the first subscriber stays in place.
/// If the log file can't be opened, logging falls back to stderr only.
pub fn init(opts: &LogOptions) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&opts.default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if !opts.to_file {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return None;
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&opts.dir);

    let appender = match appender {
        Ok(a) => a,
        Err(e) => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init();
            tracing::warn!("Log: file logging off, cannot open {}: {}", opts.log_path().display(), e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Some(guard)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
