//! Run-scoped logging
//!
//! A [`LogHandle`] is built explicitly for one run instead of installing a
//! process-wide subscriber. It writes level-tagged, timestamped lines to a
//! log file that is truncated when the handle is created, and optionally
//! mirrors events to stderr. Events reach it while a guard returned by
//! [`LogHandle::enter`] is alive on the current thread, or from a future
//! wrapped with its [`LogHandle::dispatch`].
//!
//! The file writer is non-blocking; buffered lines are flushed when the
//! handle is dropped, so drop it before calling `std::process::exit`.

use crate::config::DEFAULT_LOG_FILE;
use crate::error::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::dispatcher::{self, DefaultGuard};
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable overriding the stderr filter
pub const LOG_ENV_VAR: &str = "DATOS_EXTRACT_LOG";

/// Configuration for a [`LogHandle`]
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log file, truncated on open
    pub file: PathBuf,
    /// Most verbose level written to the file
    pub file_level: LevelFilter,
    /// Mirror events to stderr
    pub console: bool,
    /// Default stderr filter when `DATOS_EXTRACT_LOG` is unset
    pub console_directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            file_level: LevelFilter::DEBUG,
            console: true,
            console_directive: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Log to `file` with default levels
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    /// Turn the stderr mirror on or off
    #[must_use]
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Set the default stderr filter
    #[must_use]
    pub fn with_console_directive(mut self, directive: impl Into<String>) -> Self {
        self.console_directive = directive.into();
        self
    }
}

/// An explicitly constructed logging handle
pub struct LogHandle {
    dispatch: Dispatch,
    path: PathBuf,
    _file_guard: WorkerGuard,
}

impl LogHandle {
    /// Open (and truncate) the log file and build the subscriber
    pub fn new(config: &LogConfig) -> Result<Self> {
        let file = File::create(&config.file)?;
        let (writer, file_guard) = tracing_appender::non_blocking(file);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(config.file_level);

        let console_layer = config.console.then(|| {
            let env_filter = EnvFilter::builder()
                .with_env_var(LOG_ENV_VAR)
                .try_from_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console_directive));
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter)
        });

        let subscriber = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            path: config.file.clone(),
            _file_guard: file_guard,
        })
    }

    /// Route this thread's events to the handle until the guard drops
    pub fn enter(&self) -> DefaultGuard {
        dispatcher::set_default(&self.dispatch)
    }

    /// The subscriber, for attaching to a future with
    /// [`WithSubscriber`](tracing::instrument::WithSubscriber)
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
