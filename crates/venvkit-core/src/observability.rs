//! Observability: log initialization.
//!
//! `init_logging` builds a [`LogHandle`] owning a `tracing::Dispatch`. The
//! file layer exists only when a log directory is configured; the directory
//! is then created and a timestamped log file opened. Nothing is installed
//! process-wide: callers run work inside [`LogHandle::in_scope`].
//!
//! Each file line reads `<timestamp> - <line> <target> - <LEVEL> - <message>`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// `MM_DD_YY_HH_MM_SS.log`
pub const DEFAULT_FILE_NAME_PATTERN: &str = "%m_%d_%y_%H_%M_%S.log";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error("invalid console log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Everything `init_logging` needs; no field is read from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// No directory, no file layer.
    pub dir: Option<PathBuf>,
    /// chrono strftime pattern applied to the local start time.
    pub file_name_pattern: String,
    /// chrono strftime pattern for the per-line timestamp.
    pub timestamp_format: String,
    pub min_level: LevelFilter,
    /// Optional `EnvFilter` directive for a stderr mirror.
    pub console_filter: Option<String>,
}

impl LogConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::without_file()
        }
    }

    /// Console mirror only (if configured); nothing touches the filesystem.
    pub fn without_file() -> Self {
        Self {
            dir: None,
            file_name_pattern: DEFAULT_FILE_NAME_PATTERN.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            min_level: LevelFilter::INFO,
            console_filter: None,
        }
    }

    pub fn from_observability(cfg: &ObservabilityConfig) -> Result<Self, ObservabilityError> {
        let min_level = LevelFilter::from_str(cfg.log_level.trim())
            .map_err(|_| ObservabilityError::InvalidLevel(cfg.log_level.clone()))?;
        Ok(Self {
            min_level,
            console_filter: cfg.console_filter.clone(),
            dir: cfg.log_dir.clone(),
            ..Self::without_file()
        })
    }

    pub fn file_name_at(&self, at: NaiveDateTime) -> String {
        at.format(&self.file_name_pattern).to_string()
    }
}

/// Owns the dispatch built by [`init_logging`].
#[derive(Clone)]
pub struct LogHandle {
    path: Option<PathBuf>,
    dispatch: Dispatch,
}

impl LogHandle {
    /// Path of the log file, if a file layer was configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` with this handle's subscriber as the thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle").field("path", &self.path).finish()
    }
}

/// Build the dispatch. With `cfg.dir` set, create it if needed and open
/// (append) the timestamped file.
pub fn init_logging(cfg: &LogConfig) -> Result<LogHandle, ObservabilityError> {
    let (path, file) = match cfg.dir.as_deref() {
        Some(dir) => {
            let (path, file) = open_log_file(cfg, dir)?;
            (Some(path), Some(file))
        }
        None => (None, None),
    };

    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .event_format(LineFormat {
                timestamp_format: cfg.timestamp_format.clone(),
            })
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .with_filter(cfg.min_level)
    });

    let console_layer = match cfg.console_filter.as_deref() {
        Some(directive) => {
            let filter = EnvFilter::try_new(directive).map_err(|source| {
                ObservabilityError::InvalidFilter {
                    directive: directive.to_string(),
                    source,
                }
            })?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    let dispatch = Dispatch::new(
        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer),
    );

    Ok(LogHandle { path, dispatch })
}

fn open_log_file(cfg: &LogConfig, dir: &Path) -> Result<(PathBuf, File), ObservabilityError> {
    std::fs::create_dir_all(dir).map_err(|source| ObservabilityError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(cfg.file_name_at(Local::now().naive_local()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ObservabilityError::OpenFile {
            path: path.clone(),
            source,
        })?;
    Ok((path, file))
}

struct LineFormat {
    timestamp_format: String,
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} {} - {} - ",
            Local::now().format(&self.timestamp_format),
            meta.line().unwrap_or(0),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
