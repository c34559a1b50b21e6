// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Log file used when none is given. It lives in the current folder.
pub const DEFAULT_LOG_FILE_NAME: &str = "tailn_log.txt";

/// Where log output that is meant for a human goes. There is no `stdout` option, since
/// `stdout` carries the lines that `tailn` prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayPreference {
    Stderr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path of the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Level and destination of log output. Pass anything that converts into this to
/// [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`]:
///
/// ```no_run
/// use tailn_core::{TracingConfig, DisplayPreference, WriterConfig,
///                  try_initialize_logging_global};
///
/// let config = TracingConfig {
///     level_filter: tracing_core::LevelFilter::INFO,
///     writer_config: WriterConfig::DisplayAndFile(
///         DisplayPreference::Stderr,
///         "my_log.txt".to_string(),
///     ),
/// };
///
/// try_initialize_logging_global(config).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

/// Logs to [`DEFAULT_LOG_FILE_NAME`] at the given level.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

/// Logs to the given writer at [`LevelFilter::DEBUG`].
impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}
