// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;

use super::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like the `tailn` binary.
/// - Pass anything that converts into [`TracingConfig`], eg: a [`LevelFilter`] (which
///   logs to [`super::DEFAULT_LOG_FILE_NAME`]) or a [`super::WriterConfig`].
///
/// Logging is **DISABLED** by **default**. Passing [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, so different threads (eg: different tests) can each have
/// their own. Logging stops when the returned guard is dropped.
///
/// Unlike [`try_initialize_logging_global`], passing [`LevelFilter::OFF`] returns
/// `Ok(None)`.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
