// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens (creating it if needed) the log file at `path_str` for appending. The file is
/// never rotated, so its name is used as is. A bare file name is created in the current
/// folder.
///
/// Note that if you wrap this up in a non blocking writer, the worker guard has to
/// outlive the program, or the tail end of the log is lost.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name component (eg: `/` or `some/folder/..`)
/// - The folder can't be created, or the file can't be opened (eg: due to permissions)
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Log file path {} has no file name component. Pass a path that ends in a file name, eg: `tailn_log.txt`.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
