// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File,
          io::{BufReader, BufWriter, Write}};

use tailn_core::{CommonResult, TailError, TailReport, tail_lines};

use crate::CLIArg;

/// Prints the last lines of the file named in `cli_arg` (or of stdin) to stdout.
///
/// # Errors
///
/// Any [`TailError`], eg: the file can't be opened, or a line is too long.
pub fn try_run(cli_arg: &CLIArg) -> CommonResult<TailReport> {
    let stdout = std::io::stdout();
    let writer = BufWriter::new(stdout.lock());
    try_run_with_writer(cli_arg, writer)
}

/// Same as [`try_run`], but writes to `writer` instead of stdout.
///
/// # Errors
///
/// Same as [`try_run`].
pub fn try_run_with_writer(
    cli_arg: &CLIArg,
    writer: impl Write,
) -> CommonResult<TailReport> {
    let config = cli_arg.try_to_tail_config()?;

    let report = match &cli_arg.file_path {
        Some(path) => {
            let file = File::open(path).map_err(|source| TailError::FileOpen {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(message = "Reading file", path = %path);
            tail_lines(BufReader::new(file), writer, &config)?
        }
        None => {
            tracing::debug!(message = "Reading stdin");
            let stdin = std::io::stdin();
            tail_lines(stdin.lock(), writer, &config)?
        }
    };

    Ok(report)
}
