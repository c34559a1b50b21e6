// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints the last N lines (10 by default) of a file, or of stdin.
//!
//! ```text
//! tailn [-n NUM] [FILE] [-l]
//! ```

use clap::Parser;
use tailn_cmdr::{CLIArg, try_run};
use tailn_core::{CommonResult, try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // Usage errors print help and exit w/ status 2.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = try_run(&cli_arg);

    match &result {
        Ok(report) => {
            tracing::debug!(message = "Stop logging...", report = ?report);
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run tailn due to the following problem",
                error = ?error
            );
        }
    }

    // The error is printed to stderr by miette, and the exit status is 1.
    result.map(|_| ())
}
