// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line front end for [`tailn_core`]: argument parsing, and choosing between a
//! file and stdin. The `tailn` binary is a thin wrapper around [`try_run`].

// Enforce strict error handling in production code, allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod launcher;

// Re-export.
pub use clap_config::*;
pub use launcher::*;
