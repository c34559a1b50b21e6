// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read loop that connects an input, the [`crate::BoundedLineBuffer`], and an
//! output.

// Attach sources.
pub mod line_reader;
pub mod tail_config;
pub mod tail_lines;

// Re-export.
pub use line_reader::*;
pub use tail_config::*;
pub use tail_lines::*;
