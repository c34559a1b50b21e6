// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tailn_core
//!
//! Everything that the `tailn` command line tool does, minus argument parsing. It prints
//! the last N lines of its input, and it uses memory proportional to N, not to the size
//! of the input.
//!
//! # Table of contents
//!
//! - [How it works](#how-it-works)
//! - [Memory](#memory)
//! - [Logging](#logging)
//!
//! # How it works
//! <a id="markdown-how-it-works" name="how-it-works"></a>
//!
//! 1. [`LineReader`] splits the input into lines, keeping each line's terminator.
//! 2. Each line is pushed into a [`BoundedLineBuffer`] w/ a capacity of N. Once it is
//!    full, every push evicts the oldest line.
//! 3. At the end of the input, [`BoundedLineBuffer::drain_up_to`] hands out the lines
//!    that are left, oldest first, and they are written out verbatim.
//!
//! [`tail_lines`] ties these steps together:
//!
//! ```
//! use tailn_core::{TailConfig, tail_lines};
//!
//! let mut output = Vec::new();
//! let report = tail_lines(
//!     "1\n2\n3\n4\n".as_bytes(),
//!     &mut output,
//!     &TailConfig::try_new(2, 4095).unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(output, b"3\n4\n");
//! assert_eq!(report.lines_read, 4);
//! ```
//!
//! # Memory
//! <a id="markdown-memory" name="memory"></a>
//!
//! The buffer's N slots are reserved up front, and each stored line is its own heap
//! allocation, which is freed when the line is evicted, drained, or the buffer is
//! destroyed. Lines longer than [`MAX_LINE_LENGTH`] bytes (not counting the terminator)
//! are rejected w/ [`TailError::LineTooLong`]. Allocation failures are reported as
//! [`TailError::Allocation`] rather than aborting.
//!
//! # Logging
//! <a id="markdown-logging" name="logging"></a>
//!
//! Logging is off unless [`try_initialize_logging_global`] (or
//! [`try_initialize_logging_thread_local`]) is called. See the [`mod@log`] module.

// Enforce strict error handling in production code, allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod line_buffer;
pub mod log;
pub mod tail;

// Re-export.
pub use common::*;
pub use line_buffer::*;
pub use log::*;
pub use tail::*;
