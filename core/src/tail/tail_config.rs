// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MAX_LINE_LENGTH, TailError};

/// How many lines are printed when the user doesn't say.
pub const DEFAULT_LINE_COUNT: usize = 10;

/// What the read loop needs to know. The command line arguments are mapped into this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TailConfig {
    /// The "N" in "the last N lines". Also the capacity of the line buffer.
    pub line_count: usize,
    /// Longest accepted line, in bytes, not counting the terminator.
    pub max_line_length: usize,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            line_count: DEFAULT_LINE_COUNT,
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl TailConfig {
    /// # Errors
    ///
    /// [`TailError::InvalidCapacity`] if `line_count` is zero.
    pub fn try_new(line_count: usize, max_line_length: usize) -> Result<Self, TailError> {
        if line_count == 0 {
            return Err(TailError::InvalidCapacity {
                requested: line_count,
            });
        }
        Ok(Self {
            line_count,
            max_line_length,
        })
    }
}
