// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bounded line buffer keeps the last N lines of an input in O(N) memory. See
//! [`BoundedLineBuffer`] for details.

// Attach sources.
pub mod bounded_line_buffer;

// Re-export.
pub use bounded_line_buffer::*;
