// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{BufRead, Read},
          iter::FusedIterator};

use crate::{MAX_LINE_LENGTH, TailError};

/// Splits a [`BufRead`] into lines, one owned byte string per line, w/ the terminator
/// (`"\n"` or `"\r\n"`) kept verbatim at the end of each line. The last line of the
/// input may have no terminator. Bytes are never decoded, so input that isn't UTF-8
/// (eg: Latin-1, or binary) comes through unchanged.
///
/// Memory use is bounded: at most `max_line_length + 2` bytes (room for `"\r\n"`) are
/// buffered for a single line. A line that doesn't fit is skipped over without being
/// stored, reported as [`TailError::LineTooLong`], and then the reader stops (it is
/// fused). Lines that do fit are still checked for length by the
/// [`crate::BoundedLineBuffer`] they are pushed into.
///
/// # Examples
///
/// ```
/// use tailn_core::LineReader;
///
/// let input = b"first\nsecond\r\n\xe9t\xe9";
/// let lines: Vec<Vec<u8>> = LineReader::new(&input[..])
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines[0], b"first\n");
/// assert_eq!(lines[1], b"second\r\n");
/// assert_eq!(lines[2], b"\xe9t\xe9");
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    max_line_length: usize,
    line_buffer: Vec<u8>,
    is_done: bool,
}

impl<R: BufRead> LineReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::new_with_max_line_length(reader, MAX_LINE_LENGTH)
    }

    #[must_use]
    pub fn new_with_max_line_length(reader: R, max_line_length: usize) -> Self {
        Self {
            reader,
            max_line_length,
            line_buffer: Vec::new(),
            is_done: false,
        }
    }

    /// Returns `Ok(None)` at the end of the input, or after an error has been returned.
    ///
    /// # Errors
    ///
    /// - [`TailError::LineTooLong`] if a line doesn't fit in the read limit.
    /// - [`TailError::Io`] if the underlying reader fails.
    pub fn try_read_line(&mut self) -> Result<Option<Vec<u8>>, TailError> {
        if self.is_done {
            return Ok(None);
        }

        let result = self.read_one_line();
        if !matches!(result, Ok(Some(_))) {
            self.is_done = true;
        }
        result
    }

    fn read_one_line(&mut self) -> Result<Option<Vec<u8>>, TailError> {
        self.line_buffer.clear();

        let read_limit = self.max_line_length.saturating_add(2);
        let bytes_read = (&mut self.reader)
            .take(u64::try_from(read_limit).unwrap_or(u64::MAX))
            .read_until(b'\n', &mut self.line_buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let has_terminator = self.line_buffer.ends_with(b"\n");
        if !has_terminator && bytes_read == read_limit {
            let ends_with_carriage_return = self.line_buffer.ends_with(b"\r");
            let (skipped, found_newline, skipped_ends_with_carriage_return) =
                self.skip_rest_of_line()?;
            let mut length = bytes_read + skipped;
            let last_byte_is_carriage_return = if skipped == 0 {
                ends_with_carriage_return
            } else {
                skipped_ends_with_carriage_return
            };
            if found_newline && last_byte_is_carriage_return {
                length -= 1;
            }
            return Err(TailError::LineTooLong {
                length,
                max: self.max_line_length,
            });
        }

        // Hand over the bytes, and start the next line w/ a fresh buffer.
        Ok(Some(std::mem::take(&mut self.line_buffer)))
    }

    /// Consumes the input up to and including the next `'\n'`, without storing it.
    /// Returns the number of bytes skipped (not counting the `'\n'`), whether a `'\n'`
    /// was found, and whether the last skipped byte is a `'\r'`.
    fn skip_rest_of_line(&mut self) -> Result<(usize, bool, bool), TailError> {
        let mut skipped = 0;
        let mut last_byte = None;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok((skipped, false, last_byte == Some(b'\r')));
            }

            if let Some(index) = available.iter().position(|&it| it == b'\n') {
                if index > 0 {
                    last_byte = Some(available[index - 1]);
                }
                self.reader.consume(index + 1);
                return Ok((skipped + index, true, last_byte == Some(b'\r')));
            }

            let chunk_length = available.len();
            last_byte = available.last().copied();
            self.reader.consume(chunk_length);
            skipped += chunk_length;
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Vec<u8>, TailError>;

    fn next(&mut self) -> Option<Self::Item> { self.try_read_line().transpose() }
}

impl<R: BufRead> FusedIterator for LineReader<R> {}
