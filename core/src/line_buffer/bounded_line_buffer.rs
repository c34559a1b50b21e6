// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use crate::{RingBufferHeap, RingBufferHeapIterator, TailError};

/// The longest line that is accepted, in bytes, not counting the line terminator.
pub const MAX_LINE_LENGTH: usize = 4095;

/// Keeps the last `capacity` lines of an input stream, each one an owned byte string.
///
/// Lines are raw bytes, so they don't have to be valid UTF-8, and they come back out
/// exactly as they went in. The length limit applies to those raw bytes.
///
/// Memory use is bounded by `capacity * max_line_length`, no matter how many lines are
/// pushed. Once the buffer is full, every [`push`](Self::push) evicts (and drops) the
/// oldest line. Lines come back out oldest first, via [`pop`](Self::pop) or
/// [`drain_up_to`](Self::drain_up_to).
///
/// The buffer never logs or prints. Every failure is returned to the caller.
///
/// # Examples
///
/// ```
/// use tailn_core::BoundedLineBuffer;
///
/// let mut buffer = BoundedLineBuffer::try_new(3).unwrap();
/// for line in ["a\n", "b\n", "c\n", "d\n", "e\n"] {
///     buffer.push(line).unwrap();
/// }
///
/// let last_lines: Vec<Vec<u8>> = buffer.drain_up_to(3).collect();
/// assert_eq!(last_lines, vec![b"c\n".to_vec(), b"d\n".to_vec(), b"e\n".to_vec()]);
/// assert!(buffer.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedLineBuffer {
    ring_buffer: RingBufferHeap<Vec<u8>>,
    max_line_length: usize,
}

impl BoundedLineBuffer {
    /// Creates a buffer that holds up to `capacity` lines of at most
    /// [`MAX_LINE_LENGTH`] bytes each.
    ///
    /// # Errors
    ///
    /// - [`TailError::InvalidCapacity`] if `capacity` is zero.
    /// - [`TailError::Allocation`] if the slots can't be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, TailError> {
        Self::try_new_with_max_line_length(capacity, MAX_LINE_LENGTH)
    }

    /// # Errors
    ///
    /// Same as [`Self::try_new`].
    pub fn try_new_with_max_line_length(
        capacity: usize,
        max_line_length: usize,
    ) -> Result<Self, TailError> {
        Ok(Self {
            ring_buffer: RingBufferHeap::try_new(capacity)?,
            max_line_length,
        })
    }

    /// Copies `line` into a newly owned buffer and stores it as the newest line. If the
    /// buffer is full, the oldest line is dropped. Both `&str` and `&[u8]` are accepted.
    ///
    /// The terminator (if any) is kept as part of the stored line.
    ///
    /// # Errors
    ///
    /// - [`TailError::LineTooLong`] if `line` (minus its terminator) is longer than the
    ///   maximum line length.
    /// - [`TailError::Allocation`] if the copy can't be allocated.
    ///
    /// The buffer is left untouched in both cases.
    pub fn push(&mut self, line: impl AsRef<[u8]>) -> Result<(), TailError> {
        let line = line.as_ref();
        self.check_line_length(line)?;

        let mut owned_line = Vec::new();
        owned_line
            .try_reserve_exact(line.len())
            .map_err(|_| TailError::Allocation { what: "line copy" })?;
        owned_line.extend_from_slice(line);

        drop(self.ring_buffer.add(owned_line));
        Ok(())
    }

    /// Same as [`Self::push`], but takes ownership of a line that is already allocated,
    /// so no copy is made.
    ///
    /// # Errors
    ///
    /// [`TailError::LineTooLong`], and the buffer is left untouched.
    pub fn push_owned(&mut self, line: Vec<u8>) -> Result<(), TailError> {
        self.check_line_length(&line)?;
        drop(self.ring_buffer.add(line));
        Ok(())
    }

    /// Removes the oldest line and hands it to the caller. Returns `None` when the
    /// buffer is empty.
    pub fn pop(&mut self) -> Option<Vec<u8>> { self.ring_buffer.remove() }

    /// Lazily pops up to `n` lines, oldest to newest. Lines the iterator doesn't get to
    /// (because it is dropped early) stay in the buffer.
    pub fn drain_up_to(&mut self, n: usize) -> DrainUpTo<'_> {
        DrainUpTo {
            buffer: self,
            remaining: n,
        }
    }

    /// Drops every line that is still held, then the slots themselves. Taking `self`
    /// by value means the buffer can't be used (or destroyed) again afterwards.
    pub fn destroy(self) { drop(self); }

    /// Drops every line that is still held. The capacity stays the same.
    pub fn clear(&mut self) { self.ring_buffer.clear(); }

    /// Index 0 is the oldest line.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.ring_buffer.get(index).map(Vec::as_slice)
    }

    /// Borrows the lines, oldest to newest, without removing them.
    #[must_use]
    pub fn iter(&self) -> RingBufferHeapIterator<'_, Vec<u8>> { self.ring_buffer.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.ring_buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ring_buffer.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.ring_buffer.is_full() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.ring_buffer.capacity() }

    #[must_use]
    pub fn max_line_length(&self) -> usize { self.max_line_length }

    fn check_line_length(&self, line: &[u8]) -> Result<(), TailError> {
        let length = line_length_without_terminator(line);
        if length > self.max_line_length {
            return Err(TailError::LineTooLong {
                length,
                max: self.max_line_length,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BoundedLineBuffer {
    type Item = &'a Vec<u8>;
    type IntoIter = RingBufferHeapIterator<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Length in bytes, not counting a trailing `"\n"` or `"\r\n"`.
#[must_use]
pub fn line_length_without_terminator(line: &[u8]) -> usize {
    let content = line
        .strip_suffix(b"\n")
        .map_or(line, |it| it.strip_suffix(b"\r").unwrap_or(it));
    content.len()
}

/// Returned by [`BoundedLineBuffer::drain_up_to`].
#[derive(Debug)]
pub struct DrainUpTo<'a> {
    buffer: &'a mut BoundedLineBuffer,
    remaining: usize,
}

impl Iterator for DrainUpTo<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let line = self.buffer.pop()?;
        self.remaining -= 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let it = self.remaining.min(self.buffer.len());
        (it, Some(it))
    }
}

impl ExactSizeIterator for DrainUpTo<'_> {}

impl FusedIterator for DrainUpTo<'_> {}
