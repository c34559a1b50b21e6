// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed-size ring buffer implementation using heap allocation. The capacity is
//! chosen at runtime (it comes from the command line), and it never changes after
//! construction.

use std::fmt::Debug;

use crate::TailError;

/// Overwrite-oldest FIFO queue over a `Vec<Option<T>>`.
///
/// - `head` is the index of the next insertion point.
/// - `tail` is the index of the oldest item (the next removal point).
/// - `count` is the number of items currently held, in `[0, capacity]`.
///
/// Every item is owned by exactly one slot. Overwriting, removing, or clearing a slot
/// drops (or hands out) that item right away, and dropping the ring buffer drops
/// whatever is still held.
///
/// Two ring buffers are equal when they have the same capacity and hold equal items in
/// the same oldest to newest order. Where those items sit in the slots doesn't matter.
///
/// # Examples
///
/// ```
/// use tailn_core::RingBufferHeap;
///
/// let mut ring_buffer = RingBufferHeap::try_new(3).unwrap();
///
/// ring_buffer.add(1);
/// ring_buffer.add(2);
/// ring_buffer.add(3);
/// assert!(ring_buffer.is_full());
///
/// // Evicts the oldest item.
/// assert_eq!(ring_buffer.add(4), Some(1));
/// assert_eq!(ring_buffer.iter().collect::<Vec<&i32>>(), vec![&2, &3, &4]);
///
/// assert_eq!(ring_buffer.remove(), Some(2));
/// assert_eq!(ring_buffer.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RingBufferHeap<T> {
    internal_storage: Vec<Option<T>>,
    capacity: usize,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> RingBufferHeap<T> {
    /// The slots are reserved up front (so pushing never reallocates), and they are
    /// filled in lazily as items are added.
    ///
    /// # Errors
    ///
    /// - [`TailError::InvalidCapacity`] if `capacity` is zero.
    /// - [`TailError::Allocation`] if the slots can't be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, TailError> {
        if capacity == 0 {
            return Err(TailError::InvalidCapacity {
                requested: capacity,
            });
        }

        let mut internal_storage = Vec::new();
        internal_storage
            .try_reserve_exact(capacity)
            .map_err(|_| TailError::Allocation { what: "line slots" })?;

        Ok(Self {
            internal_storage,
            capacity,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Insert at head (ie, insert the newest item). When the buffer is full, the oldest
    /// item is evicted and returned.
    pub fn add(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() { self.remove() } else { None };

        // Until every slot has been written once, head is always at the end of the
        // storage.
        match self.internal_storage.get_mut(self.head) {
            Some(slot) => *slot = Some(value),
            None => self.internal_storage.push(Some(value)),
        }
        self.head = (self.head + 1) % self.capacity;
        self.count += 1;

        evicted
    }

    /// Remove from tail (ie, remove the oldest item).
    pub fn remove(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self
            .internal_storage
            .get_mut(self.tail)
            .and_then(Option::take);
        self.tail = (self.tail + 1) % self.capacity;
        self.count -= 1;
        value
    }

    /// Drops every item that is still held. The slots stay allocated.
    pub fn clear(&mut self) {
        self.internal_storage.clear();
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Index 0 is the oldest item.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }

        let actual_index = (self.tail + index) % self.capacity;
        self.internal_storage
            .get(actual_index)
            .and_then(Option::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.count }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool { self.count == self.capacity }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Oldest to newest.
    #[must_use]
    pub fn iter(&self) -> RingBufferHeapIterator<'_, T> {
        RingBufferHeapIterator {
            ring_buffer: self,
            iterator_index: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for RingBufferHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBufferHeap<T> {}

/// This implementation allows the ring buffer to be used in a for loop directly.
impl<'a, T> IntoIterator for &'a RingBufferHeap<T> {
    type Item = &'a T;
    type IntoIter = RingBufferHeapIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[derive(Debug)]
pub struct RingBufferHeapIterator<'a, T> {
    ring_buffer: &'a RingBufferHeap<T>,
    iterator_index: usize,
}

impl<'a, T> Iterator for RingBufferHeapIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.ring_buffer.get(self.iterator_index)?;
        self.iterator_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring_buffer.len().saturating_sub(self.iterator_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RingBufferHeapIterator<'_, T> {}
