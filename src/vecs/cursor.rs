//! Physical-slot cursors over a [`RingBuffer`].
//!
//! A cursor stores the buffer it belongs to and a *physical* slot index, never
//! a logical one.  Its logical position is recomputed from the buffer's current
//! `head` whenever it is needed, so an element keeps its cursor when values are
//! pushed at either end of the buffer.
//!
//! [`Cursor`] is the shared, `Copy` variant and cannot outlive or coexist with a
//! mutation of the buffer.  [`CursorMut`] borrows the buffer exclusively and is
//! the way to keep a position while pushing.

use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use super::ring_buffer::RingBuffer;
use crate::error::Result;

/// Read-only random-access cursor.
pub struct Cursor<'a, T> {
    ring: &'a RingBuffer<T>,
    slot: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(ring: &'a RingBuffer<T>, slot: usize) -> Self {
        Self { ring, slot }
    }

    /// Physical slot the cursor points at.
    #[inline]
    pub fn physical_slot(&self) -> usize {
        self.slot
    }

    /// Offset of the cursor from the buffer's current front.
    #[inline]
    pub fn logical_position(&self) -> usize {
        self.ring.logical(self.slot)
    }

    /// The element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.logical_position() < self.ring.len() {
            // SAFETY: the slot is inside the occupied run.
            Some(unsafe { &*self.ring.slot_ptr(self.slot) })
        } else {
            None
        }
    }

    /// The element `delta` positions away, or `None` if that position is
    /// outside the occupied run.
    #[inline]
    pub fn peek(&self, delta: isize) -> Option<&'a T> {
        self.offset(delta).get()
    }

    /// Advances one slot, wrapping around the storage.
    #[inline]
    pub fn move_next(&mut self) {
        self.slot = self.ring.wrap_add(self.slot, 1);
    }

    /// Steps back one slot, wrapping around the storage.
    #[inline]
    pub fn move_prev(&mut self) {
        self.slot = self.ring.wrap_sub(self.slot, 1);
    }

    /// Moves the cursor by `delta` slots, wrapping around the storage.
    #[inline]
    pub fn seek(&mut self, delta: isize) {
        self.slot = self.ring.wrap_offset(self.slot, delta);
    }

    /// Returns a copy of the cursor moved by `delta`.
    #[inline]
    pub fn offset(mut self, delta: isize) -> Self {
        self.seek(delta);
        self
    }

    /// Signed logical distance `self - other`.
    #[inline]
    pub fn distance_from(&self, other: &Cursor<'_, T>) -> isize {
        self.logical_position() as isize - other.logical_position() as isize
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ring, other.ring) && self.slot == other.slot
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Cursors order by logical position; cursors over different buffers are
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.ring, other.ring) {
            Some(self.logical_position().cmp(&other.logical_position()))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("slot", &self.slot)
            .field("logical", &self.logical_position())
            .finish()
    }
}

/// Random-access cursor with exclusive access to its buffer.
///
/// Pushing or popping through the cursor keeps it on the same element.  Pops
/// never reallocate and neither do most pushes, so that falls out of the
/// physical-slot addressing; when a push reallocates, the cursor is
/// re-anchored to the element's new slot.
///
/// A cursor at the end position of a *full* buffer shares the head slot and
/// therefore reads as logical position 0, i.e. the front element.
pub struct CursorMut<'a, T> {
    ring: &'a mut RingBuffer<T>,
    slot: usize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(ring: &'a mut RingBuffer<T>, slot: usize) -> Self {
        Self { ring, slot }
    }

    /// Physical slot the cursor points at.
    #[inline]
    pub fn physical_slot(&self) -> usize {
        self.slot
    }

    /// Offset of the cursor from the buffer's current front.
    #[inline]
    pub fn logical_position(&self) -> usize {
        self.ring.logical(self.slot)
    }

    /// Read-only view of this position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.ring, self.slot)
    }

    /// The element under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.logical_position() < self.ring.len() {
            // SAFETY: the slot is inside the occupied run.
            Some(unsafe { &*self.ring.slot_ptr(self.slot) })
        } else {
            None
        }
    }

    /// Mutable access to the element under the cursor.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.logical_position() < self.ring.len() {
            // SAFETY: the slot is inside the occupied run and the buffer is
            // exclusively borrowed.
            Some(unsafe { &mut *self.ring.slot_ptr(self.slot) })
        } else {
            None
        }
    }

    /// The element `delta` positions away, if inside the occupied run.
    #[inline]
    pub fn peek(&self, delta: isize) -> Option<&T> {
        self.as_cursor().offset(delta).get()
    }

    /// Advances one slot, wrapping around the storage.
    #[inline]
    pub fn move_next(&mut self) {
        self.slot = self.ring.wrap_add(self.slot, 1);
    }

    /// Steps back one slot, wrapping around the storage.
    #[inline]
    pub fn move_prev(&mut self) {
        self.slot = self.ring.wrap_sub(self.slot, 1);
    }

    /// Moves the cursor by `delta` slots, wrapping around the storage.
    #[inline]
    pub fn seek(&mut self, delta: isize) {
        self.slot = self.ring.wrap_offset(self.slot, delta);
    }

    /// Appends to the owning buffer; the cursor keeps its element.
    pub fn push_back(&mut self, value: T) {
        let logical = self.logical_position();
        let capacity = self.ring.capacity();
        self.ring.push_back(value);
        if self.ring.capacity() != capacity {
            self.slot = self.ring.physical(logical);
        }
    }

    /// Prepends to the owning buffer; the cursor keeps its element.
    pub fn push_front(&mut self, value: T) {
        let logical = self.logical_position();
        let capacity = self.ring.capacity();
        self.ring.push_front(value);
        if self.ring.capacity() != capacity {
            self.slot = self.ring.physical(logical + 1);
        }
    }

    /// Removes the first element of the owning buffer.
    ///
    /// The cursor keeps its element; if it was on the popped element it moves
    /// to the end position.
    pub fn pop_front(&mut self) -> Result<T> {
        let on_popped = self.logical_position() == 0;
        let value = self.ring.pop_front()?;
        if on_popped {
            self.slot = self.ring.physical(self.ring.len());
        }
        Ok(value)
    }

    /// Removes the last element of the owning buffer.
    ///
    /// The cursor keeps its element.  A cursor on the popped element, or at
    /// the end position, ends up at the new end position.
    pub fn pop_back(&mut self) -> Result<T> {
        let at_end = self.logical_position() >= self.ring.len();
        let value = self.ring.pop_back()?;
        if at_end {
            self.slot = self.ring.physical(self.ring.len());
        }
        Ok(value)
    }

    /// Number of elements in the owning buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the owning buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("slot", &self.slot)
            .field("logical", &self.logical_position())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stability_across_end_pushes() {
        let mut words: RingBuffer<String> = RingBuffer::with_capacity(10);
        for w in ["hello", "world", "test"] {
            words.push_back(w.to_string());
        }
        let mut cursor = words.cursor_at_mut(1);
        assert_eq!(cursor.get().map(String::as_str), Some("world"));

        cursor.push_front("first".to_string());
        assert_eq!(cursor.get().map(String::as_str), Some("world"));
        cursor.push_back("last".to_string());
        assert_eq!(cursor.get().map(String::as_str), Some("world"));
        assert_eq!(cursor.logical_position(), 2);

        let all: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(all, vec!["first", "hello", "world", "test", "last"]);
    }

    #[test]
    fn test_cursor_mut_reanchors_after_reallocation() {
        let mut ring: RingBuffer<i32> = RingBuffer::new();
        ring.extend([10, 20, 30, 40]);
        assert_eq!(ring.capacity(), 4);
        let mut cursor = ring.cursor_at_mut(2);
        cursor.push_front(0); // grows 4 -> 8
        assert_eq!(cursor.get(), Some(&30));
        for v in 50..60 {
            cursor.push_back(v);
        }
        assert_eq!(cursor.get(), Some(&30));
        assert_eq!(cursor.logical_position(), 3);
        *cursor.get_mut().unwrap() = 33;
        assert_eq!(ring[3], 33);
    }

    #[test]
    fn test_cursor_mut_pops_at_either_end_keep_element() {
        let mut words: RingBuffer<String> = RingBuffer::with_capacity(8);
        for w in ["hello", "world", "test"] {
            words.push_back(w.to_string());
        }
        let mut cursor = words.cursor_at_mut(1);
        assert_eq!(cursor.pop_front().as_deref(), Ok("hello"));
        assert_eq!(cursor.get().map(String::as_str), Some("world"));
        assert_eq!(cursor.logical_position(), 0);

        assert_eq!(cursor.pop_back().as_deref(), Ok("test"));
        assert_eq!(cursor.get().map(String::as_str), Some("world"));
        assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn test_cursor_mut_pop_own_element_moves_to_end() {
        let mut ring: RingBuffer<i32> = (1..=4).collect();
        ring.pop_back().unwrap();

        let mut front = ring.cursor_front_mut();
        assert_eq!(front.pop_front(), Ok(1));
        assert_eq!(front.get(), None);
        assert_eq!(front.logical_position(), front.len());

        let mut back = ring.cursor_at_mut(1);
        assert_eq!(back.get(), Some(&3));
        assert_eq!(back.pop_back(), Ok(3));
        assert_eq!(back.get(), None);
        assert_eq!(back.logical_position(), 1);

        // an end cursor stays at the end
        assert_eq!(back.pop_back(), Ok(2));
        assert_eq!(back.logical_position(), 0);
        assert!(back.is_empty());
        assert_eq!(back.pop_front(), Err(crate::CollectionError::EmptyContainer));
        assert_eq!(back.pop_back(), Err(crate::CollectionError::EmptyContainer));
    }

    #[test]
    fn test_cursor_mut_end_of_full_buffer_is_front() {
        let mut partial: RingBuffer<i32> = RingBuffer::with_capacity(4);
        partial.extend([1, 2, 3]);
        let mut end = partial.cursor_at_mut(3);
        end.push_back(99);
        assert_eq!(end.get(), Some(&99));

        let mut full: RingBuffer<i32> = (1..=4).collect();
        assert_eq!(full.len(), full.capacity());
        let mut end = full.cursor_at_mut(4);
        assert_eq!(end.logical_position(), 0);
        end.push_back(99);
        assert_eq!(end.get(), Some(&1));
    }

    #[test]
    fn test_cursor_walk_forward_and_back_over_wrap() {
        let mut ring = RingBuffer::with_capacity(8);
        ring.push_back(2);
        ring.push_back(3);
        ring.push_front(1);
        ring.push_front(0); // head = 6, run wraps
        let mut c = ring.cursor_front();
        let mut seen = Vec::new();
        while c != ring.cursor_end() {
            seen.push(*c.get().unwrap());
            c.move_next();
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);

        let mut back = Vec::new();
        let mut c = ring.cursor_end();
        loop {
            c.move_prev();
            back.push(*c.get().unwrap());
            if c == ring.cursor_front() {
                break;
            }
        }
        assert_eq!(back, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_cursor_end_aliases_front_when_full() {
        let ring: RingBuffer<i32> = (0..4).collect();
        assert_eq!(ring.len(), ring.capacity());
        assert_eq!(ring.cursor_end(), ring.cursor_front());

        let partial: RingBuffer<i32> = (0..3).collect();
        assert_eq!(partial.cursor_end().get(), None);
        assert_eq!(partial.cursor_end().logical_position(), 3);
    }

    #[test]
    fn test_cursor_ordering_uses_logical_position() {
        let mut ring = RingBuffer::with_capacity(8);
        ring.extend([3, 4, 5]);
        for v in [2, 1, 0] {
            ring.push_front(v); // head wraps to slot 5
        }
        let first = ring.cursor_front();
        let last = ring.cursor_at(5);
        // physical slot of the front is larger than that of the back
        assert!(first.physical_slot() > last.physical_slot());
        assert!(first < last);
        assert_eq!(last.distance_from(&first), 5);
        assert_eq!(first.distance_from(&last), -5);
        assert_eq!(first.peek(4), Some(&4));
        assert_eq!(last.peek(-5), Some(&0));
        assert_eq!(first.offset(3).get(), Some(&3));
        assert_eq!(first.peek(6), None);
    }

    #[test]
    fn test_cursor_different_buffers_unordered() {
        let a: RingBuffer<i32> = (0..2).collect();
        let b: RingBuffer<i32> = (0..2).collect();
        assert_ne!(a.cursor_front(), b.cursor_front());
        assert_eq!(a.cursor_front().partial_cmp(&b.cursor_front()), None);
    }

    #[test]
    fn test_cursor_on_empty_buffer() {
        let ring: RingBuffer<i32> = RingBuffer::new();
        assert_eq!(ring.cursor_front(), ring.cursor_end());
        assert_eq!(ring.cursor_front().get(), None);
    }
}
