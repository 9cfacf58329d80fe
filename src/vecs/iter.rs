//! Iterators over a [`RingBuffer`].
//!
//! All three walk physical slots from `head`, wrapping with the capacity mask.
//! They are double-ended, so reverse traversal is just `.rev()`.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::ring_buffer::RingBuffer;

/// Shared iterator returned by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a RingBuffer<T>) -> Self {
        Self {
            ring,
            front: ring.head(),
            remaining: ring.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `front` is inside the occupied run while `remaining > 0`.
        let item = unsafe { &*self.ring.slot_ptr(self.front) };
        self.front = self.ring.wrap_add(self.front, 1);
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.ring.wrap_add(self.front, self.remaining);
        // SAFETY: `slot` is the last unvisited occupied slot.
        Some(unsafe { &*self.ring.slot_ptr(slot) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable iterator returned by [`RingBuffer::iter_mut`].
///
/// Holds the raw region rather than the buffer so that the yielded `&mut T`s
/// do not alias a borrow of the buffer itself.
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    mask: usize,
    front: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(ptr: NonNull<T>, mask: usize, front: usize, remaining: usize) -> Self {
        Self {
            ptr,
            mask,
            front,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: each occupied slot is yielded at most once.
        let item = unsafe { &mut *self.ptr.as_ptr().add(self.front) };
        self.front = self.front.wrapping_add(1) & self.mask;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.front.wrapping_add(self.remaining) & self.mask;
        // SAFETY: each occupied slot is yielded at most once.
        Some(unsafe { &mut *self.ptr.as_ptr().add(slot) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `RingBuffer::into_iter`.  Elements not yet
/// yielded are dropped with the iterator.
pub struct IntoIter<T> {
    ring: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(ring: RingBuffer<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.ring.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ring).finish()
    }
}
