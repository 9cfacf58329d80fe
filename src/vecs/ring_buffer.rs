//! Growable power-of-two circular buffer.
//!
//! [`RingBuffer`] owns a single heap region of `capacity` slots and keeps its
//! elements in the circular run of `len` slots starting at physical slot
//! `head`.  Logical index `i` lives at `(head + i) & (capacity - 1)`.
//!
//! # Growth strategy
//! When a push finds the buffer full the capacity doubles (minimum 1).  How the
//! occupied run is carried over depends on the element type, decided at compile
//! time by `mem::needs_drop::<T>()`:
//!
//! * **Trivially relocatable** (no drop glue): if the run does not wrap, the
//!   region is `realloc`ed in place and `head` is untouched.  If it wraps, a
//!   fresh region is allocated and the run is copied as two byte ranges,
//!   `[head, capacity)` then `[0, head + len - capacity)`, to offset 0.
//! * **Everything else**: a fresh region is allocated and every element is moved
//!   in logical order to offset 0.  The old slots are logically uninitialised
//!   after the move, so nothing is dropped there.
//!
//! Both reallocating paths leave `head == 0`.  A failed allocation leaves the
//! buffer exactly as it was.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr::{self, NonNull};
use core::slice;
use std::alloc::{self, Layout};

use log::trace;

use super::cursor::{Cursor, CursorMut};
use super::iter::{IntoIter, Iter, IterMut};
use crate::error::{CollectionError, Result};
use crate::utils::capacity::{doubled, ring_capacity_for};

/// A growable circular buffer with O(1) push and pop at both ends.
///
/// # Invariants
/// * `capacity` is `0` or a power of two, and `len <= capacity`.
/// * `head < capacity` whenever `capacity > 0`.
/// * Exactly the slots `(head + i) & (capacity - 1)` for `i in 0..len` hold
///   initialised values; every other slot is uninitialised.
///
/// Zero-sized element types never allocate; their capacity is tracked purely
/// for slot arithmetic.
pub struct RingBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    head: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RingBuffer<T> {}
unsafe impl<T: Sync> Sync for RingBuffer<T> {}

impl<T> RingBuffer<T> {
    /// `true` when relocating a `T` is a plain byte copy with nothing to run on
    /// the source afterwards.
    const TRIVIALLY_RELOCATABLE: bool = !mem::needs_drop::<T>();
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            len: 0,
            head: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty buffer able to hold `capacity` elements before growing.
    ///
    /// The actual capacity is the next power of two `>= capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut ring = Self::new();
        ring.reserve(capacity);
        ring
    }

    /// Fallible counterpart of [`with_capacity`](RingBuffer::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut ring = Self::new();
        ring.try_reserve(capacity)?;
        Ok(ring)
    }

    /// Creates a buffer holding `len` default values.
    ///
    /// Capacity is the next power of two `>= len`.  If `T::default()` panics,
    /// the values built so far are dropped and the storage is freed while
    /// unwinding.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut ring = Self::with_capacity(len);
        for _ in 0..len {
            // SAFETY: capacity >= len, so a free slot exists for every write.
            unsafe { ring.push_back_unchecked(T::default()) };
        }
        ring
    }

    /// Builds a buffer of `len` elements from `f(0), f(1), ..`.
    ///
    /// # Errors
    /// * [`CollectionError::AllocationFailure`] / [`CollectionError::CapacityOverflow`]
    ///   if storage for `len` elements cannot be obtained.
    /// * [`CollectionError::ConstructionFailure`] carrying the failing index and
    ///   the error's message.  All previously built elements are dropped and the
    ///   storage is released before returning.
    pub fn try_from_fn<F, E>(len: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> core::result::Result<T, E>,
        E: fmt::Display,
    {
        let mut ring = Self::try_with_capacity(len)?;
        for index in 0..len {
            match f(index) {
                // SAFETY: capacity >= len.
                Ok(value) => unsafe { ring.push_back_unchecked(value) },
                Err(err) => {
                    return Err(CollectionError::ConstructionFailure {
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }
        Ok(ring)
    }

    /// Returns the number of elements in the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the storage region (`0` or a power of two).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ─── slot arithmetic ──────────────────────────────────────────────────────

    #[inline(always)]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.capacity.wrapping_sub(1)
    }

    #[inline(always)]
    pub(crate) fn wrap_add(&self, slot: usize, add: usize) -> usize {
        slot.wrapping_add(add) & self.mask()
    }

    #[inline(always)]
    pub(crate) fn wrap_sub(&self, slot: usize, sub: usize) -> usize {
        slot.wrapping_sub(sub) & self.mask()
    }

    #[inline(always)]
    pub(crate) fn wrap_offset(&self, slot: usize, delta: isize) -> usize {
        slot.wrapping_add_signed(delta) & self.mask()
    }

    /// Physical slot of logical index `index`.
    #[inline(always)]
    pub(crate) fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    /// Logical position of physical `slot`, measured from the current head.
    #[inline(always)]
    pub(crate) fn logical(&self, slot: usize) -> usize {
        self.wrap_sub(slot, self.head)
    }

    /// # Safety
    /// `slot` must be `< capacity` (or the buffer must hold a ZST).
    #[inline(always)]
    pub(crate) unsafe fn slot_ptr(&self, slot: usize) -> *mut T {
        unsafe { self.ptr.as_ptr().add(slot) }
    }

    /// Physical `(start, len)` pairs of the two segments of the occupied run.
    #[inline]
    fn segments(&self) -> ((usize, usize), (usize, usize)) {
        if self.head + self.len <= self.capacity {
            ((self.head, self.len), (0, 0))
        } else {
            let first = self.capacity - self.head;
            ((self.head, first), (0, self.len - first))
        }
    }

    // ─── access ───────────────────────────────────────────────────────────────

    /// Returns a reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: bounds checked above.
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at logical `index`, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: bounds checked above.
            Some(unsafe { self.get_unchecked_mut(index) })
        } else {
            None
        }
    }

    /// Returns the element at logical `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "RingBuffer::get_unchecked out of range");
        unsafe { &*self.slot_ptr(self.physical(index)) }
    }

    /// Mutable counterpart of [`get_unchecked`](RingBuffer::get_unchecked).
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "RingBuffer::get_unchecked_mut out of range");
        unsafe { &mut *self.slot_ptr(self.physical(index)) }
    }

    /// Returns the first element, or [`CollectionError::EmptyContainer`].
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(CollectionError::EmptyContainer)
    }

    /// Returns the last element, or [`CollectionError::EmptyContainer`].
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.len
            .checked_sub(1)
            .and_then(|last| self.get(last))
            .ok_or(CollectionError::EmptyContainer)
    }

    /// Mutable access to the first element, or [`CollectionError::EmptyContainer`].
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(CollectionError::EmptyContainer)
    }

    /// Mutable access to the last element, or [`CollectionError::EmptyContainer`].
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last).ok_or(CollectionError::EmptyContainer),
            None => Err(CollectionError::EmptyContainer),
        }
    }

    /// Swaps the elements at logical indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(a < self.len && b < self.len, "RingBuffer::swap index out of bounds");
        // SAFETY: both slots are occupied.
        unsafe {
            ptr::swap(
                self.slot_ptr(self.physical(a)),
                self.slot_ptr(self.physical(b)),
            );
        }
    }

    // ─── push / pop ───────────────────────────────────────────────────────────

    /// Appends `value` at the back, doubling the capacity first if full.
    ///
    /// Aborts through `handle_alloc_error` if the allocator fails, like `Vec`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            err.abort_on_alloc();
        }
    }

    /// Prepends `value` at the front, doubling the capacity first if full.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            err.abort_on_alloc();
        }
    }

    /// Fallible [`push_back`](RingBuffer::push_back).  On error the buffer is
    /// unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity {
            self.grow(doubled(self.capacity)?)?;
        }
        // SAFETY: a free slot exists after the grow above.
        unsafe { self.push_back_unchecked(value) };
        Ok(())
    }

    /// Fallible [`push_front`](RingBuffer::push_front).  On error the buffer is
    /// unchanged and `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity {
            self.grow(doubled(self.capacity)?)?;
        }
        self.head = self.wrap_sub(self.head, 1);
        // SAFETY: the new head slot was outside the occupied run.
        unsafe { ptr::write(self.slot_ptr(self.head), value) };
        self.len += 1;
        Ok(())
    }

    /// # Safety
    /// `self.len < self.capacity`.
    #[inline(always)]
    unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity);
        let tail = self.physical(self.len);
        unsafe { ptr::write(self.slot_ptr(tail), value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        self.len -= 1;
        let tail = self.physical(self.len);
        // SAFETY: `tail` was occupied and is now outside the run.
        Ok(unsafe { ptr::read(self.slot_ptr(tail)) })
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        let slot = self.head;
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        // SAFETY: `slot` was occupied and is now outside the run.
        Ok(unsafe { ptr::read(self.slot_ptr(slot)) })
    }

    /// Drops every element and resets `head` to 0.  Storage is retained.
    pub fn clear(&mut self) {
        let ((a, a_len), (b, b_len)) = self.segments();
        // SAFETY: both segments lie inside the region and hold initialised values.
        let (front, back) = unsafe {
            (
                ptr::slice_from_raw_parts_mut(self.slot_ptr(a), a_len),
                ptr::slice_from_raw_parts_mut(self.slot_ptr(b), b_len),
            )
        };
        self.len = 0;
        self.head = 0;
        unsafe {
            // drops `back` even if a destructor in `front` panics
            let _back = SliceDropGuard(back);
            ptr::drop_in_place(front);
        }
    }

    // ─── capacity management ──────────────────────────────────────────────────

    /// Grows the capacity to the next power of two `>= capacity`.  Never shrinks.
    ///
    /// Note that `capacity` is an absolute target, not an additional count.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            err.abort_on_alloc();
        }
    }

    /// Fallible [`reserve`](RingBuffer::reserve).
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity {
            return Ok(());
        }
        let target = ring_capacity_for(capacity)?;
        self.grow(target)
    }

    /// Shrinks the storage to the next power of two `>= len` (freeing it when
    /// empty).  Elements keep their logical order; `head` becomes 0.
    pub fn shrink_to_fit(&mut self) {
        if let Err(err) = self.try_shrink_to_fit() {
            err.abort_on_alloc();
        }
    }

    /// Fallible [`shrink_to_fit`](RingBuffer::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        let target = ring_capacity_for(self.len)?;
        if target >= self.capacity {
            return Ok(());
        }
        if target == 0 {
            // SAFETY: the buffer is empty, so no element lives in the region.
            unsafe { self.release() };
            self.ptr = NonNull::dangling();
            self.capacity = 0;
            self.head = 0;
            return Ok(());
        }
        trace!("ring buffer shrink {} -> {}", self.capacity, target);
        self.relocate(target)
    }

    /// Rearranges the storage so the run starts at slot 0 and returns it as one
    /// mutable slice.  Useful for `sort`, `reverse`, `binary_search` and the
    /// rest of the slice API.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if self.head + self.len > self.capacity {
            if let Err(err) = self.relocate(self.capacity) {
                err.abort_on_alloc();
            }
        }
        // SAFETY: the run is now `[head, head + len)` without wrapping.
        unsafe { slice::from_raw_parts_mut(self.slot_ptr(self.head), self.len) }
    }

    /// Returns the run as two slices in logical order.  The second is empty
    /// unless the run wraps.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ((a, a_len), (b, b_len)) = self.segments();
        // SAFETY: both segments are initialised and inside the region.
        unsafe {
            (
                slice::from_raw_parts(self.slot_ptr(a), a_len),
                slice::from_raw_parts(self.slot_ptr(b), b_len),
            )
        }
    }

    /// Mutable counterpart of [`as_slices`](RingBuffer::as_slices).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let ((a, a_len), (b, b_len)) = self.segments();
        // SAFETY: the segments are disjoint, initialised and inside the region.
        unsafe {
            (
                slice::from_raw_parts_mut(self.slot_ptr(a), a_len),
                slice::from_raw_parts_mut(self.slot_ptr(b), b_len),
            )
        }
    }

    /// Reallocates to `new_capacity`, a power of two strictly above the current
    /// capacity, choosing the relocation strategy from the element type.
    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity.is_power_of_two() && new_capacity > self.capacity);
        let old_capacity = self.capacity;
        if Self::IS_ZST {
            self.head = 0;
            self.capacity = new_capacity;
        } else if Self::TRIVIALLY_RELOCATABLE {
            self.grow_trivial(new_capacity)?;
        } else {
            self.relocate(new_capacity)?;
        }
        trace!(
            "ring buffer grow {} -> {} (len {}, {})",
            old_capacity,
            new_capacity,
            self.len,
            if Self::TRIVIALLY_RELOCATABLE { "bytewise" } else { "elementwise" }
        );
        Ok(())
    }

    /// Byte-copy growth for element types without drop glue.
    fn grow_trivial(&mut self, new_capacity: usize) -> Result<()> {
        let new_layout = Self::layout(new_capacity)?;
        if self.capacity == 0 {
            self.ptr = Self::allocate(new_layout)?;
        } else if self.head + self.len <= self.capacity {
            // unwrapped run keeps its offsets, so `head` stays put
            let old_layout = Self::layout(self.capacity)?;
            // SAFETY: `ptr` was allocated with `old_layout`; on null the old
            // region is still valid and untouched.
            let raw = unsafe {
                alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size())
            };
            self.ptr = NonNull::new(raw.cast::<T>())
                .ok_or(CollectionError::AllocationFailure { layout: new_layout })?;
        } else {
            let fresh = Self::allocate(new_layout)?;
            let first = self.capacity - self.head;
            let second = self.len - first;
            // SAFETY: `[head, capacity)` and `[0, second)` are the occupied run;
            // `fresh` holds at least `len` slots and does not overlap the old region.
            unsafe {
                ptr::copy_nonoverlapping(self.slot_ptr(self.head), fresh.as_ptr(), first);
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.as_ptr().add(first), second);
                self.release();
            }
            self.ptr = fresh;
            self.head = 0;
        }
        self.capacity = new_capacity;
        Ok(())
    }

    /// Moves every element, in logical order, into a fresh region of
    /// `new_capacity >= len` slots starting at offset 0.
    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);
        if Self::IS_ZST {
            self.head = 0;
            self.capacity = new_capacity;
            return Ok(());
        }
        let fresh = Self::allocate(Self::layout(new_capacity)?)?;
        for i in 0..self.len {
            // SAFETY: each occupied slot is read exactly once and its value is
            // written to a distinct slot of the new region.
            unsafe {
                let value = ptr::read(self.slot_ptr(self.physical(i)));
                ptr::write(fresh.as_ptr().add(i), value);
            }
        }
        // SAFETY: every value has been moved out; the old slots are uninitialised.
        unsafe { self.release() };
        self.ptr = fresh;
        self.head = 0;
        self.capacity = new_capacity;
        Ok(())
    }

    #[inline]
    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| CollectionError::CapacityOverflow)
    }

    fn allocate(layout: Layout) -> Result<NonNull<T>> {
        debug_assert!(layout.size() != 0);
        // SAFETY: `layout` has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or(CollectionError::AllocationFailure { layout })
    }

    /// Frees the storage region.  Leaves `ptr` dangling; callers reassign it.
    ///
    /// # Safety
    /// No live element may remain in the region.
    unsafe fn release(&mut self) {
        if Self::IS_ZST || self.capacity == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }

    // ─── iteration ────────────────────────────────────────────────────────────

    /// Front-to-back iterator; `.rev()` walks back-to-front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Mutable front-to-back iterator.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.ptr, self.mask(), self.head, self.len)
    }

    /// Cursor on the front element (physical slot `head`).
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head)
    }

    /// Cursor one past the back element.
    ///
    /// This is a position, not an element: when the buffer is full it aliases
    /// the head slot, so compare against it rather than dereferencing it.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.physical(self.len))
    }

    /// Cursor on logical `index`; `index == len` is the end position.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Cursor<'_, T> {
        Cursor::new(self, self.physical(index))
    }

    /// Mutable cursor on the front element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let slot = self.head;
        CursorMut::new(self, slot)
    }

    /// Mutable cursor on logical `index`.
    ///
    /// `index == len` is the end position.  On a full buffer that position
    /// shares the head slot, so the cursor sits on the front element: a push
    /// through it that grows the buffer keeps it on the front element rather
    /// than on the pushed value.
    #[inline]
    pub fn cursor_at_mut(&mut self, index: usize) -> CursorMut<'_, T> {
        let slot = self.physical(index);
        CursorMut::new(self, slot)
    }
}

/// Drops a raw slice when it goes out of scope.
struct SliceDropGuard<T>(*mut [T]);

impl<T> Drop for SliceDropGuard<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.0) }
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: `clear` dropped every element.
        unsafe { self.release() };
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        let mut ring = Self::with_capacity(self.len);
        ring.extend(self.iter().cloned());
        ring
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: PartialOrd> PartialOrd for RingBuffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingBuffer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "RingBuffer index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!(
                "RingBuffer index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
