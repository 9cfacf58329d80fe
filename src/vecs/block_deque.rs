//! Double-ended queue made of fixed-capacity blocks.
//!
//! Elements live in blocks of [`block_len::<T>()`](crate::utils::capacity::block_len)
//! slots that are never moved once allocated.  Only the *index* of owning block
//! handles is a [`RingBuffer`], so growing at either end relocates handles, not
//! elements.
//!
//! # Indexing
//! `front` is the global index of the first element, counted from slot 0 of the
//! first indexed block.  Logical index `i` lives at global index `front + i`,
//! i.e. in block `(front + i) / N` at offset `(front + i) % N`.
//!
//! # Block recycling
//! Popping never frees a block.  Blocks left empty at one end stay indexed and
//! are handed to the other end when it needs room, so a queue that moves
//! steadily in one direction reuses the same few blocks.  [`BlockDeque::shrink_to_fit`]
//! is the only operation that releases blocks.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};
use core::ptr::{self, NonNull};

use log::{debug, trace};

use super::ring_buffer::RingBuffer;
use crate::error::{CollectionError, Result};
use crate::utils::capacity::block_len;

/// Owning handle to one block of `block_len::<T>()` uninitialised slots.
///
/// The handle only frees the storage; which slots hold live values is tracked
/// by the owning [`BlockDeque`].
struct Block<T> {
    ptr: NonNull<MaybeUninit<T>>,
}

impl<T> Block<T> {
    const LEN: usize = block_len::<T>();

    fn new() -> Self {
        let slots: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(Self::LEN);
        Self {
            ptr: NonNull::from(Box::leak(slots)).cast::<MaybeUninit<T>>(),
        }
    }

    /// # Safety
    /// `offset < Self::LEN`.
    #[inline(always)]
    unsafe fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset < Self::LEN);
        unsafe { self.ptr.as_ptr().add(offset).cast::<T>() }
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        let slots = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), Self::LEN);
        // SAFETY: `slots` is exactly the allocation leaked in `Block::new`.
        drop(unsafe { Box::from_raw(slots) });
    }
}

/// A deque of fixed-capacity blocks indexed by a [`RingBuffer`] of handles.
pub struct BlockDeque<T> {
    blocks: RingBuffer<Block<T>>,
    front: usize,
    len: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for BlockDeque<T> {}
unsafe impl<T: Sync> Sync for BlockDeque<T> {}

impl<T> BlockDeque<T> {
    const N: usize = block_len::<T>();

    /// Creates an empty deque; no block is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            blocks: RingBuffer::new(),
            front: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a deque holding `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut deque = Self::new();
        for _ in 0..len {
            deque.push_back(T::default());
        }
        deque
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements per block.
    #[inline(always)]
    pub fn block_len(&self) -> usize {
        Self::N
    }

    /// Number of blocks currently indexed, including empty reserve blocks.
    #[inline(always)]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total element slots across all indexed blocks.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.blocks.len() * Self::N
    }

    /// Pointer to the slot at `global` index.
    ///
    /// # Safety
    /// `global < self.capacity()`.
    #[inline(always)]
    unsafe fn slot_ptr(&self, global: usize) -> *mut T {
        unsafe {
            self.blocks
                .get_unchecked(global / Self::N)
                .slot(global % Self::N)
        }
    }

    // ─── access ───────────────────────────────────────────────────────────────

    /// Returns a reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: bounds checked above.
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at logical `index`, or `None`.
    #[inline]
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
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.slot_ptr(self.front + index) }
    }

    /// Mutable counterpart of [`get_unchecked`](BlockDeque::get_unchecked).
    ///
    /// # Safety
    /// `index` must be `< self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.slot_ptr(self.front + index) }
    }

    /// Returns the first element, or [`CollectionError::EmptyContainer`].
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(CollectionError::EmptyContainer)
    }

    /// Returns the last element, or [`CollectionError::EmptyContainer`].
    pub fn back(&self) -> Result<&T> {
        self.len
            .checked_sub(1)
            .and_then(|last| self.get(last))
            .ok_or(CollectionError::EmptyContainer)
    }

    /// Mutable access to the first element.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(CollectionError::EmptyContainer)
    }

    /// Mutable access to the last element.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last).ok_or(CollectionError::EmptyContainer),
            None => Err(CollectionError::EmptyContainer),
        }
    }

    // ─── push / pop ───────────────────────────────────────────────────────────

    /// Appends `value`, reusing an empty front block before allocating one.
    pub fn push_back(&mut self, value: T) {
        if self.front + self.len >= self.capacity() {
            self.make_room_back();
        }
        let global = self.front + self.len;
        // SAFETY: `global < capacity` after `make_room_back`, and the slot is
        // outside the occupied run.
        unsafe { ptr::write(self.slot_ptr(global), value) };
        self.len += 1;
    }

    /// Prepends `value`, reusing an empty back block before allocating one.
    pub fn push_front(&mut self, value: T) {
        if self.front == 0 {
            self.make_room_front();
        }
        self.front -= 1;
        // SAFETY: `front` now names a free slot inside an indexed block.
        unsafe { ptr::write(self.slot_ptr(self.front), value) };
        self.len += 1;
    }

    fn make_room_back(&mut self) {
        if self.front >= Self::N {
            // every block before the front block is empty
            if let Ok(block) = self.blocks.pop_front() {
                self.blocks.push_back(block);
                self.front -= Self::N;
                trace!("block deque recycled a front block at the back");
                return;
            }
        }
        self.blocks.push_back(Block::new());
        trace!("block deque allocated block {} at the back", self.blocks.len());
    }

    fn make_room_front(&mut self) {
        let used = (self.front + self.len).div_ceil(Self::N);
        if self.blocks.len() > used {
            if let Ok(block) = self.blocks.pop_back() {
                self.blocks.push_front(block);
                self.front += Self::N;
                trace!("block deque recycled a back block at the front");
                return;
            }
        }
        self.blocks.push_front(Block::new());
        self.front += Self::N;
        trace!("block deque allocated block {} at the front", self.blocks.len());
    }

    /// Removes and returns the last element.  The block it lived in stays
    /// indexed.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        self.len -= 1;
        // SAFETY: the slot held the last element and is now outside the run.
        Ok(unsafe { ptr::read(self.slot_ptr(self.front + self.len)) })
    }

    /// Removes and returns the first element.  The block it lived in stays
    /// indexed.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        // SAFETY: the slot held the first element and is now outside the run.
        let value = unsafe { ptr::read(self.slot_ptr(self.front)) };
        self.front += 1;
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element and rewinds to the first block.  Blocks are kept.
    pub fn clear(&mut self) {
        let (front, len) = (self.front, self.len);
        self.front = 0;
        self.len = 0;
        for global in front..front + len {
            // SAFETY: each slot in the old run is dropped exactly once.
            unsafe { ptr::drop_in_place(self.slot_ptr(global)) };
        }
    }

    /// Releases empty blocks at both ends and shrinks the handle index.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.front = 0;
        }
        let before = self.blocks.len();
        while self.front >= Self::N && self.blocks.pop_front().is_ok() {
            self.front -= Self::N;
        }
        let needed = (self.front + self.len).div_ceil(Self::N);
        while self.blocks.len() > needed && self.blocks.pop_back().is_ok() {}
        self.blocks.shrink_to_fit();
        debug!(
            "block deque released {} of {} blocks",
            before - self.blocks.len(),
            before
        );
    }

    // ─── iteration ────────────────────────────────────────────────────────────

    /// Front-to-back iterator; `.rev()` walks back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Mutable front-to-back iterator.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let back = self.len;
        IterMut {
            deque: self,
            front: 0,
            back,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for BlockDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BlockDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BlockDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BlockDeque<T> {}

impl<T> Index<usize> for BlockDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "BlockDeque index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for BlockDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!(
                "BlockDeque index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> Extend<T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for BlockDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

/// Shared iterator returned by [`BlockDeque::iter`].
pub struct Iter<'a, T> {
    deque: &'a BlockDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`BlockDeque::iter_mut`].
///
/// Elements sit in separately allocated blocks reached through raw handles, so
/// yielding `&mut T` while the handle index is only read is sound.
pub struct IterMut<'a, T> {
    deque: &'a BlockDeque<T>,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < len` and each index is yielded at most once.
        let item = unsafe { &mut *self.deque.slot_ptr(self.deque.front + self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back < len` and each index is yielded at most once.
        Some(unsafe { &mut *self.deque.slot_ptr(self.deque.front + self.back) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `BlockDeque::into_iter`.
pub struct IntoIter<T> {
    deque: BlockDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BlockDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a BlockDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BlockDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use proptest::prelude::*;

    /// 128 bytes: `block_len` clamps to 256 / 128 = 2 -> MIN_BLOCK_LEN = 4.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    struct Wide([u64; 16]);

    fn wide(v: u64) -> Wide {
        Wide([v; 16])
    }

    #[test]
    fn test_block_deque_block_len_from_element_size() {
        assert_eq!(BlockDeque::<u8>::new().block_len(), 256);
        assert_eq!(BlockDeque::<u32>::new().block_len(), 64);
        assert_eq!(BlockDeque::<Wide>::new().block_len(), 4);
    }

    #[test]
    fn test_block_deque_push_pop_basic() {
        let mut d = BlockDeque::new();
        assert!(d.is_empty());
        assert_eq!(d.block_count(), 0);
        d.push_back(1);
        d.push_back(2);
        d.push_front(0);
        assert_eq!(d.len(), 3);
        assert_eq!(d.front(), Ok(&0));
        assert_eq!(d.back(), Ok(&2));
        assert_eq!(d[1], 1);
        assert_eq!(d.pop_front(), Ok(0));
        assert_eq!(d.pop_back(), Ok(2));
        assert_eq!(d.pop_back(), Ok(1));
        assert_eq!(d.pop_back(), Err(CollectionError::EmptyContainer));
        assert_eq!(d.pop_front(), Err(CollectionError::EmptyContainer));
        assert_eq!(d.front(), Err(CollectionError::EmptyContainer));
        assert_eq!(d.back(), Err(CollectionError::EmptyContainer));
    }

    #[test]
    fn test_block_deque_spans_blocks_both_directions() {
        let mut d = BlockDeque::new();
        let mut model = VecDeque::new();
        for i in 0..30u64 {
            if i % 2 == 0 {
                d.push_back(wide(i));
                model.push_back(wide(i));
            } else {
                d.push_front(wide(i));
                model.push_front(wide(i));
            }
        }
        assert_eq!(d.len(), 30);
        assert!(d.block_count() >= 30 / 4);
        for (i, expected) in model.iter().enumerate() {
            assert_eq!(&d[i], expected);
        }
    }

    #[test]
    fn test_block_deque_elements_never_move() {
        let mut d: BlockDeque<Wide> = BlockDeque::new();
        d.push_back(wide(1));
        let before: *const Wide = d.front().unwrap();
        for i in 0..100 {
            d.push_back(wide(i));
            d.push_front(wide(i));
        }
        let after: *const Wide = &d[100];
        assert_eq!(before, after);
        assert_eq!(d[100], wide(1));
    }

    #[test]
    fn test_block_deque_push_back_recycles_front_block() {
        let mut d: BlockDeque<Wide> = BlockDeque::new();
        for i in 0..12 {
            d.push_back(wide(i));
        }
        assert_eq!(d.block_count(), 3);
        for _ in 0..4 {
            d.pop_front().unwrap();
        }
        // the first block is now empty but still indexed
        assert_eq!(d.block_count(), 3);
        for i in 12..16 {
            d.push_back(wide(i));
        }
        assert_eq!(d.block_count(), 3);
        let values: Vec<u64> = d.iter().map(|w| w.0[0]).collect();
        assert_eq!(values, (4..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_block_deque_push_front_recycles_back_block() {
        let mut d: BlockDeque<Wide> = BlockDeque::new();
        for i in 0..8 {
            d.push_back(wide(i));
        }
        for _ in 0..4 {
            d.pop_back().unwrap();
        }
        assert_eq!(d.block_count(), 2);
        d.push_front(wide(100));
        assert_eq!(d.block_count(), 2);
        assert_eq!(d.front(), Ok(&wide(100)));
        assert_eq!(d.back(), Ok(&wide(3)));
    }

    #[test]
    fn test_block_deque_shrink_to_fit_releases_empty_blocks() {
        let mut d: BlockDeque<Wide> = BlockDeque::new();
        for i in 0..12 {
            d.push_back(wide(i));
        }
        for _ in 0..4 {
            d.pop_front().unwrap();
        }
        d.shrink_to_fit();
        assert_eq!(d.block_count(), 2);
        assert_eq!(d.len(), 8);
        assert_eq!(d.front(), Ok(&wide(4)));
        assert_eq!(d.back(), Ok(&wide(11)));

        for _ in 0..5 {
            d.pop_back().unwrap();
        }
        d.shrink_to_fit();
        assert_eq!(d.block_count(), 1);
        let values: Vec<u64> = d.iter().map(|w| w.0[0]).collect();
        assert_eq!(values, vec![4, 5, 6]);

        d.clear();
        d.shrink_to_fit();
        assert_eq!(d.block_count(), 0);
        assert_eq!(d.capacity(), 0);
        d.push_front(wide(9));
        assert_eq!(d.block_count(), 1);
        assert_eq!(d[0], wide(9));
    }

    #[test]
    fn test_block_deque_clear_keeps_blocks() {
        let mut d: BlockDeque<u32> = (0..200).collect();
        let blocks = d.block_count();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.block_count(), blocks);
        d.extend(0..10);
        assert_eq!(d.block_count(), blocks);
        assert_eq!(d.iter().copied().sum::<u32>(), 45);
    }

    #[test]
    fn test_block_deque_drop_each_element_once() {
        struct Tracked(Rc<Cell<usize>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }
        let drops = Rc::new(Cell::new(0));
        {
            let mut d = BlockDeque::new();
            for i in 0..50 {
                if i % 3 == 0 {
                    d.push_front(Tracked(Rc::clone(&drops)));
                } else {
                    d.push_back(Tracked(Rc::clone(&drops)));
                }
            }
            drop(d.pop_front());
            drop(d.pop_back());
            assert_eq!(drops.get(), 2);
            d.shrink_to_fit();
            assert_eq!(drops.get(), 2);
        }
        assert_eq!(drops.get(), 50);
    }

    #[test]
    fn test_block_deque_with_len_and_traits() {
        let d: BlockDeque<String> = BlockDeque::with_len(5);
        assert_eq!(d.len(), 5);
        assert!(d.iter().all(String::is_empty));

        let a: BlockDeque<i32> = (1..=3).collect();
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
        let rev: Vec<i32> = a.iter().rev().copied().collect();
        assert_eq!(rev, vec![3, 2, 1]);
        let owned: Vec<i32> = b.into_iter().rev().collect();
        assert_eq!(owned, vec![3, 2, 1]);
    }

    #[test]
    fn test_block_deque_iter_mut() {
        let mut d: BlockDeque<Wide> = (0..10).map(wide).collect();
        for w in d.iter_mut() {
            w.0[0] += 100;
        }
        if let Some(last) = d.iter_mut().next_back() {
            last.0[0] = 0;
        }
        let firsts: Vec<u64> = d.iter().map(|w| w.0[0]).collect();
        assert_eq!(firsts, vec![100, 101, 102, 103, 104, 105, 106, 107, 108, 0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_block_deque_index_out_of_bounds_panics() {
        let d: BlockDeque<i32> = (0..3).collect();
        let _ = d[3];
    }

    #[test]
    fn test_block_deque_zst() {
        let mut d = BlockDeque::new();
        for _ in 0..300 {
            d.push_back(());
        }
        d.push_front(());
        assert_eq!(d.len(), 301);
        assert_eq!(d.pop_back(), Ok(()));
        assert_eq!(d.iter().count(), 300);
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushBack(u16),
        PushFront(u16),
        PopBack,
        PopFront,
        Clear,
        Shrink,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u16>().prop_map(Op::PushBack),
            4 => any::<u16>().prop_map(Op::PushFront),
            3 => Just(Op::PopBack),
            3 => Just(Op::PopFront),
            1 => Just(Op::Clear),
            1 => Just(Op::Shrink),
        ]
    }

    proptest! {
        #[test]
        fn prop_block_deque_matches_vecdeque(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut d: BlockDeque<Wide> = BlockDeque::new();
            let mut model: VecDeque<Wide> = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushBack(v) => { d.push_back(wide(v.into())); model.push_back(wide(v.into())); }
                    Op::PushFront(v) => { d.push_front(wide(v.into())); model.push_front(wide(v.into())); }
                    Op::PopBack => prop_assert_eq!(d.pop_back().ok(), model.pop_back()),
                    Op::PopFront => prop_assert_eq!(d.pop_front().ok(), model.pop_front()),
                    Op::Clear => { d.clear(); model.clear(); }
                    Op::Shrink => {
                        d.shrink_to_fit();
                        // only blocks that touch the occupied run survive
                        let n = d.block_len();
                        let offset = d.front % n;
                        prop_assert_eq!(d.block_count(), (offset + d.len()).div_ceil(n));
                    }
                }
                prop_assert_eq!(d.len(), model.len());
                prop_assert!(d.len() <= d.capacity());
                prop_assert_eq!(d.front().ok(), model.front());
                prop_assert_eq!(d.back().ok(), model.back());
            }
            prop_assert!(d.iter().eq(model.iter()));
        }
    }
}
