//! Object-safe view over the four end primitives shared by every deque-like
//! container in the crate.

use std::collections::VecDeque;

use crate::error::{CollectionError, Result};
use crate::vecs::block_deque::BlockDeque;
use crate::vecs::ring_buffer::RingBuffer;

/// An object-safe abstraction over double-ended queues.
///
/// Implemented by `VecDeque<T>`, [`RingBuffer<T>`] and [`BlockDeque<T>`] so that
/// code can drive any of them without knowing which one it holds.
pub trait AnyDeque<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;
    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element at the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element at the front.
    fn push_front(&mut self, item: T);
    /// Removes the last element, or fails with [`CollectionError::EmptyContainer`].
    fn pop_back(&mut self) -> Result<T>;
    /// Removes the first element, or fails with [`CollectionError::EmptyContainer`].
    fn pop_front(&mut self) -> Result<T>;
    /// Drops every element.
    fn clear(&mut self);
    /// Returns the first element, or [`CollectionError::EmptyContainer`].
    fn front(&self) -> Result<&T>;
    /// Returns the last element, or [`CollectionError::EmptyContainer`].
    fn back(&self) -> Result<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(CollectionError::EmptyContainer)
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(CollectionError::EmptyContainer)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Result<&T> {
        self.front().ok_or(CollectionError::EmptyContainer)
    }
    fn back(&self) -> Result<&T> {
        self.back().ok_or(CollectionError::EmptyContainer)
    }
}

impl<T> AnyDeque<T> for RingBuffer<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Result<&T> {
        self.front()
    }
    fn back(&self) -> Result<&T> {
        self.back()
    }
}

impl<T> AnyDeque<T> for BlockDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Result<&T> {
        self.front()
    }
    fn back(&self) -> Result<&T> {
        self.back()
    }
}
