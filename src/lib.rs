//! # Circular Collections
//!
//! A growable circular buffer and a block-indexed deque built on top of it.
//!
//! * [`RingBuffer`] keeps its elements in one power-of-two region, addressed
//!   circularly from a moving `head`.  Push and pop are O(1) at both ends and
//!   random access is a mask away.  Growth doubles the region and picks, at
//!   compile time, between a bytewise relocation (possibly an in-place
//!   `realloc`) for types without drop glue and an element-by-element move for
//!   everything else.
//! * [`Cursor`] / [`CursorMut`] address a *physical* slot, so the element under
//!   a cursor stays the same while values are pushed at either end.
//! * [`BlockDeque`] stores elements in fixed-size blocks that never move.  The
//!   block handles live in a `RingBuffer`, vacated blocks are recycled across
//!   ends, and [`BlockDeque::shrink_to_fit`] is the only place blocks are freed.
//!
//! ## Capacity rules
//!
//! * `RingBuffer` capacity is always `0` or a power of two.  A full buffer grows
//!   to `max(1, 2 * capacity)`; [`RingBuffer::reserve`] rounds its *absolute*
//!   target up to the next power of two and never shrinks.
//! * `BlockDeque` block length is `256 / size_of::<T>()` clamped to `4..=256`.
//!
//! ## Examples
//!
//! ### RingBuffer
//!
//! ```rust
//! use circular_collections::RingBuffer;
//!
//! let mut ring: RingBuffer<i32> = RingBuffer::with_len(5);
//! assert_eq!(ring.len(), 5);
//! assert_eq!(ring.capacity(), 8);
//!
//! ring.clear();
//! for v in [5, 2, 8, 1, 9, 3] {
//!     ring.push_back(v);
//! }
//! ring.make_contiguous().sort();
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 8, 9]);
//! assert_eq!(ring.iter().rev().next(), Some(&9));
//! ```
//!
//! ### Cursor stability
//!
//! ```rust
//! use circular_collections::RingBuffer;
//!
//! let mut words: RingBuffer<&str> = RingBuffer::with_capacity(10);
//! words.extend(["hello", "world", "test"]);
//!
//! let mut cursor = words.cursor_at_mut(1);
//! cursor.push_front("first");
//! cursor.push_back("last");
//! assert_eq!(cursor.get(), Some(&"world"));
//! ```
//!
//! ### BlockDeque
//!
//! ```rust
//! use circular_collections::BlockDeque;
//!
//! let mut deque: BlockDeque<u64> = (0..100).collect();
//! while deque.len() > 4 {
//!     deque.pop_front().unwrap();
//! }
//! deque.shrink_to_fit();
//! assert_eq!(deque.block_count(), 1);
//! assert_eq!(deque.front(), Ok(&96));
//! ```

// --- Module Declarations ---

pub mod any_deque;
pub mod error;
mod serde_impls;
pub mod utils;
pub mod vecs;

// --- Re-exports ---

pub use any_deque::AnyDeque;
pub use error::{CollectionError, Result};
pub use vecs::block_deque::BlockDeque;
pub use vecs::cursor::{Cursor, CursorMut};
pub use vecs::ring_buffer::RingBuffer;
