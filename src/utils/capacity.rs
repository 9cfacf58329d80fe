//! Capacity arithmetic shared by the ring buffer and the block deque.

use core::mem;

use crate::error::{CollectionError, Result};

/// Target size of one [`BlockDeque`](crate::BlockDeque) block in bytes.
pub const BLOCK_BYTES: usize = 256;
/// Lower bound on elements per block; large elements still get a few per block.
pub const MIN_BLOCK_LEN: usize = 4;
/// Upper bound on elements per block; also used for zero-sized types.
pub const MAX_BLOCK_LEN: usize = 256;

/// Smallest power of two `>= n`, with `0` for `n == 0`.
#[inline]
pub fn ring_capacity_for(n: usize) -> Result<usize> {
    if n == 0 {
        return Ok(0);
    }
    n.checked_next_power_of_two()
        .ok_or(CollectionError::CapacityOverflow)
}

/// Capacity after one doubling step: `max(1, 2 * capacity)`.
#[inline]
pub fn doubled(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        Ok(1)
    } else {
        capacity
            .checked_mul(2)
            .ok_or(CollectionError::CapacityOverflow)
    }
}

/// Elements per block for `T`: `BLOCK_BYTES / size_of::<T>()` clamped to
/// `[MIN_BLOCK_LEN, MAX_BLOCK_LEN]`.
pub const fn block_len<T>() -> usize {
    let size = mem::size_of::<T>();
    if size == 0 {
        return MAX_BLOCK_LEN;
    }
    let n = BLOCK_BYTES / size;
    if n < MIN_BLOCK_LEN {
        MIN_BLOCK_LEN
    } else if n > MAX_BLOCK_LEN {
        MAX_BLOCK_LEN
    } else {
        n
    }
}
