//! Error type shared by [`RingBuffer`](crate::RingBuffer) and
//! [`BlockDeque`](crate::BlockDeque).

use std::alloc::Layout;

use thiserror::Error;

/// Failures surfaced by the containers in this crate.
///
/// Out-of-range indexing is not represented here: the checked accessors return
/// `Option`, the `Index` operator panics, and `get_unchecked` is `unsafe`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// `pop_*`, `front` or `back` was called on a container with no elements.
    #[error("operation requires a non-empty container")]
    EmptyContainer,

    /// The global allocator returned null for the requested storage.
    #[error("failed to allocate {} bytes (align {})", .layout.size(), .layout.align())]
    AllocationFailure { layout: Layout },

    /// The requested capacity does not fit in `isize::MAX` bytes or overflows
    /// the next power of two.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// Element construction failed during bulk initialisation. Every element
    /// built before `index` has already been dropped and the storage released.
    #[error("failed to construct element {index}: {reason}")]
    ConstructionFailure { index: usize, reason: String },
}

pub type Result<T> = core::result::Result<T, CollectionError>;

impl CollectionError {
    /// Turns an allocation error into the process-level reaction the standard
    /// collections use: `handle_alloc_error` for a failed request, a panic for
    /// overflow. Used by the infallible `push_*` / `reserve` entry points.
    #[cold]
    #[inline(never)]
    pub(crate) fn abort_on_alloc(self) -> ! {
        match self {
            CollectionError::AllocationFailure { layout } => std::alloc::handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            CollectionError::EmptyContainer.to_string(),
            "operation requires a non-empty container"
        );
        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            CollectionError::AllocationFailure { layout }.to_string(),
            "failed to allocate 32 bytes (align 8)"
        );
        let err = CollectionError::ConstructionFailure {
            index: 3,
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "failed to construct element 3: boom");
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_error_abort_on_overflow_panics() {
        CollectionError::CapacityOverflow.abort_on_alloc();
    }
}
