pub mod block_deque;
pub mod cursor;
pub mod iter;
pub mod ring_buffer;
