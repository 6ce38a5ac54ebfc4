//! Chunked collections.
//!
//! - `chunk_deque`: a double-ended queue stored in fixed-size heap chunks
//!   reached through a recentering directory of chunk handles.

pub mod chunk_deque;

pub use chunk_deque::{ChunkDeque, DirectoryLayout, OutOfRange, DEFAULT_CHUNK_CAPACITY};
