//! # `chunk-deque` - Chunked Double-Ended Queue
//!
//! A double-ended, random-access sequence built from discontiguous,
//! fixed-size heap chunks. Chunks are reached through a directory of
//! nullable handles; two positions mark the first live slot and one past the
//! last, and everything between them is initialized.
//!
//! ## Guarantees
//!
//! - **Amortized O(1) at both ends**: when either end of the directory is
//!   exhausted, it is reallocated at three times the chunks in use, with the
//!   existing chunks moved into the middle third.
//! - **Stable elements**: growth moves chunk handles, never elements.
//! - **O(1) random access**: a logical index becomes `(chunk, cursor)` with a
//!   single division relative to the begin position.
//! - **No uninitialized reads**: chunk storage is `MaybeUninit<T>`, and
//!   liveness is derived from the begin/end positions instead of per-slot
//!   flags.
//!
//! ## Configuration
//!
//! The chunk capacity is the const parameter `CHUNK` (default
//! [`DEFAULT_CHUNK_CAPACITY`], 10). With the `tracing` feature, growth events
//! and chunk allocation/release are emitted as `tracing` events.
//!
//! ## Example
//!
//! ```rust
//! use chunk_deque::ChunkDeque;
//!
//! let mut deque: ChunkDeque<u32> = (1..=25).collect();
//! assert_eq!(deque.len(), 25);
//! assert_eq!(deque.at(24), Ok(&25));
//!
//! for _ in 0..5 {
//!     deque.pop_front();
//! }
//! deque.push_front(0);
//! assert_eq!(deque[0], 0);
//! assert_eq!(deque.len(), 21);
//! assert!(deque.at(21).is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;

pub use collections::{ChunkDeque, DirectoryLayout, OutOfRange, DEFAULT_CHUNK_CAPACITY};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem::{self, MaybeUninit};

    // A directory slot is a nullable pointer, nothing more.
    assert!(
        mem::size_of::<Option<Box<[MaybeUninit<u64>; DEFAULT_CHUNK_CAPACITY]>>>()
            == mem::size_of::<usize>()
    );

    // Directory vector plus two (chunk, cursor) positions.
    assert!(mem::size_of::<ChunkDeque<u64>>() == mem::size_of::<usize>() * 7);
};
