//! `ChunkDeque`: a double-ended queue built from fixed-size heap chunks.
//!
//! Elements live in boxed blocks of `CHUNK` uninitialized slots. The blocks
//! are reached through a directory of nullable handles, and two positions
//! (`begin`, `end`) delimit the live range:
//!
//! ```text
//!  directory:  [ -- | c1 | c2 | c3 | -- | -- ]
//!                     ^              ^
//!                begin=(1, 6)    end=(3, 2)
//! ```
//!
//! Everything strictly between the two chunks is fully populated, the first
//! chunk is live from `begin.cursor` on, and the last chunk is live up to (not
//! including) `end.cursor`. A chunk is allocated on its first write and freed
//! as soon as its last live element leaves through either end.
//!
//! When a push would cross a chunk boundary past either end of the directory,
//! the directory is reallocated to three times the number of chunks in use
//! and the existing handles are moved into its middle third. Pushing then has
//! equal headroom at both ends, giving amortized O(1) pushes in both
//! directions. Elements themselves never move.
//!
//! Performance characteristics:
//! - Push/Pop: O(1) amortized at both ends, one chunk allocation per `CHUNK`
//!   pushes
//! - Random access: O(1), a division on the begin-relative offset
//! - Capacity: the directory is never shrunk by pops

mod directory;
mod error;
mod iter;
mod position;
mod traits;


pub use error::OutOfRange;
pub use iter::{IntoIter, Iter, IterMut};

use directory::{Direction, Directory};
use position::{index_split, initial_cursor, Position};
use serde::{Deserialize, Serialize};

/// Chunk capacity used when the type does not name one.
pub const DEFAULT_CHUNK_CAPACITY: usize = 10;

/// A double-ended queue of `T` stored in heap chunks of `CHUNK` elements.
pub struct ChunkDeque<T, const CHUNK: usize = DEFAULT_CHUNK_CAPACITY> {
    directory: Directory<T, CHUNK>,
    /// First live slot.
    begin: Position,
    /// One past the last live slot.
    end: Position,
}

/// A snapshot of a deque's chunk bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryLayout {
    /// Directory index of the first live chunk.
    pub begin_chunk: usize,
    /// Slot of the first live element within `begin_chunk`.
    pub begin_cursor: usize,
    /// Directory index of the chunk holding the end position.
    pub end_chunk: usize,
    /// One past the last live slot within `end_chunk`.
    pub end_cursor: usize,
    /// Number of slots in the directory.
    pub directory_capacity: usize,
    /// Number of directory slots that currently own a chunk.
    pub allocated_chunks: usize,
    /// Elements per chunk.
    pub chunk_capacity: usize,
}

impl DirectoryLayout {
    /// Number of elements described by the layout.
    ///
    /// A hand-built layout whose begin lies after its end describes no
    /// elements.
    pub const fn len(&self) -> usize {
        (self.end_chunk * self.chunk_capacity + self.end_cursor)
            .saturating_sub(self.begin_chunk * self.chunk_capacity + self.begin_cursor)
    }

    /// Returns `true` if the layout describes an empty deque.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const CHUNK: usize> ChunkDeque<T, CHUNK> {
    /// Creates an empty deque.
    ///
    /// The directory starts with a single null slot; no chunk is allocated
    /// until the first push.
    ///
    /// # Panics
    /// Panics if `CHUNK` is zero.
    pub fn new() -> Self {
        assert!(CHUNK != 0, "ChunkDeque CHUNK must be > 0");
        let start = Position::new(0, initial_cursor::<CHUNK>());
        Self {
            directory: Directory::with_len(1),
            begin: start,
            end: start,
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end.linear::<CHUNK>() - self.begin.linear::<CHUNK>()
    }

    /// Returns `true` if there are no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns the chunk capacity (`CHUNK`).
    #[inline(always)]
    pub const fn chunk_capacity(&self) -> usize {
        CHUNK
    }

    /// Returns the number of slots in the chunk directory.
    #[inline]
    pub fn directory_capacity(&self) -> usize {
        self.directory.len()
    }

    /// Returns the number of chunks currently allocated.
    pub fn allocated_chunks(&self) -> usize {
        self.directory.allocated()
    }

    /// Returns a snapshot of the chunk bookkeeping.
    pub fn layout(&self) -> DirectoryLayout {
        DirectoryLayout {
            begin_chunk: self.begin.chunk,
            begin_cursor: self.begin.cursor,
            end_chunk: self.end.chunk,
            end_cursor: self.end.cursor,
            directory_capacity: self.directory.len(),
            allocated_chunks: self.directory.allocated(),
            chunk_capacity: CHUNK,
        }
    }

    /// Appends an element to the back.
    pub fn push_back(&mut self, value: T) {
        // The write at the last slot of the last directory chunk would move
        // `end` off the directory.
        if self.end.cursor == CHUNK - 1 && self.end.chunk + 1 == self.directory.len() {
            self.grow(Direction::Back);
        }
        self.directory.ensure(self.end.chunk);
        // SAFETY: the chunk is allocated and `end` is one past the live range.
        unsafe { self.directory.write(self.end, value) };
        self.end.step_forward::<CHUNK>();
    }

    /// Prepends an element to the front.
    pub fn push_front(&mut self, value: T) {
        if self.begin.chunk == 0 && self.begin.cursor == 0 {
            self.grow(Direction::Front);
        }
        self.begin.step_backward::<CHUNK>();
        self.directory.ensure(self.begin.chunk);
        // SAFETY: the chunk is allocated and the slot just before the old
        // `begin` is not live.
        unsafe { self.directory.write(self.begin, value) };
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let at = self.begin;
        let crossed = self.begin.step_forward::<CHUNK>();
        // SAFETY: `at` was the first live slot and is now outside the range.
        let value = unsafe { self.directory.read(at) };
        if crossed {
            self.directory.release(at.chunk);
        }
        Some(value)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.end.step_backward::<CHUNK>();
        // SAFETY: the slot before the old `end` was the last live one and is
        // now outside the range.
        let value = unsafe { self.directory.read(self.end) };
        if self.end.cursor == 0 {
            self.directory.release(self.end.chunk);
        }
        Some(value)
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        // SAFETY: index < len => the translated slot is live.
        Some(unsafe { self.directory.get(self.position_of(index)) })
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let at = self.position_of(index);
        // SAFETY: index < len => the translated slot is live.
        Some(unsafe { self.directory.get_mut(at) })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        self.get(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len();
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without bounds checks.
    ///
    /// # Safety
    /// Caller must ensure `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.directory.get(self.position_of(index))
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checks.
    ///
    /// # Safety
    /// Caller must ensure `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let at = self.position_of(index);
        self.directory.get_mut(at)
    }

    /// Returns the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the first element mutably, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns the last element mutably, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Returns an iterator over `&T`, front to back.
    pub fn iter(&self) -> Iter<'_, T, CHUNK> {
        Iter::new(self.directory.slots(), self.begin, self.end)
    }

    /// Returns an iterator over `&mut T`, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, CHUNK> {
        let (begin, end) = (self.begin, self.end);
        IterMut::new(self.directory.slots_mut(), begin, end)
    }

    /// Drops every element and frees every chunk.
    ///
    /// The directory keeps its capacity; the positions are moved to the
    /// middle of it.
    pub fn clear(&mut self) {
        let (begin, end) = (self.begin, self.end);
        let restart = Position::new(self.directory.len() / 2, initial_cursor::<CHUNK>());
        // Mark the deque empty first so a panicking destructor cannot lead to
        // a second drop of the same element.
        self.begin = restart;
        self.end = restart;

        if begin == end {
            self.directory.release(begin.chunk);
        } else {
            // SAFETY: `[begin, end)` was the live range and is no longer
            // reachable through the positions.
            unsafe { self.directory.clear_range(begin, end) };
        }
    }

    /// Exchanges the contents of two deques in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Translates a logical index into a directory position.
    ///
    /// The offset is taken relative to the start of `begin.chunk`, so the
    /// chunk delta and cursor fall out of a single division.
    #[inline(always)]
    fn position_of(&self, index: usize) -> Position {
        let (delta, cursor) = index_split::<CHUNK>(self.begin.cursor + index);
        Position::new(self.begin.chunk + delta, cursor)
    }

    /// Reallocates the directory to three times the chunks in use and
    /// recenters them.
    ///
    /// When `end.cursor == 0` on a non-empty deque the end chunk holds no
    /// element (and no block), so it is not counted. Growing for the back is
    /// the exception: that chunk is the one about to be written. With
    /// `CHUNK > 1` a back growth only runs at `end.cursor == CHUNK - 1`, so
    /// the exception only matters for single-slot chunks.
    fn grow(&mut self, direction: Direction) {
        let trailing_empty =
            self.end.cursor == 0 && !self.is_empty() && direction == Direction::Front;
        let distance = self.end.chunk - self.begin.chunk;
        let span = if trailing_empty { distance } else { distance + 1 };
        #[cfg(feature = "tracing")]
        let old_capacity = self.directory.len();

        self.directory.recenter(self.begin.chunk, span);
        self.begin.chunk = span;
        self.end.chunk = span + distance;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?direction,
            old_capacity,
            new_capacity = self.directory.len(),
            span,
            "recentered chunk directory"
        );

        debug_assert!(self.end.chunk < self.directory.len());
        debug_assert!(self.begin.chunk > 0);
    }
}

impl<T, const CHUNK: usize> Default for ChunkDeque<T, CHUNK> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CHUNK: usize> Drop for ChunkDeque<T, CHUNK> {
    fn drop(&mut self) {
        self.clear();
    }
}
