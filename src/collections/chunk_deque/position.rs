//! Begin/end bookkeeping for `ChunkDeque`.
//!
//! A position is a `(chunk, cursor)` pair: `chunk` indexes the directory and
//! `cursor` addresses a slot inside that chunk. Reading the pair as the two
//! digits of a base-`CHUNK` number gives the logical order of the deque, which
//! is why the derived ordering (chunk first, then cursor) is the right one.

/// A `(chunk index, in-chunk cursor)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Position {
    pub(crate) chunk: usize,
    pub(crate) cursor: usize,
}

impl Position {
    #[inline(always)]
    pub(crate) const fn new(chunk: usize, cursor: usize) -> Self {
        Self { chunk, cursor }
    }

    /// Flattens the position into a slot count from directory slot 0.
    #[inline(always)]
    pub(crate) const fn linear<const CHUNK: usize>(self) -> usize {
        self.chunk * CHUNK + self.cursor
    }

    /// Moves one slot towards the back, returning `true` if a chunk boundary
    /// was crossed.
    #[inline(always)]
    pub(crate) fn step_forward<const CHUNK: usize>(&mut self) -> bool {
        let wrapped = step_forward::<CHUNK>(&mut self.cursor);
        if wrapped {
            self.chunk += 1;
        }
        wrapped
    }

    /// Moves one slot towards the front, returning `true` if a chunk boundary
    /// was crossed.
    ///
    /// The caller must have checked that the position is not `(0, 0)`.
    #[inline(always)]
    pub(crate) fn step_backward<const CHUNK: usize>(&mut self) -> bool {
        let wrapped = step_backward::<CHUNK>(&mut self.cursor);
        if wrapped {
            debug_assert!(self.chunk > 0, "stepped backward past directory slot 0");
            self.chunk -= 1;
        }
        wrapped
    }
}

/// Advances `cursor` within `[0, CHUNK)`. Returns `true` when it wrapped to 0.
#[inline(always)]
pub(crate) fn step_forward<const CHUNK: usize>(cursor: &mut usize) -> bool {
    *cursor += 1;
    if *cursor == CHUNK {
        *cursor = 0;
        true
    } else {
        false
    }
}

/// Retreats `cursor` within `[0, CHUNK)`. Returns `true` when it wrapped to
/// `CHUNK - 1`.
#[inline(always)]
pub(crate) fn step_backward<const CHUNK: usize>(cursor: &mut usize) -> bool {
    if *cursor == 0 {
        *cursor = CHUNK - 1;
        true
    } else {
        *cursor -= 1;
        false
    }
}

/// Splits a slot offset (relative to the start of some chunk) into a chunk
/// delta and an in-chunk cursor.
#[inline(always)]
pub(crate) fn index_split<const CHUNK: usize>(offset: usize) -> (usize, usize) {
    debug_assert!(CHUNK != 0);
    if CHUNK != 0 && CHUNK.is_power_of_two() {
        let shift = CHUNK.trailing_zeros() as usize;
        let mask = CHUNK - 1;
        (offset >> shift, offset & mask)
    } else {
        (offset / CHUNK, offset % CHUNK)
    }
}

/// Cursor a fresh deque starts at: the middle of its first chunk, so that
/// the first few pushes at either end stay inside it.
#[inline(always)]
pub(crate) const fn initial_cursor<const CHUNK: usize>() -> usize {
    (CHUNK - 1) / 2
}
