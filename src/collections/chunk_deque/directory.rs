//! The chunk directory: an owned array of nullable chunk handles.
//!
//! Each slot either holds nothing or a boxed block of `CHUNK` uninitialized
//! element slots. The directory never tracks which element slots are live;
//! that is derived from the deque's begin/end positions. Consequently every
//! element-level method here is `unsafe` and documents the liveness state it
//! expects.

use super::position::Position;
use core::{
    iter,
    mem::{self, MaybeUninit},
    ops::Range,
    ptr,
};

/// Raw storage for exactly `CHUNK` elements.
pub(crate) type Chunk<T, const CHUNK: usize> = [MaybeUninit<T>; CHUNK];

/// A directory slot: null, or the owning handle of one chunk.
pub(crate) type Slot<T, const CHUNK: usize> = Option<Box<Chunk<T, CHUNK>>>;

/// A block taken out of the directory with the range still live in it.
type Detached<T, const CHUNK: usize> = (Box<Chunk<T, CHUNK>>, Range<usize>);

/// Which end of the deque ran out of directory room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Front,
    Back,
}

pub(crate) struct Directory<T, const CHUNK: usize> {
    slots: Vec<Slot<T, CHUNK>>,
}

impl<T, const CHUNK: usize> Directory<T, CHUNK> {
    /// Creates a directory of `len` null slots.
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            slots: null_slots(len),
        }
    }

    /// Directory capacity, in chunks.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn is_allocated(&self, chunk: usize) -> bool {
        matches!(self.slots.get(chunk), Some(Some(_)))
    }

    /// Number of non-null slots.
    pub(crate) fn allocated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub(crate) fn slots(&self) -> &[Slot<T, CHUNK>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T, CHUNK>] {
        &mut self.slots
    }

    /// Allocates the chunk at `chunk` unless one is already there.
    #[inline]
    pub(crate) fn ensure(&mut self, chunk: usize) {
        let slot = &mut self.slots[chunk];
        if slot.is_none() {
            *slot = Some(new_uninit_chunk::<T, CHUNK>());
            #[cfg(feature = "tracing")]
            tracing::trace!(chunk, "allocated chunk");
        }
    }

    /// Frees the raw block at `chunk`, if any.
    ///
    /// No element destructors run: the caller must already have moved out or
    /// dropped every live element of that chunk.
    #[inline]
    pub(crate) fn release(&mut self, chunk: usize) {
        if self.slots[chunk].take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(chunk, "released chunk");
        }
    }

    /// Constructs `value` in the slot at `at`.
    ///
    /// # Safety
    /// The chunk at `at.chunk` must be allocated and the slot must be vacant;
    /// otherwise the previous occupant is leaked.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, at: Position, value: T) {
        debug_assert!(self.is_allocated(at.chunk));
        debug_assert!(at.cursor < CHUNK);
        let chunk = self.slots.get_unchecked_mut(at.chunk).as_mut().unwrap_unchecked();
        chunk.get_unchecked_mut(at.cursor).write(value);
    }

    /// Moves the element at `at` out, leaving the slot logically vacant.
    ///
    /// # Safety
    /// The slot at `at` must hold a live element, and the caller must stop
    /// treating it as live.
    #[inline(always)]
    pub(crate) unsafe fn read(&mut self, at: Position) -> T {
        debug_assert!(self.is_allocated(at.chunk));
        let chunk = self.slots.get_unchecked(at.chunk).as_ref().unwrap_unchecked();
        chunk.get_unchecked(at.cursor).assume_init_read()
    }

    /// # Safety
    /// The slot at `at` must hold a live element.
    #[inline(always)]
    pub(crate) unsafe fn get(&self, at: Position) -> &T {
        debug_assert!(self.is_allocated(at.chunk));
        let chunk = self.slots.get_unchecked(at.chunk).as_ref().unwrap_unchecked();
        chunk.get_unchecked(at.cursor).assume_init_ref()
    }

    /// # Safety
    /// The slot at `at` must hold a live element.
    #[inline(always)]
    pub(crate) unsafe fn get_mut(&mut self, at: Position) -> &mut T {
        debug_assert!(self.is_allocated(at.chunk));
        let chunk = self.slots.get_unchecked_mut(at.chunk).as_mut().unwrap_unchecked();
        chunk.get_unchecked_mut(at.cursor).assume_init_mut()
    }

    /// Drops every element of the live range `[begin, end)` and frees the
    /// chunks holding them.
    ///
    /// All blocks are detached from the directory before the first destructor
    /// runs, so the directory is left with null slots even if one of them
    /// unwinds. The remaining elements are still dropped in that case.
    ///
    /// # Safety
    /// `[begin, end)` must be non-empty and exactly the live range.
    pub(crate) unsafe fn clear_range(&mut self, begin: Position, end: Position) {
        debug_assert!(begin < end);
        let last = if end.cursor == 0 { end.chunk - 1 } else { end.chunk };
        // Reversed: blocks are popped, and elements go front to back.
        let mut detached: Vec<Detached<T, CHUNK>> = (begin.chunk..=last)
            .rev()
            .filter_map(|chunk| {
                let lo = if chunk == begin.chunk { begin.cursor } else { 0 };
                let hi = if chunk == end.chunk { end.cursor } else { CHUNK };
                self.slots[chunk].take().map(|block| (block, lo..hi))
            })
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(chunks = detached.len(), "cleared chunks");
        drop_detached(&mut detached);
    }

    /// Replaces the directory with one three times `span` long, moving the
    /// handles `[first, first + span)` into its middle third.
    ///
    /// Handles are moved, never duplicated: the old array only holds nulls
    /// when it is dropped.
    pub(crate) fn recenter(&mut self, first: usize, span: usize) {
        debug_assert!(span > 0);
        debug_assert!(first + span <= self.slots.len());
        debug_assert!(
            self.slots[..first].iter().all(Option::is_none)
                && self.slots[first + span..].iter().all(Option::is_none),
            "allocated chunk outside the recentered span"
        );
        let mut slots = Vec::with_capacity(span * 3);
        slots.extend(iter::repeat_with(|| None).take(span));
        slots.extend(self.slots[first..first + span].iter_mut().map(Option::take));
        slots.extend(iter::repeat_with(|| None).take(span));
        self.slots = slots;
    }
}

/// Drops the live range of every detached block, carrying on past a
/// panicking destructor.
///
/// # Safety
/// Each range must hold exactly the live elements of its block.
unsafe fn drop_detached<T, const CHUNK: usize>(blocks: &mut Vec<Detached<T, CHUNK>>) {
    struct Dropper<'a, T, const CHUNK: usize>(&'a mut Vec<Detached<T, CHUNK>>);

    impl<T, const CHUNK: usize> Drop for Dropper<'_, T, CHUNK> {
        fn drop(&mut self) {
            // SAFETY: the blocks still in the vector were never touched.
            unsafe { drop_detached(self.0) };
        }
    }

    while let Some((mut block, live)) = blocks.pop() {
        let guard = Dropper(&mut *blocks);
        let base = block.as_mut_ptr().cast::<T>();
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(live.start), live.len()));
        mem::forget(guard);
    }
}

fn null_slots<T, const CHUNK: usize>(len: usize) -> Vec<Slot<T, CHUNK>> {
    iter::repeat_with(|| None).take(len).collect()
}

fn new_uninit_chunk<T, const CHUNK: usize>() -> Box<Chunk<T, CHUNK>> {
    // Avoid creating a potentially large array on the stack.
    //
    // SAFETY: An uninitialized `[MaybeUninit<T>; CHUNK]` is valid; elements
    // are written individually and only live slots are ever dropped.
    unsafe { Box::<Chunk<T, CHUNK>>::new_uninit().assume_init() }
}
