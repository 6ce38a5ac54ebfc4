//! Iterators over `ChunkDeque`.
//!
//! The borrowing iterators split the live range into three parts: the
//! partially live chunk at each end and the fully live chunks in between.
//! They walk slot by slot and enter the next chunk when the current one runs
//! out, so no index translation happens per element.

use super::directory::Slot;
use super::position::Position;
use super::ChunkDeque;
use core::{iter::FusedIterator, mem::MaybeUninit, slice};

/// Iterator over `&T` for a `ChunkDeque`.
pub struct Iter<'a, T, const CHUNK: usize> {
    /// Fully live chunks not yet entered.
    chunks: slice::Iter<'a, Slot<T, CHUNK>>,
    front: slice::Iter<'a, MaybeUninit<T>>,
    back: slice::Iter<'a, MaybeUninit<T>>,
    remaining: usize,
}

impl<'a, T, const CHUNK: usize> Iter<'a, T, CHUNK> {
    pub(super) fn new(slots: &'a [Slot<T, CHUNK>], begin: Position, end: Position) -> Self {
        let remaining = end.linear::<CHUNK>() - begin.linear::<CHUNK>();
        let mut iter = Self {
            chunks: Default::default(),
            front: Default::default(),
            back: Default::default(),
            remaining,
        };
        if remaining == 0 {
            return iter;
        }
        let (last, hi) = last_live::<CHUNK>(end);
        match &slots[begin.chunk..=last] {
            [only] => iter.front = live(only)[begin.cursor..hi].iter(),
            [first, middle @ .., tail] => {
                iter.front = live(first)[begin.cursor..].iter();
                iter.chunks = middle.iter();
                iter.back = live(tail)[..hi].iter();
            }
            [] => unreachable!("non-empty range spans no chunk"),
        }
        iter
    }
}

impl<'a, T, const CHUNK: usize> Iterator for Iter<'a, T, CHUNK> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.front.next() {
                self.remaining -= 1;
                // SAFETY: only live slots are reachable from the iterator.
                return Some(unsafe { slot.assume_init_ref() });
            }
            match self.chunks.next() {
                Some(chunk) => self.front = live(chunk).iter(),
                None => break,
            }
        }
        let slot = self.back.next()?;
        self.remaining -= 1;
        // SAFETY: as above.
        Some(unsafe { slot.assume_init_ref() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const CHUNK: usize> DoubleEndedIterator for Iter<'a, T, CHUNK> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.back.next_back() {
                self.remaining -= 1;
                // SAFETY: only live slots are reachable from the iterator.
                return Some(unsafe { slot.assume_init_ref() });
            }
            match self.chunks.next_back() {
                Some(chunk) => self.back = live(chunk).iter(),
                None => break,
            }
        }
        let slot = self.front.next_back()?;
        self.remaining -= 1;
        // SAFETY: as above.
        Some(unsafe { slot.assume_init_ref() })
    }
}

impl<'a, T, const CHUNK: usize> ExactSizeIterator for Iter<'a, T, CHUNK> {}

impl<'a, T, const CHUNK: usize> FusedIterator for Iter<'a, T, CHUNK> {}

impl<'a, T, const CHUNK: usize> Clone for Iter<'a, T, CHUNK> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

/// Iterator over `&mut T` for a `ChunkDeque`.
pub struct IterMut<'a, T, const CHUNK: usize> {
    chunks: slice::IterMut<'a, Slot<T, CHUNK>>,
    front: slice::IterMut<'a, MaybeUninit<T>>,
    back: slice::IterMut<'a, MaybeUninit<T>>,
    remaining: usize,
}

impl<'a, T, const CHUNK: usize> IterMut<'a, T, CHUNK> {
    pub(super) fn new(slots: &'a mut [Slot<T, CHUNK>], begin: Position, end: Position) -> Self {
        let remaining = end.linear::<CHUNK>() - begin.linear::<CHUNK>();
        let mut iter = Self {
            chunks: Default::default(),
            front: Default::default(),
            back: Default::default(),
            remaining,
        };
        if remaining == 0 {
            return iter;
        }
        let (last, hi) = last_live::<CHUNK>(end);
        match &mut slots[begin.chunk..=last] {
            [only] => iter.front = live_mut(only)[begin.cursor..hi].iter_mut(),
            [first, middle @ .., tail] => {
                iter.front = live_mut(first)[begin.cursor..].iter_mut();
                iter.chunks = middle.iter_mut();
                iter.back = live_mut(tail)[..hi].iter_mut();
            }
            [] => unreachable!("non-empty range spans no chunk"),
        }
        iter
    }
}

impl<'a, T, const CHUNK: usize> Iterator for IterMut<'a, T, CHUNK> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.front.next() {
                self.remaining -= 1;
                // SAFETY: only live slots are reachable, each exactly once.
                return Some(unsafe { slot.assume_init_mut() });
            }
            match self.chunks.next() {
                Some(chunk) => self.front = live_mut(chunk).iter_mut(),
                None => break,
            }
        }
        let slot = self.back.next()?;
        self.remaining -= 1;
        // SAFETY: as above.
        Some(unsafe { slot.assume_init_mut() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const CHUNK: usize> DoubleEndedIterator for IterMut<'a, T, CHUNK> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.back.next_back() {
                self.remaining -= 1;
                // SAFETY: only live slots are reachable, each exactly once.
                return Some(unsafe { slot.assume_init_mut() });
            }
            match self.chunks.next_back() {
                Some(chunk) => self.back = live_mut(chunk).iter_mut(),
                None => break,
            }
        }
        let slot = self.front.next_back()?;
        self.remaining -= 1;
        // SAFETY: as above.
        Some(unsafe { slot.assume_init_mut() })
    }
}

impl<'a, T, const CHUNK: usize> ExactSizeIterator for IterMut<'a, T, CHUNK> {}

impl<'a, T, const CHUNK: usize> FusedIterator for IterMut<'a, T, CHUNK> {}

/// Owning iterator for a `ChunkDeque`.
pub struct IntoIter<T, const CHUNK: usize> {
    inner: ChunkDeque<T, CHUNK>,
}

impl<T, const CHUNK: usize> IntoIter<T, CHUNK> {
    pub(super) fn new(inner: ChunkDeque<T, CHUNK>) -> Self {
        Self { inner }
    }
}

impl<T, const CHUNK: usize> Iterator for IntoIter<T, CHUNK> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, const CHUNK: usize> DoubleEndedIterator for IntoIter<T, CHUNK> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, const CHUNK: usize> ExactSizeIterator for IntoIter<T, CHUNK> {}

impl<T, const CHUNK: usize> FusedIterator for IntoIter<T, CHUNK> {}

/// The chunk holding the last live element, and the live bound within it.
#[inline(always)]
fn last_live<const CHUNK: usize>(end: Position) -> (usize, usize) {
    if end.cursor == 0 {
        (end.chunk - 1, CHUNK)
    } else {
        (end.chunk, end.cursor)
    }
}

#[inline(always)]
fn live<T, const CHUNK: usize>(slot: &Slot<T, CHUNK>) -> &[MaybeUninit<T>] {
    match slot {
        Some(chunk) => &chunk[..],
        None => &[],
    }
}

#[inline(always)]
fn live_mut<T, const CHUNK: usize>(slot: &mut Slot<T, CHUNK>) -> &mut [MaybeUninit<T>] {
    match slot {
        Some(chunk) => &mut chunk[..],
        None => &mut [],
    }
}
