use super::{ChunkDeque, IntoIter, Iter, IterMut, OutOfRange};
use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
};
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

impl<T: Clone, const CHUNK: usize> Clone for ChunkDeque<T, CHUNK> {
    /// Deep-clones every live element into freshly allocated chunks.
    ///
    /// The clone starts with the source's directory capacity and begin
    /// position and is filled through `push_back`, so it ends up with the same
    /// layout without ever growing. If an element's `clone` panics, the
    /// partial copy is dropped normally: it releases exactly the elements and
    /// chunks written so far.
    fn clone(&self) -> Self {
        let mut out = Self {
            directory: super::Directory::with_len(self.directory.len()),
            begin: self.begin,
            end: self.begin,
        };
        for value in self {
            out.push_back(value.clone());
        }
        out
    }

    /// Copy-and-swap: the new contents are fully built before `self` is
    /// touched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: fmt::Debug, const CHUNK: usize> fmt::Debug for ChunkDeque<T, CHUNK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, const A: usize, const B: usize> PartialEq<ChunkDeque<U, B>> for ChunkDeque<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &ChunkDeque<U, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const CHUNK: usize> Eq for ChunkDeque<T, CHUNK> {}

impl<T, U, const CHUNK: usize> PartialEq<[U]> for ChunkDeque<T, CHUNK>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, const CHUNK: usize> PartialEq<Vec<U>> for ChunkDeque<T, CHUNK>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<T: Hash, const CHUNK: usize> Hash for ChunkDeque<T, CHUNK> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T, const CHUNK: usize> Index<usize> for ChunkDeque<T, CHUNK> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", OutOfRange { index, len: self.len() }),
        }
    }
}

impl<T, const CHUNK: usize> IndexMut<usize> for ChunkDeque<T, CHUNK> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", OutOfRange { index, len }),
        }
    }
}

impl<T, const CHUNK: usize> Extend<T> for ChunkDeque<T, CHUNK> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, const CHUNK: usize> Extend<&'a T> for ChunkDeque<T, CHUNK> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const CHUNK: usize> FromIterator<T> for ChunkDeque<T, CHUNK> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const CHUNK: usize, const N: usize> From<[T; N]> for ChunkDeque<T, CHUNK> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const CHUNK: usize> From<Vec<T>> for ChunkDeque<T, CHUNK> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const CHUNK: usize> IntoIterator for ChunkDeque<T, CHUNK> {
    type Item = T;
    type IntoIter = IntoIter<T, CHUNK>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const CHUNK: usize> IntoIterator for &'a ChunkDeque<T, CHUNK> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CHUNK>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const CHUNK: usize> IntoIterator for &'a mut ChunkDeque<T, CHUNK> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, CHUNK>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Serialize, const CHUNK: usize> Serialize for ChunkDeque<T, CHUNK> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>, const CHUNK: usize> Deserialize<'de> for ChunkDeque<T, CHUNK> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}

struct SeqVisitor<T, const CHUNK: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const CHUNK: usize> Visitor<'de> for SeqVisitor<T, CHUNK> {
    type Value = ChunkDeque<T, CHUNK>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut deque = ChunkDeque::new();
        while let Some(value) = seq.next_element()? {
            deque.push_back(value);
        }
        Ok(deque)
    }
}
