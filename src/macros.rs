/// Creates a [`ChunkDeque`](crate::ChunkDeque) with the default chunk
/// capacity from a list of elements, front to back.
///
/// # Example
///
/// ```rust
/// use chunk_deque::chunk_deque;
///
/// let deque = chunk_deque![1, 2, 3];
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque[0], 1);
/// assert_eq!(deque.at(2), Ok(&3));
/// ```
#[macro_export]
macro_rules! chunk_deque {
    () => {
        <$crate::ChunkDeque<_>>::new()
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::ChunkDeque<_>>::from([$($value),+])
    };
}
