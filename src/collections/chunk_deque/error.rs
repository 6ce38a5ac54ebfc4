use core::fmt;

/// The error returned by checked access with an index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested logical index.
    pub index: usize,
    /// The length of the deque at the time of the request.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range for a deque of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
