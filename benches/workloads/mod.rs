pub mod access;
pub mod ends;
pub mod queue;

/// Element counts shared by every workload.
pub const SIZES: &[usize] = &[100, 10_000];
