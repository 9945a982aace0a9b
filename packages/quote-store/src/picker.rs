//! Random index selection.

use rand::Rng;

/// Draws an index in `[0, len)` for random quote selection.
///
/// Callers guarantee `len > 0`.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Returns the same index on every draw; the store clamps it to its length.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndexPicker(pub usize);

impl IndexPicker for FixedIndexPicker {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

impl<F> IndexPicker for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick(&self, len: usize) -> usize {
        self(len)
    }
}
