// Random source for choosing a suggestion.
//
// Production draws from the thread-local RNG on every call, so concurrent
// evaluations share nothing. Tests seed or pin the draw.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty suggestion list.
pub trait SuggestionPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform draw from `rand::rng()` on each call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl SuggestionPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible sequence of uniform draws from a fixed seed.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SuggestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..len)
    }
}

/// Always the same slot (wrapped to the list length).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl SuggestionPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}
