//! Cross-thread access to one generator instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::sequence::LowDiscrepancySequence;

/// A generator shared between threads behind a per-instance lock.
///
/// Every call holds the lock for its whole duration, so concurrent `pop`s
/// never observe the same counter value and `reseed` never interleaves with
/// a `pop`. Clones refer to the same generator.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::VdCorput;
/// use lds_gen::sync::Shared;
///
/// let shared = Shared::new(VdCorput::new(2).unwrap());
/// let other = shared.clone();
/// assert_eq!(shared.pop(), 0.5);
/// assert_eq!(other.pop(), 0.25);
/// ```
#[derive(Debug)]
pub struct Shared<G> {
    inner: Arc<Mutex<G>>,
}

impl<G> Clone for Shared<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: LowDiscrepancySequence> Shared<G> {
    /// Wraps `generator` for shared use.
    pub fn new(generator: G) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Returns the next point.
    pub fn pop(&self) -> G::Point {
        self.lock().pop()
    }

    /// Resets the counter of the wrapped generator.
    pub fn reseed(&self, seed: u64) {
        self.lock().reseed(seed);
    }

    /// Returns `n` consecutive points, with no other caller's points in
    /// between.
    pub fn pop_batch(&self, n: usize) -> Vec<G::Point> {
        self.lock().pop_batch(n)
    }

    /// Returns the dimension of the wrapped generator.
    pub fn dimension(&self) -> usize {
        self.lock().dimension()
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        f(&mut self.lock())
    }

    // Generator state is valid between calls, so a panic in another holder
    // leaves nothing half-updated.
    fn lock(&self) -> MutexGuard<'_, G> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
