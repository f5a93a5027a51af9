//! Van der Corput (digit-reversal) sequence.

use super::LowDiscrepancySequence;
use crate::types::LdsError;
use crate::validation::validate_base;

/// Base-`base` radical inverse of `k`, in `[0, 1)`.
///
/// The digits of `k` are mirrored about the radix point. Each remainder is
/// divided by a growing power of the base, never multiplied, so no
/// intermediate value exceeds `k`.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::vdc;
///
/// assert_eq!(vdc(11, 2), 0.8125);
/// assert_eq!(vdc(0, 3), 0.0);
/// ```
#[inline]
pub fn vdc(k: u64, base: u64) -> f64 {
    let mut k = k;
    let mut res = 0.0;
    let mut denom = 1.0;
    while k != 0 {
        denom *= base as f64;
        let remainder = k % base;
        k /= base;
        res += remainder as f64 / denom;
    }
    res
}

/// Van der Corput sequence generator.
///
/// Holds a counter starting at 0; each `pop` increments it and returns the
/// radical inverse of the new value.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::{LowDiscrepancySequence, VdCorput};
///
/// let mut vgen = VdCorput::new(2).unwrap();
/// vgen.reseed(0);
/// let values = vgen.pop_batch(4);
/// assert_eq!(values, vec![0.5, 0.25, 0.75, 0.125]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VdCorput {
    base: u64,
    count: u64,
}

impl VdCorput {
    /// Creates a generator for the given base with the counter at 0.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if `base < 2`. Composite bases are
    /// accepted with a [`UniformityWarning`](crate::validation::UniformityWarning).
    pub fn new(base: u64) -> Result<Self, LdsError> {
        validate_base(base, "VdCorput")?;
        Ok(Self::from_validated(base))
    }

    /// Builds a generator whose base the caller has already validated.
    #[inline]
    pub(crate) fn from_validated(base: u64) -> Self {
        Self { base, count: 0 }
    }

    /// Returns the base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the current counter value.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for VdCorput {
    fn default() -> Self {
        Self::from_validated(2)
    }
}

impl LowDiscrepancySequence for VdCorput {
    type Point = f64;

    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    #[inline]
    fn pop(&mut self) -> f64 {
        self.count = self.count.wrapping_add(1);
        vdc(self.count, self.base)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.count = seed;
    }

    #[inline]
    fn skip(&mut self, n: usize) {
        self.count = self.count.wrapping_add(n as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vdc_known_values() {
        assert_eq!(vdc(11, 2), 0.8125);
        assert_eq!(vdc(1, 2), 0.5);
        assert_eq!(vdc(1, 3), 1.0 / 3.0);
        assert_eq!(vdc(0, 7), 0.0);
    }

    #[test]
    fn test_vdc_large_counter_stays_below_one() {
        assert_eq!(vdc((1 << 40) - 1, 2), 1.0 - 2.0_f64.powi(-40));
        for base in [3, 5, 7, 7919] {
            let v = vdc((1 << 40) - 1, base);
            assert!((0.0..1.0).contains(&v), "vdc(2^40 - 1, {}) = {}", base, v);
        }
    }

    #[test]
    fn test_base_2_sequence() {
        let mut vgen = VdCorput::new(2).unwrap();
        vgen.reseed(0);
        let expected = [
            0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875, 0.0625, 0.5625, 0.3125,
        ];
        for &e in &expected {
            assert_eq!(vgen.pop(), e);
        }
    }

    #[test]
    fn test_base_3_sequence() {
        let mut vgen = VdCorput::new(3).unwrap();
        let expected = [1.0 / 3.0, 2.0 / 3.0, 1.0 / 9.0, 4.0 / 9.0, 7.0 / 9.0];
        for &e in &expected {
            assert!((vgen.pop() - e).abs() < 1e-15);
        }
    }

    #[test]
    fn test_reseed_sets_counter_directly() {
        let mut vgen = VdCorput::new(2).unwrap();
        vgen.reseed(5);
        assert_eq!(vgen.count(), 5);
        assert_eq!(vgen.pop(), vdc(6, 2));
        assert_eq!(vgen.count(), 6);
    }

    #[test]
    fn test_skip_matches_pops() {
        let mut a = VdCorput::new(5).unwrap();
        let mut b = VdCorput::new(5).unwrap();
        a.skip(17);
        for _ in 0..17 {
            b.pop();
        }
        assert_eq!(a, b);
        assert_eq!(a.pop(), b.pop());
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(
            VdCorput::new(1),
            Err(LdsError::InvalidBase {
                generator: "VdCorput",
                base: 1
            })
        );
    }

    #[test]
    fn test_composite_base_accepted() {
        let mut vgen = VdCorput::new(4).unwrap();
        assert_eq!(vgen.pop(), 0.25);
    }

    #[test]
    fn test_default_is_base_2() {
        let vgen = VdCorput::default();
        assert_eq!(vgen.base(), 2);
        assert_eq!(vgen.count(), 0);
        assert_eq!(vgen.dimension(), 1);
    }

    #[test]
    fn test_largest_prime_base() {
        let base = u64::MAX - 58;
        let mut vgen = VdCorput::new(base).unwrap();
        assert_eq!(vgen.pop(), 1.0 / base as f64);
    }
}
