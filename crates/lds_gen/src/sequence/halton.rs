//! Halton sequences: one Van der Corput generator per coordinate.

use super::{LowDiscrepancySequence, VdCorput};
use crate::types::LdsError;
use crate::validation::validate_bases;

/// 2-D Halton sequence generator.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::{Halton, LowDiscrepancySequence};
///
/// let mut hgen = Halton::new([2, 3]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop()[0], 0.5);
/// assert_eq!(hgen.pop()[0], 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct Halton {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Halton {
    /// Creates a generator with one base per coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if either base is below 2.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        validate_bases(&base, "Halton")?;
        Ok(Self {
            vdc0: VdCorput::from_validated(base[0]),
            vdc1: VdCorput::from_validated(base[1]),
        })
    }
}

impl LowDiscrepancySequence for Halton {
    type Point = [f64; 2];

    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        [self.vdc0.pop(), self.vdc1.pop()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc0.skip(n);
        self.vdc1.skip(n);
    }
}

/// k-D Halton sequence generator.
///
/// Coordinates are returned in base order.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::{HaltonN, LowDiscrepancySequence};
///
/// let mut hgen = HaltonN::new(&[2, 3, 5]).unwrap();
/// hgen.reseed(0);
/// let point = hgen.pop();
/// assert_eq!(point.len(), 3);
/// assert_eq!(point[2], 0.2);
/// ```
#[derive(Clone, Debug)]
pub struct HaltonN {
    vdcs: Vec<VdCorput>,
}

impl HaltonN {
    /// Creates a generator with one base per coordinate.
    ///
    /// # Errors
    ///
    /// - [`LdsError::EmptyBases`] if `base` is empty
    /// - [`LdsError::InvalidBase`] if any base is below 2
    pub fn new(base: &[u64]) -> Result<Self, LdsError> {
        validate_bases(base, "HaltonN")?;
        Ok(Self {
            vdcs: base.iter().map(|&b| VdCorput::from_validated(b)).collect(),
        })
    }
}

impl LowDiscrepancySequence for HaltonN {
    type Point = Vec<f64>;

    #[inline]
    fn dimension(&self) -> usize {
        self.vdcs.len()
    }

    fn pop(&mut self) -> Vec<f64> {
        self.vdcs.iter_mut().map(|v| v.pop()).collect()
    }

    fn reseed(&mut self, seed: u64) {
        for vdc in &mut self.vdcs {
            vdc.reseed(seed);
        }
    }

    fn skip(&mut self, n: usize) {
        for vdc in &mut self.vdcs {
            vdc.skip(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_halton_first_points() {
        let mut hgen = Halton::new([2, 3]).unwrap();
        hgen.reseed(0);
        let p = hgen.pop();
        assert_eq!(p[0], 0.5);
        assert_abs_diff_eq!(p[1], 1.0 / 3.0, epsilon = 1e-10);
        let p = hgen.pop();
        assert_eq!(p[0], 0.25);
        assert_abs_diff_eq!(p[1], 2.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_halton_reseed() {
        let mut hgen = Halton::new([2, 3]).unwrap();
        hgen.reseed(10);
        let first = hgen.pop();
        hgen.pop();
        hgen.reseed(10);
        assert_eq!(hgen.pop(), first);
    }

    #[test]
    fn test_halton_invalid_base() {
        assert!(matches!(
            Halton::new([2, 0]),
            Err(LdsError::InvalidBase {
                generator: "Halton",
                base: 0
            })
        ));
    }

    #[test]
    fn test_halton_n_points() {
        let mut hgen = HaltonN::new(&[2, 3, 5]).unwrap();
        hgen.reseed(0);
        let p = hgen.pop();
        assert_eq!(p[0], 0.5);
        assert_abs_diff_eq!(p[1], 1.0 / 3.0, epsilon = 1e-15);
        assert_eq!(p[2], 0.2);
        let p = hgen.pop();
        assert_eq!(p[0], 0.25);
        assert_abs_diff_eq!(p[1], 2.0 / 3.0, epsilon = 1e-15);
        assert_eq!(p[2], 0.4);
    }

    #[test]
    fn test_halton_n_matches_halton() {
        let mut a = Halton::new([2, 3]).unwrap();
        let mut b = HaltonN::new(&[2, 3]).unwrap();
        for _ in 0..50 {
            assert_eq!(a.pop().to_vec(), b.pop());
        }
    }

    #[test]
    fn test_halton_n_empty() {
        assert!(matches!(
            HaltonN::new(&[]),
            Err(LdsError::EmptyBases { .. })
        ));
    }

    #[test]
    fn test_halton_n_dimension() {
        let hgen = HaltonN::new(&[2, 3, 5, 7, 11]).unwrap();
        assert_eq!(hgen.dimension(), 5);
    }
}
