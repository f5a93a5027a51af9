//! Points on the unit circle and in the unit disk.

use super::{LowDiscrepancySequence, VdCorput, TWO_PI};
use crate::types::LdsError;
use crate::validation::{validate_base, validate_bases};

/// Unit-circle sequence generator.
///
/// Maps `v` to `θ = 2πv` and returns `[sin θ, cos θ]`, sine first.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::{Circle, LowDiscrepancySequence};
///
/// let mut cgen = Circle::new(2).unwrap();
/// cgen.reseed(0);
/// let [s, c] = cgen.pop();
/// assert!(s.abs() < 1e-15);
/// assert_eq!(c, -1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Circle {
    vdc: VdCorput,
}

impl Circle {
    /// Creates a generator for the given base.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if `base < 2`.
    pub fn new(base: u64) -> Result<Self, LdsError> {
        validate_base(base, "Circle")?;
        Ok(Self::from_validated(base))
    }

    #[inline]
    pub(crate) fn from_validated(base: u64) -> Self {
        Self {
            vdc: VdCorput::from_validated(base),
        }
    }
}

impl LowDiscrepancySequence for Circle {
    type Point = [f64; 2];

    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        let theta = self.vdc.pop() * TWO_PI;
        [theta.sin(), theta.cos()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc.skip(n);
    }
}

/// Unit-disk sequence generator.
///
/// The angle comes from the first base and the radius from the square root
/// of the second, which makes the points area-uniform.
/// Returns `[r cos θ, r sin θ]`.
#[derive(Clone, Debug)]
pub struct Disk {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Disk {
    /// Creates a generator from an angle base and a radius base.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if either base is below 2.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        validate_bases(&base, "Disk")?;
        Ok(Self {
            vdc0: VdCorput::from_validated(base[0]),
            vdc1: VdCorput::from_validated(base[1]),
        })
    }
}

impl LowDiscrepancySequence for Disk {
    type Point = [f64; 2];

    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        let theta = self.vdc0.pop() * TWO_PI;
        let radius = self.vdc1.pop().sqrt();
        [radius * theta.cos(), radius * theta.sin()]
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
