//! Closed-form generators on the 2-sphere and the 3-sphere.

use super::{Circle, LowDiscrepancySequence, VdCorput, TWO_PI};
use crate::types::LdsError;
use crate::validation::validate_bases;

/// 2-sphere sequence generator (cylindrical equal-area mapping).
///
/// `cos φ = 2v - 1` comes from the first base; the azimuth comes from a
/// [`Circle`] on the second. Returns `[sin φ · s, sin φ · c, cos φ]` where
/// `[s, c]` is the circle point, so `z` is last.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sequence::{LowDiscrepancySequence, Sphere};
///
/// let mut sgen = Sphere::new([2, 3]).unwrap();
/// sgen.reseed(0);
/// let [_, _, z] = sgen.pop();
/// assert_eq!(z, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Sphere {
    vdc: VdCorput,
    cirgen: Circle,
}

impl Sphere {
    /// Creates a generator from a polar base and an azimuth base.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if either base is below 2.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        validate_bases(&base, "Sphere")?;
        Ok(Self::from_validated(base))
    }

    #[inline]
    pub(crate) fn from_validated(base: [u64; 2]) -> Self {
        Self {
            vdc: VdCorput::from_validated(base[0]),
            cirgen: Circle::from_validated(base[1]),
        }
    }
}

impl LowDiscrepancySequence for Sphere {
    type Point = [f64; 3];

    #[inline]
    fn dimension(&self) -> usize {
        3
    }

    fn pop(&mut self) -> [f64; 3] {
        let cosphi = 2.0 * self.vdc.pop() - 1.0;
        let sinphi = (1.0 - cosphi * cosphi).sqrt();
        let [s, c] = self.cirgen.pop();
        [sinphi * s, sinphi * c, cosphi]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.cirgen.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc.skip(n);
        self.cirgen.skip(n);
    }
}

/// 3-sphere sequence generator via the Hopf fibration.
///
/// With `φ = 2π v0`, `ψ = 2π v1`, `cos η = √v2` and `sin η = √(1 - v2)`,
/// returns
/// `[cos η cos ψ, cos η sin ψ, sin η cos(φ + ψ), sin η sin(φ + ψ)]`.
#[derive(Clone, Debug)]
pub struct Sphere3Hopf {
    vdc0: VdCorput,
    vdc1: VdCorput,
    vdc2: VdCorput,
}

impl Sphere3Hopf {
    /// Creates a generator from three bases (`φ`, `ψ`, `η`).
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if any base is below 2.
    pub fn new(base: [u64; 3]) -> Result<Self, LdsError> {
        validate_bases(&base, "Sphere3Hopf")?;
        Ok(Self {
            vdc0: VdCorput::from_validated(base[0]),
            vdc1: VdCorput::from_validated(base[1]),
            vdc2: VdCorput::from_validated(base[2]),
        })
    }
}

impl LowDiscrepancySequence for Sphere3Hopf {
    type Point = [f64; 4];

    #[inline]
    fn dimension(&self) -> usize {
        4
    }

    fn pop(&mut self) -> [f64; 4] {
        let phi = self.vdc0.pop() * TWO_PI;
        let psy = self.vdc1.pop() * TWO_PI;
        let vd = self.vdc2.pop();
        let cos_eta = vd.sqrt();
        let sin_eta = (1.0 - vd).sqrt();
        [
            cos_eta * psy.cos(),
            cos_eta * psy.sin(),
            sin_eta * (phi + psy).cos(),
            sin_eta * (phi + psy).sin(),
        ]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
        self.vdc2.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc0.skip(n);
        self.vdc1.skip(n);
        self.vdc2.skip(n);
    }
}
