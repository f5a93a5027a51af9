//! Integer-output low-discrepancy generators.
//!
//! These produce the radical inverse scaled to `base^scale` as an exact
//! integer, for fixed-point consumers that must not round through `f64`.

use crate::sequence::LowDiscrepancySequence;
use crate::types::LdsError;
use crate::validation::{validate_base, validate_bases, validate_scale};

/// Integer Van der Corput sequence generator.
///
/// `pop` returns `⌊vdc(k, base) · base^scale⌋` computed with integer
/// arithmetic only; digits beyond `scale` are dropped.
///
/// # Examples
///
/// ```rust
/// use lds_gen::integer::VdCorputInt;
/// use lds_gen::LowDiscrepancySequence;
///
/// let mut vgen = VdCorputInt::new(2, 10).unwrap();
/// vgen.reseed(0);
/// assert_eq!(vgen.pop(), 512);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VdCorputInt {
    base: u64,
    scale: u32,
    count: u64,
    factor: u64,
}

impl VdCorputInt {
    /// Creates a generator producing values in `[0, base^scale)`.
    ///
    /// # Errors
    ///
    /// - [`LdsError::InvalidBase`] if `base < 2`
    /// - [`LdsError::InvalidScale`] if `scale == 0` or `base^scale` overflows
    pub fn new(base: u64, scale: u32) -> Result<Self, LdsError> {
        validate_base(base, "VdCorputInt")?;
        let factor = validate_scale(base, scale, "VdCorputInt")?;
        Ok(Self::from_validated(base, scale, factor))
    }

    /// `factor` is `base^scale` as returned by [`validate_scale`].
    #[inline]
    fn from_validated(base: u64, scale: u32, factor: u64) -> Self {
        Self {
            base,
            scale,
            count: 0,
            factor,
        }
    }

    /// Returns the base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the number of base-`base` digits kept.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `base^scale`, the exclusive upper bound of the output.
    #[inline]
    pub fn factor(&self) -> u64 {
        self.factor
    }
}

impl Default for VdCorputInt {
    fn default() -> Self {
        Self {
            base: 2,
            scale: 10,
            count: 0,
            factor: 1 << 10,
        }
    }
}

impl LowDiscrepancySequence for VdCorputInt {
    type Point = u64;

    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    fn pop(&mut self) -> u64 {
        self.count = self.count.wrapping_add(1);
        let mut k = self.count;
        let mut vdc = 0;
        let mut factor = self.factor;
        while k != 0 {
            factor /= self.base;
            let remainder = k % self.base;
            k /= self.base;
            vdc += remainder * factor;
        }
        vdc
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

/// 2-D integer Halton sequence generator with a scale per coordinate.
///
/// # Examples
///
/// ```rust
/// use lds_gen::integer::HaltonInt;
/// use lds_gen::LowDiscrepancySequence;
///
/// let mut hgen = HaltonInt::new([2, 3], [11, 7]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop(), [1024, 729]);
/// ```
#[derive(Clone, Debug)]
pub struct HaltonInt {
    vdc0: VdCorputInt,
    vdc1: VdCorputInt,
}

impl HaltonInt {
    /// Creates a generator from two bases and their scales.
    ///
    /// # Errors
    ///
    /// Same conditions as [`VdCorputInt::new`], for either coordinate.
    pub fn new(base: [u64; 2], scale: [u32; 2]) -> Result<Self, LdsError> {
        validate_bases(&base, "HaltonInt")?;
        let factor0 = validate_scale(base[0], scale[0], "HaltonInt")?;
        let factor1 = validate_scale(base[1], scale[1], "HaltonInt")?;
        Ok(Self {
            vdc0: VdCorputInt::from_validated(base[0], scale[0], factor0),
            vdc1: VdCorputInt::from_validated(base[1], scale[1], factor1),
        })
    }
}

impl LowDiscrepancySequence for HaltonInt {
    type Point = [u64; 2];

    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [u64; 2] {
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
