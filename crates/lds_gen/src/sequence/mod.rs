//! # Low-Discrepancy Sequence Generators
//!
//! This module provides the digit-reversal primitive and the closed-form
//! generators composed from it.
//!
//! ## Module Structure
//!
//! - [`vdcorput`]: [`vdc`] radical inverse and the [`VdCorput`] generator
//! - [`halton`]: [`Halton`] (2-D) and [`HaltonN`] (k-D) points in the unit hypercube
//! - [`circle`]: [`Circle`] and [`Disk`] points
//! - [`sphere`]: [`Sphere`] (2-sphere) and [`Sphere3Hopf`] (3-sphere) points
//!
//! ## Usage Example
//!
//! ```rust
//! use lds_gen::sequence::{Halton, LowDiscrepancySequence};
//!
//! let mut hgen = Halton::new([2, 3]).unwrap();
//! hgen.reseed(0);
//! let [x, y] = hgen.pop();
//! assert_eq!(x, 0.5);
//! assert!((y - 1.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! ## Ownership
//!
//! Every composite generator owns its [`VdCorput`] instances exclusively, so
//! distinct generators never share counter state. For use across threads,
//! wrap a generator in [`Shared`](crate::sync::Shared).

pub mod circle;
pub mod halton;
pub mod sphere;
pub mod vdcorput;

pub use circle::{Circle, Disk};
pub use halton::{Halton, HaltonN};
pub use sphere::{Sphere, Sphere3Hopf};
pub use vdcorput::{vdc, VdCorput};

/// `2π`, the angle range of one full turn.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Common interface of all sequence generators.
///
/// A generator is a deterministic state machine over an integer counter:
/// the same `reseed` followed by the same number of `pop` calls always
/// produces the same points.
pub trait LowDiscrepancySequence {
    /// The value produced by one step: `f64` for 1-D generators, an array or
    /// vector of coordinates otherwise.
    type Point;

    /// Returns the number of coordinates in each generated point.
    fn dimension(&self) -> usize;

    /// Advances the sequence and returns the next point.
    fn pop(&mut self) -> Self::Point;

    /// Sets the counter of every owned digit-reversal generator to `seed`.
    ///
    /// The next `pop` then produces the point for counter `seed + 1`.
    fn reseed(&mut self, seed: u64);

    /// Returns the next `n` points, identical to calling `pop` `n` times.
    fn pop_batch(&mut self, n: usize) -> Vec<Self::Point> {
        (0..n).map(|_| self.pop()).collect()
    }

    /// Advances the sequence by `n` points without returning them.
    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.pop();
        }
    }
}
