//! Bulk point generation on the rayon thread pool.
//!
//! Every generating function here returns exactly what the equivalent
//! sequence of `pop()` calls would return; parallelism only changes the wall
//! time.
//!
//! - [`par_vdcorput`] / [`par_halton`]: evaluate the radical inverse of each
//!   counter value directly, one task per point
//! - [`par_pop_batch`]: works for any cloneable generator by splitting the
//!   request into chunks, each served by a clone skipped to its offset
//!
//! Requests below [`PARALLEL_THRESHOLD`] points run sequentially.
//!
//! [`discrepancy`] gives a quick uniformity check for a generated batch.
//!
//! # Example
//!
//! ```rust
//! use lds_gen::batch::par_vdcorput;
//! use lds_gen::sequence::{LowDiscrepancySequence, VdCorput};
//!
//! let fast = par_vdcorput(2, 0, 10_000).unwrap();
//! let mut vgen = VdCorput::new(2).unwrap();
//! assert_eq!(fast, vgen.pop_batch(10_000));
//! ```

use rayon::prelude::*;

use crate::sequence::{vdc, LowDiscrepancySequence};
use crate::types::LdsError;
use crate::validation::{validate_base, validate_bases};

/// Point count below which bulk generation stays on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Returns the `n` values a fresh `VdCorput(base)` reseeded to `seed` would
/// pop: value `i` is `vdc(seed + i + 1, base)`.
///
/// # Errors
///
/// Returns [`LdsError::InvalidBase`] if `base < 2`.
pub fn par_vdcorput(base: u64, seed: u64, n: usize) -> Result<Vec<f64>, LdsError> {
    validate_base(base, "VdCorput")?;
    let value = |i: usize| vdc(counter(seed, i), base);
    if n < PARALLEL_THRESHOLD {
        return Ok((0..n).map(value).collect());
    }
    Ok((0..n).into_par_iter().map(value).collect())
}

/// Returns the `n` points a fresh `HaltonN(bases)` reseeded to `seed` would
/// pop.
///
/// # Errors
///
/// - [`LdsError::EmptyBases`] if `bases` is empty
/// - [`LdsError::InvalidBase`] if any base is below 2
pub fn par_halton(bases: &[u64], seed: u64, n: usize) -> Result<Vec<Vec<f64>>, LdsError> {
    validate_bases(bases, "HaltonN")?;
    let point = |i: usize| {
        let k = counter(seed, i);
        bases.iter().map(|&b| vdc(k, b)).collect::<Vec<f64>>()
    };
    if n < PARALLEL_THRESHOLD {
        return Ok((0..n).map(point).collect());
    }
    Ok((0..n).into_par_iter().map(point).collect())
}

/// Pops `n` points from `generator` using the rayon pool.
///
/// The result equals `generator.pop_batch(n)`, and `generator` is left
/// advanced by `n` points just as `pop_batch` would leave it.
///
/// # Example
///
/// ```rust
/// use lds_gen::batch::par_pop_batch;
/// use lds_gen::sequence::{LowDiscrepancySequence, Sphere};
///
/// let mut a = Sphere::new([2, 3]).unwrap();
/// let mut b = a.clone();
/// assert_eq!(par_pop_batch(&mut a, 5000), b.pop_batch(5000));
/// assert_eq!(a.pop(), b.pop());
/// ```
pub fn par_pop_batch<G>(generator: &mut G, n: usize) -> Vec<G::Point>
where
    G: LowDiscrepancySequence + Clone + Send + Sync,
    G::Point: Send,
{
    if n < PARALLEL_THRESHOLD {
        return generator.pop_batch(n);
    }

    let chunk = n.div_ceil(rayon::current_num_threads().max(1));
    let start: &G = generator;
    let points = (0..n)
        .step_by(chunk)
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|offset| {
            let mut local = start.clone();
            local.skip(offset);
            local.pop_batch(chunk.min(n - offset))
        })
        .flatten()
        .collect();

    generator.skip(n);
    points
}

/// Per-axis discrepancy of a point set in the unit hypercube.
///
/// For each coordinate axis the values are sorted and compared against the
/// evenly spaced grid `i / n`; the result is the largest absolute deviation
/// over all axes. An empty set yields `0.0`.
///
/// # Panics
///
/// If the points do not all have the dimension of the first point.
///
/// # Example
///
/// ```rust
/// use lds_gen::batch::{discrepancy, par_halton};
///
/// let points = par_halton(&[2, 3], 0, 1000).unwrap();
/// assert!(discrepancy(&points) < 0.02);
/// ```
pub fn discrepancy<P: AsRef<[f64]>>(points: &[P]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let n = points.len() as f64;
    (0..first.as_ref().len())
        .map(|axis| {
            let mut xs: Vec<f64> = points.iter().map(|p| p.as_ref()[axis]).collect();
            xs.sort_by(f64::total_cmp);
            xs.iter()
                .enumerate()
                .map(|(i, &x)| (x - i as f64 / n).abs())
                .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max)
}

#[inline]
fn counter(seed: u64, i: usize) -> u64 {
    seed.wrapping_add(i as u64).wrapping_add(1)
}
