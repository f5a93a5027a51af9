//! Recursive n-sphere samplers.
//!
//! A sampler on the n-sphere draws one polar angle from a Van der Corput
//! value and scales the point of an (n-1)-sphere sampler by its sine:
//!
//! ```text
//! SphereN(n) = [sin x · SphereN(n - 1), cos x]
//! SphereN(2) = [sin x · Sphere, cos x]
//! ```
//!
//! The uniform value is turned into the angle `x` by inverting the
//! marginal-CDF table for `n` (see [`crate::math::tables`]).
//!
//! # Example
//!
//! ```rust
//! use lds_gen::sphere_n::SphereN;
//! use lds_gen::LowDiscrepancySequence;
//!
//! let mut sgen = SphereN::new(&[2, 3, 5, 7]).unwrap();
//! sgen.reseed(0);
//! let p = sgen.pop();
//! assert_eq!(p.len(), 5);
//! let norm: f64 = p.iter().map(|x| x * x).sum();
//! assert!((norm - 1.0).abs() < 1e-9);
//! ```

use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::math::{simple_interp, TableCache};
use crate::sequence::{LowDiscrepancySequence, Sphere, VdCorput};
use crate::types::LdsError;
use crate::validation::validate_bases;

/// 3-sphere sequence generator built on the marginal-CDF table for `n = 2`.
///
/// # Examples
///
/// ```rust
/// use lds_gen::sphere_n::Sphere3;
/// use lds_gen::LowDiscrepancySequence;
///
/// let mut sgen = Sphere3::new([2, 3, 5]).unwrap();
/// sgen.reseed(0);
/// let p = sgen.pop();
/// assert!((p[0] - 0.2913440162992141).abs() < 1e-9);
/// assert!((p[2] + 1.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Sphere3 {
    vdc: VdCorput,
    sphere2: Sphere,
    table: Arc<[f64]>,
    cache: Arc<TableCache>,
}

impl Sphere3 {
    /// Creates a generator using the process-wide table cache.
    ///
    /// `base[0]` drives the new polar angle; `base[1..]` feed the inner
    /// [`Sphere`].
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if any base is below 2.
    pub fn new(base: [u64; 3]) -> Result<Self, LdsError> {
        Self::with_cache(base, Arc::clone(TableCache::global()))
    }

    /// Creates a generator whose tables come from `cache`.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidBase`] if any base is below 2.
    pub fn with_cache(base: [u64; 3], cache: Arc<TableCache>) -> Result<Self, LdsError> {
        validate_bases(&base, "Sphere3")?;
        Ok(Self {
            vdc: VdCorput::from_validated(base[0]),
            sphere2: Sphere::from_validated([base[1], base[2]]),
            table: cache.get(2),
            cache,
        })
    }

    /// Creates a generator from a base list that must hold exactly 3 bases.
    ///
    /// # Errors
    ///
    /// - [`LdsError::BaseCountMismatch`] if `bases.len() != 3`
    /// - [`LdsError::InvalidBase`] if any base is below 2
    pub fn from_slice(bases: &[u64]) -> Result<Self, LdsError> {
        let base: [u64; 3] = bases
            .try_into()
            .map_err(|_| LdsError::BaseCountMismatch {
                generator: "Sphere3",
                expected: 3,
                got: bases.len(),
            })?;
        Self::new(base)
    }
}

impl LowDiscrepancySequence for Sphere3 {
    type Point = [f64; 4];

    #[inline]
    fn dimension(&self) -> usize {
        4
    }

    fn pop(&mut self) -> [f64; 4] {
        let ti = FRAC_PI_2 * self.vdc.pop();
        let xi = simple_interp(ti, &self.table, self.cache.grid());
        let sinxi = xi.sin();
        let [s0, s1, s2] = self.sphere2.pop();
        [sinxi * s0, sinxi * s1, sinxi * s2, xi.cos()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.sphere2.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc.skip(n);
        self.sphere2.skip(n);
    }
}

/// Lower-dimensional sampler owned by a [`SphereN`] node.
#[derive(Clone, Debug)]
enum Child {
    /// The closed-form 2-sphere, ending the chain.
    Leaf(Sphere),
    Node(Box<SphereN>),
}

impl Child {
    fn reseed(&mut self, seed: u64) {
        match self {
            Child::Leaf(sphere) => sphere.reseed(seed),
            Child::Node(node) => node.reseed(seed),
        }
    }

    fn skip(&mut self, n: usize) {
        match self {
            Child::Leaf(sphere) => sphere.skip(n),
            Child::Node(node) => node.skip(n),
        }
    }
}

/// n-sphere sequence generator for any `n >= 2`.
///
/// Built from `n + 1` bases: `bases[0]` drives the outermost polar angle,
/// the rest build the `(n - 1)`-sphere child, down to a [`Sphere`] on the
/// last two bases. Points have `n + 1` coordinates with the newest `cos`
/// coordinate last.
///
/// Each node holds its table for the lifetime of the generator, so `pop`
/// never touches the cache lock.
#[derive(Clone, Debug)]
pub struct SphereN {
    n: usize,
    vdc: VdCorput,
    child: Child,
    table: Arc<[f64]>,
    range: f64,
    cache: Arc<TableCache>,
}

impl SphereN {
    /// Creates a generator on the `(bases.len() - 1)`-sphere using the
    /// process-wide table cache.
    ///
    /// # Errors
    ///
    /// - [`LdsError::InvalidDimension`] if fewer than 3 bases are given
    /// - [`LdsError::InvalidBase`] if any base is below 2
    pub fn new(bases: &[u64]) -> Result<Self, LdsError> {
        Self::with_cache(bases, Arc::clone(TableCache::global()))
    }

    /// Creates a generator whose tables come from `cache`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SphereN::new`].
    pub fn with_cache(bases: &[u64], cache: Arc<TableCache>) -> Result<Self, LdsError> {
        if bases.len() < 3 {
            return Err(LdsError::InvalidDimension {
                n: bases.len() as i64 - 1,
            });
        }
        validate_bases(bases, "SphereN")?;
        Ok(Self::from_validated(bases, cache))
    }

    /// `bases.len() >= 3` and every base is at least 2.
    fn from_validated(bases: &[u64], cache: Arc<TableCache>) -> Self {
        let n = bases.len() - 1;
        let child = if n == 2 {
            Child::Leaf(Sphere::from_validated([bases[1], bases[2]]))
        } else {
            Child::Node(Box::new(Self::from_validated(
                &bases[1..],
                Arc::clone(&cache),
            )))
        };
        let table = cache.get(n);
        let range = table[table.len() - 1] - table[0];
        Self {
            n,
            vdc: VdCorput::from_validated(bases[0]),
            child,
            table,
            range,
            cache,
        }
    }

    /// Returns the sphere dimension `n`.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Appends this node's point to `out`, children first.
    fn fill(&mut self, out: &mut Vec<f64>) {
        let vd = self.vdc.pop();
        let ti = if self.n == 2 {
            FRAC_PI_2 * vd
        } else {
            self.table[0] + self.range * vd
        };
        let xi = simple_interp(ti, &self.table, self.cache.grid());
        let sinxi = xi.sin();

        let start = out.len();
        match &mut self.child {
            Child::Leaf(sphere) => out.extend(sphere.pop()),
            Child::Node(node) => node.fill(out),
        }
        for c in &mut out[start..] {
            *c *= sinxi;
        }
        out.push(xi.cos());
    }
}

impl LowDiscrepancySequence for SphereN {
    type Point = Vec<f64>;

    #[inline]
    fn dimension(&self) -> usize {
        self.n + 1
    }

    fn pop(&mut self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.n + 1);
        self.fill(&mut out);
        out
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.child.reseed(seed);
    }

    fn skip(&mut self, n: usize) {
        self.vdc.skip(n);
        self.child.skip(n);
    }
}
