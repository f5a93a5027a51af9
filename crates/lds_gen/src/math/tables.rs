//! Marginal-CDF lookup tables for the n-sphere sampler.
//!
//! For dimension `n`, the table holds, at each knot `x` of an evenly spaced
//! grid on `[0, π]`, a value proportional to the CDF of the polar angle on
//! the n-sphere:
//!
//! ```text
//! T_0(x) = x
//! T_1(x) = -cos x
//! T_n(x) = ((n - 1) T_{n-2}(x) - cos x · sin^{n-1} x) / n      (n >= 2)
//! ```
//!
//! # Caching Strategy
//!
//! Tables depend only on `n` and the knot count, never on generator state,
//! so each is built once and shared as `Arc<[f64]>`:
//! - The key map uses the double-check locking pattern (read lock, then
//!   write lock with re-check) to hand out one slot per dimension
//! - Each slot is a `OnceLock`, so the first builder of a dimension wins and
//!   concurrent callers for the same `n` block until it is ready, while
//!   builds of unrelated dimensions proceed in parallel
//! - Tables are never evicted or mutated after construction

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, trace};

use super::interp::linspace;
use crate::config::TableConfig;

type Slot = Arc<OnceLock<Arc<[f64]>>>;

/// Thread-safe, build-once cache of marginal-CDF tables keyed by dimension.
///
/// # Example
///
/// ```rust
/// use lds_gen::math::TableCache;
/// use lds_gen::config::TableConfig;
///
/// let cache = TableCache::new(TableConfig::default());
/// let t1 = cache.get(1);
/// assert_eq!(t1[0], -1.0);
///
/// // Second call returns the cached table
/// assert!(std::sync::Arc::ptr_eq(&t1, &cache.get(1)));
/// ```
#[derive(Debug)]
pub struct TableCache {
    config: TableConfig,
    /// Knot positions on `[0, π]`.
    grid: Arc<[f64]>,
    neg_cosine: Arc<[f64]>,
    sine: Vec<f64>,
    tables: RwLock<HashMap<usize, Slot>>,
}

impl TableCache {
    /// Creates an empty cache whose tables use `config.knots()` knots.
    pub fn new(config: TableConfig) -> Self {
        let grid: Vec<f64> = linspace(0.0, PI, config.knots());
        let neg_cosine: Vec<f64> = grid.iter().map(|x| -x.cos()).collect();
        let sine = grid.iter().map(|x| x.sin()).collect();
        Self {
            config,
            grid: grid.into(),
            neg_cosine: neg_cosine.into(),
            sine,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide cache, built with [`TableConfig::default`].
    pub fn global() -> &'static Arc<TableCache> {
        static GLOBAL: OnceLock<Arc<TableCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(TableCache::new(TableConfig::default())))
    }

    /// Returns the configuration the tables are built with.
    #[inline]
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// Returns the knot positions shared by every table.
    #[inline]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Returns the table for dimension `n`, building it (and the chain
    /// `n - 2, n - 4, ...` it depends on) on first use.
    pub fn get(&self, n: usize) -> Arc<[f64]> {
        let slot = self.slot(n);
        if let Some(table) = slot.get() {
            trace!(n, "marginal CDF table cache hit");
            return Arc::clone(table);
        }
        Arc::clone(slot.get_or_init(|| self.build(n)))
    }

    /// Returns `true` if the table for `n` has been built.
    pub fn is_cached(&self, n: usize) -> bool {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(&n).is_some_and(|slot| slot.get().is_some())
    }

    /// Returns the number of tables built so far.
    pub fn len(&self) -> usize {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.values().filter(|slot| slot.get().is_some()).count()
    }

    /// Returns `true` if no table has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, n: usize) -> Slot {
        // Fast path: read lock check
        {
            let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = tables.get(&n) {
                return Arc::clone(slot);
            }
        }

        // Slow path: write lock with double-check
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(tables.entry(n).or_default())
    }

    fn build(&self, n: usize) -> Arc<[f64]> {
        debug!(n, knots = self.config.knots(), "building marginal CDF table");
        match n {
            0 => Arc::clone(&self.grid),
            1 => Arc::clone(&self.neg_cosine),
            _ => {
                let prev = self.get(n - 2);
                let a = (n - 1) as f64;
                let b = n as f64;
                prev.iter()
                    .zip(self.neg_cosine.iter())
                    .zip(self.sine.iter())
                    .map(|((&tp, &nc), &s)| (a * tp + nc * s.powf(a)) / b)
                    .collect()
            }
        }
    }
}

/// Returns the table for dimension `n` from the process-wide cache.
///
/// # Example
///
/// ```rust
/// use lds_gen::math::get_tp;
///
/// let t0 = get_tp(0);
/// assert_eq!(t0.len(), 300);
/// assert_eq!(t0[0], 0.0);
/// ```
pub fn get_tp(n: usize) -> Arc<[f64]> {
    TableCache::global().get(n)
}
