//! Error types for structured error handling.
//!
//! This module provides [`LdsError`], the single error type returned by
//! every fallible constructor and validator in the crate. Generation itself
//! (`pop`, `reseed`) never fails.

use thiserror::Error;

/// Errors raised when a generator is constructed with invalid arguments.
///
/// # Variants
/// - `InvalidBase`: a base below 2
/// - `EmptyBases`: an empty base list
/// - `BaseCountMismatch`: a base list of the wrong length
/// - `InvalidDimension`: an n-sphere sampler with n < 2
/// - `NegativeSeed`: a signed seed below zero
/// - `InvalidScale`: an integer generator scale that is zero or overflows
/// - `InvalidKnotCount`: a marginal-CDF table with fewer than 2 knots
///
/// # Examples
/// ```
/// use lds_gen::LdsError;
///
/// let err = LdsError::InvalidBase { generator: "VdCorput", base: 1 };
/// assert_eq!(format!("{}", err), "VdCorput base must be >= 2, got 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LdsError {
    /// Base is below 2.
    #[error("{generator} base must be >= 2, got {base}")]
    InvalidBase {
        /// Name of the generator being constructed
        generator: &'static str,
        /// The rejected base
        base: u64,
    },

    /// Base list is empty.
    #[error("{generator} bases cannot be empty")]
    EmptyBases {
        /// Name of the generator being constructed
        generator: &'static str,
    },

    /// Base list has the wrong number of entries.
    #[error("{generator} expects {expected} bases, got {got}")]
    BaseCountMismatch {
        /// Name of the generator being constructed
        generator: &'static str,
        /// Number of bases required
        expected: usize,
        /// Number of bases supplied
        got: usize,
    },

    /// Recursive sphere sampler requested below dimension 2.
    #[error("SphereN requires n >= 2 (at least 3 bases), got n = {n}")]
    InvalidDimension {
        /// The requested sphere dimension (number of bases - 1)
        n: i64,
    },

    /// Signed seed below zero.
    #[error("seed must be non-negative, got {0}")]
    NegativeSeed(i64),

    /// Integer generator scale is zero or `base^scale` does not fit in `u64`.
    #[error("{generator} scale {scale} is invalid for base {base}")]
    InvalidScale {
        /// Name of the generator being constructed
        generator: &'static str,
        /// The base the scale applies to
        base: u64,
        /// The rejected scale
        scale: u32,
    },

    /// Marginal-CDF table resolution below 2 knots.
    #[error("table knot count must be >= 2, got {0}")]
    InvalidKnotCount(usize),
}
