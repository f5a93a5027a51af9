//! Numerical building blocks of the n-sphere sampler.
//!
//! - [`simple_interp`]: clamped piecewise-linear interpolation
//! - [`linspace`]: evenly spaced knot grid
//! - [`TableCache`] / [`get_tp`]: memoised marginal-CDF tables

pub mod interp;
pub mod tables;

pub use interp::{linspace, simple_interp};
pub use tables::{get_tp, TableCache};
