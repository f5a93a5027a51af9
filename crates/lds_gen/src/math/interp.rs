//! Piecewise-linear interpolation over tabulated knots.

use num_traits::Float;
use tracing::error;

/// Evenly spaced samples over `[start, stop]`, endpoints included.
///
/// `num == 1` yields `[start]`; `num == 0` yields an empty vector.
///
/// # Examples
///
/// ```
/// use lds_gen::math::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, num: usize) -> Vec<T> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / T::from(num - 1).unwrap_or_else(T::one);
            (0..num)
                .map(|i| start + T::from(i).unwrap_or_else(T::zero) * step)
                .collect()
        }
    }
}

/// Linear interpolation of `(xp, yp)` at `x`.
///
/// `xp` must be non-decreasing and the same length as `yp`.
///
/// - `x <= xp[0]` returns `yp[0]`
/// - `x >= xp[last]` returns `yp[last]`
/// - otherwise the first interval `[xp[i], xp[i + 1]]` containing `x` is
///   interpolated
///
/// A NaN `x` returns `yp[last]`. If no interval contains a non-NaN `x`,
/// which only happens when `xp` is not non-decreasing (e.g. contains NaN),
/// `yp[last]` is returned as well and debug builds assert.
///
/// # Panics
///
/// If `xp` or `yp` is empty.
///
/// # Example
///
/// ```
/// use lds_gen::math::simple_interp;
///
/// let xp = [0.0, 1.0, 2.0];
/// let yp = [0.0, 2.0, 6.0];
/// assert_eq!(simple_interp(1.5, &xp, &yp), 4.0);
/// assert_eq!(simple_interp(-1.0, &xp, &yp), 0.0);
/// assert_eq!(simple_interp(9.0, &xp, &yp), 6.0);
/// ```
pub fn simple_interp<T: Float>(x: T, xp: &[T], yp: &[T]) -> T {
    let last = yp.len() - 1;
    if x.is_nan() {
        return yp[last];
    }
    if x <= xp[0] {
        return yp[0];
    }
    if x >= xp[xp.len() - 1] {
        return yp[last];
    }

    for i in 0..xp.len() - 1 {
        if xp[i] <= x && x <= xp[i + 1] {
            let t = (x - xp[i]) / (xp[i + 1] - xp[i]);
            return yp[i] + t * (yp[i + 1] - yp[i]);
        }
    }

    error!(
        knots = xp.len(),
        "no bracketing interval found; knots are not non-decreasing"
    );
    debug_assert!(false, "simple_interp: knots are not non-decreasing");
    yp[last]
}
