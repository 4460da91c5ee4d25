//! Easing functions for [`gradient`](crate::gradient) and friends.
//!
//! An easing function maps the interpolation fraction `t` in unit range to
//! another fraction. All functions in this module map 0 to 0 and 1 to 1, so
//! that gradients still start and end with the given colors. In between, they
//! redistribute samples. Functions named `in_` cluster samples near the start,
//! functions named `out_` cluster them near the end. Since easing functions
//! are plain `fn(Float) -> Float`, any closure with the same signature works
//! just as well.
//!
//! ```
//! # use kandinsky::{ease, rounded_gradient};
//! let gradient = rounded_gradient(ease::out_quad, 3, [0.0; 3], [100.0; 3]);
//! assert_eq!(gradient[1], [75.0; 3]);
//! ```
#![allow(clippy::suboptimal_flops)]

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The identity, which makes for linear gradients.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn linear(t: Float) -> Float {
    t
}

/// Quadratic ease-in.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn in_quad(t: Float) -> Float {
    t * t
}

/// Quadratic ease-out.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn out_quad(t: Float) -> Float {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in for the first half and ease-out for the second half.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn in_out_quad(t: Float) -> Float {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Cubic ease-in.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn in_cubic(t: Float) -> Float {
    t * t * t
}

/// Cubic ease-out.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn out_cubic(t: Float) -> Float {
    1.0 - (1.0 - t).powi(3)
}

/// The smoothstep polynomial `3t² - 2t³`.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn smoothstep(t: Float) -> Float {
    t * t * (3.0 - 2.0 * t)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    const ALL: [(&str, fn(Float) -> Float); 7] = [
        ("linear", linear),
        ("in_quad", in_quad),
        ("out_quad", out_quad),
        ("in_out_quad", in_out_quad),
        ("in_cubic", in_cubic),
        ("out_cubic", out_cubic),
        ("smoothstep", smoothstep),
    ];

    #[test]
    fn test_end_points() {
        for (name, ease) in ALL {
            assert_eq!(ease(0.0), 0.0, "{} should map 0 to 0", name);
            assert_eq!(ease(1.0), 1.0, "{} should map 1 to 1", name);
        }
    }

    #[test]
    fn test_monotonicity() {
        for (name, ease) in ALL {
            let mut previous = ease(0.0);
            for step in 1..=100 {
                let current = ease(step as Float / 100.0);
                assert!(previous <= current, "{} should not decrease", name);
                previous = current;
            }
        }
    }

    #[test]
    fn test_midpoints() {
        assert_eq!(linear(0.5), 0.5);
        assert_eq!(in_quad(0.5), 0.25);
        assert_eq!(out_quad(0.5), 0.75);
        assert_eq!(in_out_quad(0.5), 0.5);
        assert_eq!(in_cubic(0.5), 0.125);
        assert_eq!(out_cubic(0.5), 0.875);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_close_enough!(in_out_quad(0.25), 0.125);
    }
}
