#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// Clamp the number to the range `min..=max`.
///
/// Unlike [`f64::clamp`], this function does not panic when `max < min`. It
/// simply checks the lower bound first and the upper bound second. A
/// not-a-number passes through unchanged.
///
/// ```
/// # use kandinsky::clamp;
/// assert_eq!(clamp(0.0, 255.0, 300.0), 255.0);
/// assert_eq!(clamp(0.0, 255.0, -3.0), 0.0);
/// assert_eq!(clamp(0.0, 255.0, 42.0), 42.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn clamp(min: Float, max: Float, n: Float) -> Float {
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// Clamp the number to unit range `0..=1`.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn clamp_norm(n: Float) -> Float {
    clamp(0.0, 1.0, n)
}

/// Wrap the value into the closed interval `min..=max`, treating the interval
/// as circular.
///
/// A value inside the interval, including both bounds, is returned unchanged.
/// A value outside the interval is folded back by whole periods of length
/// `max - min`, so that `wrap(0, 1, -0.25)` is `0.75` and `wrap(0, 1, 2.5)` is
/// `0.5`. The fold is a single remainder computation and hence terminates for
/// arbitrarily large offsets. For an empty or degenerate interval, the result
/// is `min`.
///
/// ```
/// # use kandinsky::wrap;
/// assert_eq!(wrap(0.0, 360.0, -90.0), 270.0);
/// assert_eq!(wrap(0.0, 360.0, 360.0), 360.0);
/// assert_eq!(wrap(0.0, 360.0, 1000.0), 280.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn wrap(min: Float, max: Float, value: Float) -> Float {
    if min <= value && value <= max {
        return value;
    }

    let period = max - min;
    if period.is_nan() || period <= 0.0 {
        return min;
    }

    min + (value - min).rem_euclid(period)
}

/// Wrap the value into unit range `0..=1`. This is the hue wrap for HSL.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn wrap_norm(value: Float) -> Float {
    wrap(0.0, 1.0, value)
}

/// Round to the nearest integer, with ties going towards positive infinity.
///
/// That differs from [`f64::round`], which rounds ties away from zero. Hence
/// `-2.5` rounds to `-2` and `2.5` to `3`. The result never is negative zero.
///
/// ```
/// # use kandinsky::round_half_up;
/// assert_eq!(round_half_up(127.5), 128.0);
/// assert_eq!(round_half_up(-0.5), 0.0);
/// assert_eq!(round_half_up(-1.5), -1.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn round_half_up(x: Float) -> Float {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };

    // Adding positive zero turns -0.0 into +0.0 and leaves everything else be.
    rounded + 0.0
}

/// Round every coordinate with [`round_half_up`].
#[inline]
pub(crate) fn round_all(coordinates: &[Float; 3]) -> [Float; 3] {
    [
        round_half_up(coordinates[0]),
        round_half_up(coordinates[1]),
        round_half_up(coordinates[2]),
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{clamp, clamp_norm, round_all, round_half_up, wrap, wrap_norm};
    use crate::Float;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.0, 1.0, 0.5), 0.5);
        assert_eq!(clamp(0.0, 1.0, 1.5), 1.0);
        assert_eq!(clamp(0.0, 1.0, -0.5), 0.0);
        assert_eq!(clamp(0.0, 255.0, 255.0), 255.0);
        assert_eq!(clamp_norm(7.0), 1.0);
        assert!(clamp(0.0, 1.0, Float::NAN).is_nan());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_norm(0.0), 0.0);
        assert_eq!(wrap_norm(1.0), 1.0);
        assert_eq!(wrap_norm(0.25), 0.25);
        assert_eq!(wrap_norm(-0.25), 0.75);
        assert_eq!(wrap_norm(-0.5), 0.5);
        assert_eq!(wrap_norm(1.5), 0.5);
        assert_eq!(wrap_norm(-3.25), 0.75);

        assert_eq!(wrap(10.0, 20.0, 25.0), 15.0);
        assert_eq!(wrap(10.0, 20.0, 5.0), 15.0);
        assert_eq!(wrap(10.0, 20.0, 10.0), 10.0);
        assert_eq!(wrap(10.0, 20.0, 20.0), 20.0);
        assert_eq!(wrap(5.0, 5.0, 7.0), 5.0);
    }

    #[test]
    fn test_wrap_terminates_for_large_offsets() {
        let wrapped = wrap_norm(-1.0e12 - 0.25);
        assert!((0.0..=1.0).contains(&wrapped));
        let wrapped = wrap_norm(1.0e15 + 0.5);
        assert!((0.0..=1.0).contains(&wrapped));
        assert!(wrap_norm(Float::NAN).is_nan());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(0.49), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert!(round_half_up(-0.2).is_sign_positive());
        assert_eq!(round_all(&[0.5, 1.49, 254.5]), [1.0, 1.0, 255.0]);
    }
}
