#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{round_all, round_half_up};
use crate::{Float, Vector};

/// Linearly interpolate between two vectors.
///
/// Each component is computed as `a + t × (b - a)`. The fraction `t` is not
/// clamped, so values outside `0..=1` extrapolate. The vectors may be RGB or
/// HSL coordinates. In the latter case, hue is interpolated like any other
/// number and not along the shorter arc of the color wheel.
///
/// ```
/// # use kandinsky::lerp;
/// assert_eq!(lerp(0.5, [0.0, 0.0, 0.0], [255.0, 255.0, 255.0]), [127.5, 127.5, 127.5]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[allow(clippy::suboptimal_flops)]
#[inline]
pub fn lerp(t: Float, v1: Vector, v2: Vector) -> Vector {
    [
        v1[0] + t * (v2[0] - v1[0]),
        v1[1] + t * (v2[1] - v1[1]),
        v1[2] + t * (v2[2] - v1[2]),
    ]
}

/// Determine the interpolation fraction for the sample with the given index.
///
/// For one sample, the denominator is one instead of zero.
#[inline]
fn fraction(index: usize, count: usize) -> Float {
    let denominator = if count > 1 { count - 1 } else { 1 };
    index as Float / denominator as Float
}

/// Sample `count` vectors between `v1` and `v2`, with the fraction for each
/// sample reshaped by the given function.
fn sample<F>(ease: F, count: usize, v1: Vector, v2: Vector) -> Vec<Vector>
where
    F: Fn(Float) -> Float,
{
    (0..count)
        .map(|index| lerp(ease(fraction(index, count)), v1, v2))
        .collect()
}

/// Create a linear gradient with `count` vectors.
///
/// The vector with index `i` has fraction `i / (count - 1)`. For a count of
/// one, the only vector is `v1`; for a count of zero, the gradient is empty.
/// Otherwise, the first vector is `v1` and the last vector is `v2`, exactly
/// and without floating point error.
///
/// ```
/// # use kandinsky::linear_gradient;
/// let gradient = linear_gradient(3, [0.0, 0.0, 0.0], [255.0, 255.0, 255.0]);
/// assert_eq!(gradient, vec![[0.0; 3], [127.5; 3], [255.0; 3]]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn linear_gradient(count: usize, v1: Vector, v2: Vector) -> Vec<Vector> {
    let mut gradient = sample(|t| t, count, v1, v2);
    if count > 1 {
        gradient[count - 1] = v2;
    }
    gradient
}

/// Create a gradient with `count` vectors, whose fractions are reshaped by the
/// given easing function.
///
/// This function computes the same fractions as [`linear_gradient`] but passes
/// them through `ease` before interpolating. For example, squaring the
/// fraction clusters vectors near `v1`. See the [`ease`](crate::ease) module
/// for common easing functions.
///
/// ```
/// # use kandinsky::{ease, gradient};
/// let gradient = gradient(ease::in_quad, 3, [0.0; 3], [100.0; 3]);
/// assert_eq!(gradient, vec![[0.0; 3], [25.0; 3], [100.0; 3]]);
/// ```
pub fn gradient<F>(ease: F, count: usize, v1: Vector, v2: Vector) -> Vec<Vector>
where
    F: Fn(Float) -> Float,
{
    sample(ease, count, v1, v2)
}

/// Create a gradient with `count` vectors, whose fractions are reshaped by a
/// fallible easing function.
///
/// This function stops at the first error and returns it.
#[cfg(feature = "pyffi")]
pub(crate) fn try_gradient<F, E>(
    ease: F,
    count: usize,
    v1: Vector,
    v2: Vector,
) -> Result<Vec<Vector>, E>
where
    F: Fn(Float) -> Result<Float, E>,
{
    (0..count)
        .map(|index| Ok(lerp(ease(fraction(index, count))?, v1, v2)))
        .collect()
}

/// Determine the segment lengths for a multi-stop gradient.
///
/// Given the total count and the number of stops, this function returns one
/// length per segment. The first and last segment use the ceiling of `count /
/// segments`, whereas interior segments use the rounded quotient. As a result,
/// the lengths need not add up to `count`.
pub(crate) fn segment_lengths(count: usize, stops: usize) -> Vec<usize> {
    if stops < 2 {
        return Vec::new();
    }

    let segments = stops - 1;
    let quotient = count as Float / segments as Float;
    let outer = quotient.ceil() as usize;
    let inner = round_half_up(quotient) as usize;

    (0..segments)
        .map(|index| {
            if index == 0 || index == segments - 1 {
                outer
            } else {
                inner
            }
        })
        .collect()
}

/// Create a gradient that passes through several colors.
///
/// This function concatenates linear gradients between consecutive colors.
/// With `k` colors, there are `k - 1` such segments. The first and last segment
/// each have `ceil(count / (k - 1))` vectors, whereas interior segments have
/// `round(count / (k - 1))` vectors. Hence the overall length approximates the
/// given count but need not be the same. With two colors, the gradient has
/// exactly `count` vectors. With fewer than two colors, it is empty. Since each
/// segment includes both of its end points, interior colors appear twice in a
/// row.
///
/// ```
/// # use kandinsky::multi_gradient;
/// let stops = [[0.0; 3], [100.0; 3], [0.0; 3]];
/// let gradient = multi_gradient(4, &stops);
/// assert_eq!(gradient, vec![[0.0; 3], [100.0; 3], [100.0; 3], [0.0; 3]]);
/// ```
pub fn multi_gradient(count: usize, colors: &[Vector]) -> Vec<Vector> {
    let lengths = segment_lengths(count, colors.len());

    colors
        .windows(2)
        .zip(lengths)
        .flat_map(|(pair, length)| linear_gradient(length, pair[0], pair[1]))
        .collect()
}

/// Round every component of every vector half-up.
#[inline]
pub(crate) fn round_gradient(gradient: Vec<Vector>) -> Vec<Vector> {
    gradient.iter().map(round_all).collect()
}

/// Create a linear gradient with integral components.
///
/// This function rounds the result of [`linear_gradient`]. That makes it the
/// right choice for gradients of RGB colors.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rounded_linear_gradient(count: usize, v1: Vector, v2: Vector) -> Vec<Vector> {
    round_gradient(linear_gradient(count, v1, v2))
}

/// Create an eased gradient with integral components.
///
/// This function rounds the result of [`gradient`].
pub fn rounded_gradient<F>(ease: F, count: usize, v1: Vector, v2: Vector) -> Vec<Vector>
where
    F: Fn(Float) -> Float,
{
    round_gradient(gradient(ease, count, v1, v2))
}

/// Create a multi-stop gradient with integral components.
///
/// This function rounds the result of [`multi_gradient`].
pub fn rounded_multi_gradient(count: usize, colors: &[Vector]) -> Vec<Vector> {
    round_gradient(multi_gradient(count, colors))
}

// --------------------------------------------------------------------------------------------------------------------

/// Create an eased gradient. <i class=python-only>Python only!</i>
///
/// The easing function is a Python callable that accepts and returns a float.
/// Any exception it raises is propagated.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "gradient")]
pub(crate) fn py_gradient(
    ease: &Bound<'_, PyAny>,
    count: usize,
    v1: Vector,
    v2: Vector,
) -> PyResult<Vec<Vector>> {
    try_gradient(|t| ease.call1((t,))?.extract::<Float>(), count, v1, v2)
}

/// Create an eased gradient with integral components. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "rounded_gradient")]
pub(crate) fn py_rounded_gradient(
    ease: &Bound<'_, PyAny>,
    count: usize,
    v1: Vector,
    v2: Vector,
) -> PyResult<Vec<Vector>> {
    Ok(round_gradient(py_gradient(ease, count, v1, v2)?))
}

/// Create a multi-stop gradient. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "multi_gradient")]
pub(crate) fn py_multi_gradient(count: usize, colors: Vec<Vector>) -> Vec<Vector> {
    multi_gradient(count, &colors)
}

/// Create a multi-stop gradient with integral components. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "rounded_multi_gradient")]
pub(crate) fn py_rounded_multi_gradient(count: usize, colors: Vec<Vector>) -> Vec<Vector> {
    rounded_multi_gradient(count, &colors)
}

// ====================================================================================================================
