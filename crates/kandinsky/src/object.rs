#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format_hsla, format_rgba, lerp, linear_gradient, round_gradient};
use crate::{Float, Hsl, Rgb, Vector};

#[cfg(feature = "pyffi")]
use crate::core::try_gradient;

/// Helper struct for repeatedly interpolating between the same two vectors.
///
/// An interpolator fixes its two end points once and then computes individual
/// vectors with [`Interpolator::at`] or entire gradients with
/// [`Interpolator::linear_gradient`] and [`Interpolator::gradient`]. It
/// produces exactly the same results as the eponymous free functions. The end
/// points may be RGB or HSL coordinates.
///
/// ```
/// # use kandinsky::Interpolator;
/// let interpolator = Interpolator::new([0.0, 0.0, 0.0], [255.0, 255.0, 255.0]);
/// assert_eq!(interpolator.at(0.5), [127.5, 127.5, 127.5]);
/// assert_eq!(interpolator.rounded_linear_gradient(3)[1], [128.0, 128.0, 128.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "kandinsky"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolator {
    coordinates1: Vector,
    coordinates2: Vector,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Interpolator {
    /// Create a new interpolator between the two vectors.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(v1: Vector, v2: Vector) -> Self {
        Self {
            coordinates1: v1,
            coordinates2: v2,
        }
    }

    /// Create a new interpolator between the two vectors.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(v1: Vector, v2: Vector) -> Self {
        Self {
            coordinates1: v1,
            coordinates2: v2,
        }
    }

    /// Get the start vector.
    #[inline]
    pub const fn start(&self) -> Vector {
        self.coordinates1
    }

    /// Get the end vector.
    #[inline]
    pub const fn end(&self) -> Vector {
        self.coordinates2
    }

    /// Compute the vector for the given fraction.
    #[inline]
    pub fn at(&self, fraction: Float) -> Vector {
        lerp(fraction, self.coordinates1, self.coordinates2)
    }

    /// Create a linear gradient with `count` vectors.
    ///
    /// See [`linear_gradient`](crate::linear_gradient).
    pub fn linear_gradient(&self, count: usize) -> Vec<Vector> {
        linear_gradient(count, self.coordinates1, self.coordinates2)
    }

    /// Create a linear gradient with `count` vectors and integral components.
    pub fn rounded_linear_gradient(&self, count: usize) -> Vec<Vector> {
        round_gradient(self.linear_gradient(count))
    }

    /// Create an eased gradient with `count` vectors. <i
    /// class=python-only>Python only!</i>
    ///
    /// The easing function is a Python callable that accepts and returns a
    /// float. Any exception it raises is propagated.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "gradient")]
    pub fn py_gradient(&self, ease: &Bound<'_, PyAny>, count: usize) -> PyResult<Vec<Vector>> {
        try_gradient(
            |t| ease.call1((t,))?.extract::<Float>(),
            count,
            self.coordinates1,
            self.coordinates2,
        )
    }

    /// Create an eased gradient with `count` vectors and integral components.
    /// <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "rounded_gradient")]
    pub fn py_rounded_gradient(
        &self,
        ease: &Bound<'_, PyAny>,
        count: usize,
    ) -> PyResult<Vec<Vector>> {
        Ok(round_gradient(self.py_gradient(ease, count)?))
    }

    /// Create a debug representation of this interpolator. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!(
            "Interpolator({:?}, {:?})",
            self.coordinates1, self.coordinates2
        )
    }
}

// Use separate block, so that generic methods are not exposed to Python.
impl Interpolator {
    /// Create an eased gradient with `count` vectors.
    ///
    /// See [`gradient`](crate::gradient).
    ///
    /// ```
    /// # use kandinsky::{ease, Interpolator};
    /// let interpolator = Interpolator::new([0.0; 3], [100.0; 3]);
    /// assert_eq!(interpolator.gradient(ease::in_quad, 3)[1], [25.0; 3]);
    /// ```
    pub fn gradient<F>(&self, ease: F, count: usize) -> Vec<Vector>
    where
        F: Fn(Float) -> Float,
    {
        crate::core::gradient(ease, count, self.coordinates1, self.coordinates2)
    }

    /// Create an eased gradient with `count` vectors and integral components.
    pub fn rounded_gradient<F>(&self, ease: F, count: usize) -> Vec<Vector>
    where
        F: Fn(Float) -> Float,
    {
        round_gradient(self.gradient(ease, count))
    }
}

// ====================================================================================================================

/// An RGB color with optional alpha that displays as CSS `rgba()`.
///
/// Formatting an instance with `{}` writes the same text as
/// [`rgb_to_css`](crate::rgb_to_css) returns, but without allocating a string
/// first.
///
/// ```
/// # use kandinsky::RgbaCss;
/// let css = RgbaCss::new([255.0, 128.0, 64.0], Some(0.3));
/// assert_eq!(format!("color: {};", css), "color: rgba(255, 128, 64, 0.3);");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaCss {
    rgb: Rgb,
    alpha: Option<Float>,
}

impl RgbaCss {
    /// Create a new CSS display object.
    pub const fn new(rgb: Rgb, alpha: Option<Float>) -> Self {
        Self { rgb, alpha }
    }
}

impl std::fmt::Display for RgbaCss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_rgba(&self.rgb, self.alpha, f)
    }
}

/// An HSL color with optional alpha that displays as CSS `hsl()`.
///
/// Formatting an instance with `{}` writes the same text as
/// [`hsl_to_css`](crate::hsl_to_css) returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslaCss {
    hsl: Hsl,
    alpha: Option<Float>,
}

impl HslaCss {
    /// Create a new CSS display object.
    pub const fn new(hsl: Hsl, alpha: Option<Float>) -> Self {
        Self { hsl, alpha }
    }
}

impl std::fmt::Display for HslaCss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hsla(&self.hsl, self.alpha, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{HslaCss, Interpolator, RgbaCss};
    use crate::{ease, gradient, linear_gradient, rounded_gradient, Vector};

    const NAVY: Vector = [23.0, 45.0, 67.0];
    const PERIWINKLE: Vector = [99.0, 101.0, 222.0];

    #[test]
    fn test_interpolator() {
        let interpolator = Interpolator::new(NAVY, PERIWINKLE);
        assert_eq!(interpolator.start(), NAVY);
        assert_eq!(interpolator.end(), PERIWINKLE);
        assert_eq!(interpolator.at(0.0), NAVY);
        assert_eq!(interpolator.at(1.0), PERIWINKLE);

        for count in 0..20 {
            assert_eq!(
                interpolator.linear_gradient(count),
                linear_gradient(count, NAVY, PERIWINKLE)
            );
            assert_eq!(
                interpolator.gradient(ease::smoothstep, count),
                gradient(ease::smoothstep, count, NAVY, PERIWINKLE)
            );
            assert_eq!(
                interpolator.rounded_gradient(ease::out_cubic, count),
                rounded_gradient(ease::out_cubic, count, NAVY, PERIWINKLE)
            );
        }
    }

    #[test]
    fn test_css_objects() {
        let rgba = RgbaCss::new([255.0, 128.0, 64.0], None);
        assert_eq!(rgba.to_string(), "rgba(255, 128, 64, 1)");

        let hsla = HslaCss::new([0.28, 0.62, 0.414], Some(0.12));
        assert_eq!(format!("{}", hsla), "hsl(101, 62%, 41%, 0.12)");
    }
}
