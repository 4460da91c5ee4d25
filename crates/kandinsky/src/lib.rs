//! # Kandinsky 🎨
//!
//! Kandinsky is a small, stateless toolkit for everyday color chores on the
//! web: converting between hexadecimal, RGB, and HSL notation, lightening and
//! darkening, interpolating gradients, building palettes by rotating around
//! the color wheel, and formatting colors as CSS.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Kandinsky represents colors as plain arrays of three [`Float`]s:
//!
//!   * [`Rgb`] holds red, green, and blue channels, which are integral and in
//!     `0..=255` for well-formed colors. Functions producing RGB colors round
//!     half-up, i.e., ties go towards positive infinity.
//!   * [`Hsl`] holds hue, saturation, and lightness, all three in unit range.
//!     Notably, hue is a fraction of a full turn and not degrees.
//!   * [`Vector`] is the same array when the color model does not matter, as
//!     for interpolation.
//!
//! Hexadecimal colors are strings with six hexadecimal digits and an optional
//! leading `#`. Parsing accepts either case; formatting always produces
//! lowercase digits with the `#`. Parsing is the only operation that can fail
//! and does so with a [`ColorFormatError`](error::ColorFormatError). All other
//! functions are total: they clamp, wrap, or round their way to a result.
//!
//! The functions fall into five groups:
//!
//!   * **Conversion** between notations with [`hex_to_rgb`], [`rgb_to_hex`],
//!     [`rgb_to_hsl`], [`hsl_to_rgb`], [`hex_to_hsl`], and [`hsl_to_hex`].
//!   * **Tone** adjustment with [`lighten_rgb`], [`darken_rgb`], and their
//!     HSL and hex counterparts.
//!   * **Interpolation** with [`lerp`], [`linear_gradient`], [`gradient`],
//!     [`multi_gradient`], their rounded counterparts, and [`Interpolator`].
//!     The [`ease`] module has easing functions for [`gradient`].
//!   * **Palettes** with [`complement_hsl`], [`complement_rgb`], and
//!     [`complement_hex`].
//!   * **CSS** formatting with [`rgb_to_css`], [`hsl_to_css`], [`RgbaCss`],
//!     and [`HslaCss`].
//!
//! The numeric helpers [`clamp`], [`clamp_norm`], [`wrap`], [`wrap_norm`], and
//! [`round_half_up`] round out the interface.
//!
//!
//! ## 2. One Example
//!
//! ```
//! # use kandinsky::{complement_hex, hex_to_rgb, rgb_to_hex, rounded_linear_gradient};
//! # use kandinsky::error::ColorFormatError;
//! let palette = complement_hex(2, "#FF0000")?;
//! assert_eq!(palette, vec!["#ff0000", "#00ffff"]);
//!
//! let gradient = rounded_linear_gradient(3, hex_to_rgb(&palette[0])?, hex_to_rgb(&palette[1])?)
//!     .into_iter()
//!     .map(rgb_to_hex)
//!     .collect::<Vec<_>>();
//! assert_eq!(gradient, vec!["#ff0000", "#808080", "#00ffff"]);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Kandinsky supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls kandinsky's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

/// An RGB color with red, green, and blue channels in `0..=255`.
pub type Rgb = [Float; 3];

/// An HSL color with hue, saturation, and lightness in unit range.
pub type Hsl = [Float; 3];

/// Three coordinates of either color model.
pub type Vector = [Float; 3];

mod core;
pub mod ease;
pub mod error;
mod object;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::{to_eq_bits, to_eq_coordinates};

pub use core::{
    clamp, clamp_norm, complement_hex, complement_hsl, complement_rgb, darken_hex, darken_hsl,
    darken_rgb, gradient, hex_to_hsl, hex_to_rgb, hsl_to_css, hsl_to_hex, hsl_to_rgb, lerp,
    lighten_hex, lighten_hsl, lighten_rgb, linear_gradient, multi_gradient, rgb_to_css, rgb_to_hex,
    rgb_to_hsl, round_half_up, rounded_gradient, rounded_linear_gradient, rounded_multi_gradient,
    wrap, wrap_norm,
};
pub use object::{HslaCss, Interpolator, RgbaCss};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn kandinsky(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modkandinsky_name = m.name()?;
    let modkandinsky_name = modkandinsky_name.to_str()?;
    let modease_name = format!("{}.ease", modkandinsky_name);

    // --------------------------------------------------------------------- kandinsky
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_function(wrap_pyfunction!(clamp, m)?)?;
    m.add_function(wrap_pyfunction!(clamp_norm, m)?)?;
    m.add_function(wrap_pyfunction!(wrap, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_norm, m)?)?;
    m.add_function(wrap_pyfunction!(round_half_up, m)?)?;

    m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(hex_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_hex, m)?)?;

    m.add_function(wrap_pyfunction!(lighten_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(darken_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(lighten_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(darken_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(lighten_hex, m)?)?;
    m.add_function(wrap_pyfunction!(darken_hex, m)?)?;

    m.add_function(wrap_pyfunction!(lerp, m)?)?;
    m.add_function(wrap_pyfunction!(linear_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(rounded_linear_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(core::py_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(core::py_rounded_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(core::py_multi_gradient, m)?)?;
    m.add_function(wrap_pyfunction!(core::py_rounded_multi_gradient, m)?)?;

    m.add_function(wrap_pyfunction!(complement_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(complement_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(complement_hex, m)?)?;

    m.add_function(wrap_pyfunction!(rgb_to_css, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_css, m)?)?;

    m.add_class::<Interpolator>()?;

    // ---------------------------------------------------------------- kandinsky.ease
    let modease = PyModule::new(m.py(), "ease")?;
    modease.add("__package__", modkandinsky_name)?;
    modease.add_function(wrap_pyfunction!(ease::linear, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::in_quad, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::out_quad, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::in_out_quad, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::in_cubic, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::out_cubic, &modease)?)?;
    modease.add_function(wrap_pyfunction!(ease::smoothstep, &modease)?)?;
    m.add_submodule(&modease)?;

    // Only change __name__ attribute after submodule has been added.
    modease.setattr("__name__", &modease_name)?;

    // ------------------------------------------------------------------ sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modease_name, modease)?;

    Ok(())
}
