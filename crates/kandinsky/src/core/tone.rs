#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{clamp, clamp_norm, hex_to_rgb, rgb_to_hex, round_half_up};
use crate::error::ColorFormatError;
use crate::{Float, Hsl, Rgb};

/// Scale every channel by `1 + factor`, clamp to `0..=255`, and round.
#[inline]
fn scale_rgb(factor: Float, rgb: &Rgb) -> Rgb {
    #[allow(clippy::suboptimal_flops)]
    #[inline]
    fn scale(factor: Float, c: Float) -> Float {
        round_half_up(clamp(0.0, 255.0, c + c * factor))
    }

    [
        scale(factor, rgb[0]),
        scale(factor, rgb[1]),
        scale(factor, rgb[2]),
    ]
}

/// Lighten the RGB color by the given fraction.
///
/// Each channel `c` becomes `c + c × amount`, clamped to `0..=255` and rounded.
/// The amount is not bounded; large amounts simply push channels to 255. Black
/// stays black.
///
/// ```
/// # use kandinsky::lighten_rgb;
/// assert_eq!(lighten_rgb(0.2, [102.0, 153.0, 204.0]), [122.0, 184.0, 245.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lighten_rgb(amount: Float, rgb: Rgb) -> Rgb {
    scale_rgb(amount, &rgb)
}

/// Darken the RGB color by the given fraction.
///
/// Each channel `c` becomes `c - c × amount`, clamped to `0..=255` and rounded.
///
/// ```
/// # use kandinsky::darken_rgb;
/// assert_eq!(darken_rgb(0.2, [102.0, 153.0, 204.0]), [82.0, 122.0, 163.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn darken_rgb(amount: Float, rgb: Rgb) -> Rgb {
    scale_rgb(-amount, &rgb)
}

/// Lighten the HSL color by the given fraction.
///
/// This function only touches lightness `l`, which becomes `l + l × amount`
/// clamped to unit range. Hue and saturation stay the same.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[allow(clippy::suboptimal_flops)]
pub fn lighten_hsl(amount: Float, hsl: Hsl) -> Hsl {
    let [h, s, l] = hsl;
    [h, s, clamp_norm(l + l * amount)]
}

/// Darken the HSL color by the given fraction.
///
/// This function only touches lightness `l`, which becomes `l - l × amount`
/// clamped to unit range.
#[cfg_attr(feature = "pyffi", pyfunction)]
#[allow(clippy::suboptimal_flops)]
pub fn darken_hsl(amount: Float, hsl: Hsl) -> Hsl {
    let [h, s, l] = hsl;
    [h, s, clamp_norm(l - l * amount)]
}

/// Lighten the hexadecimal color by the given fraction in RGB.
///
/// # Errors
///
/// This function fails with the same errors as [`hex_to_rgb`].
///
/// ```
/// # use kandinsky::lighten_hex;
/// # use kandinsky::error::ColorFormatError;
/// assert_eq!(lighten_hex(0.2, "#6699CC")?, "#7ab8f5");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lighten_hex(amount: Float, hex: &str) -> Result<String, ColorFormatError> {
    Ok(rgb_to_hex(lighten_rgb(amount, hex_to_rgb(hex)?)))
}

/// Darken the hexadecimal color by the given fraction in RGB.
///
/// # Errors
///
/// This function fails with the same errors as [`hex_to_rgb`].
///
/// ```
/// # use kandinsky::darken_hex;
/// # use kandinsky::error::ColorFormatError;
/// assert_eq!(darken_hex(0.2, "#6699CC")?, "#527aa3");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn darken_hex(amount: Float, hex: &str) -> Result<String, ColorFormatError> {
    Ok(rgb_to_hex(darken_rgb(amount, hex_to_rgb(hex)?)))
}

// ====================================================================================================================
