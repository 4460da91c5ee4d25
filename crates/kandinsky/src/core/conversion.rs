#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::round_half_up;
use crate::error::ColorFormatError;
use crate::{Float, Hsl, Rgb};

/// Normalize 24-bit RGB coordinates to unit range.
#[inline]
pub(crate) fn from_24bit(rgb: &Rgb) -> [Float; 3] {
    [rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0]
}

/// Scale unit-range coordinates to 24-bit RGB, rounding half-up.
///
/// This function does not clamp. For valid HSL input, the coordinates already
/// are in unit range.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> Rgb {
    [
        round_half_up(coordinates[0] * 255.0),
        round_half_up(coordinates[1] * 255.0),
        round_half_up(coordinates[2] * 255.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an RGB color to HSL.
///
/// This function first normalizes the channels to unit range and then derives
/// lightness from the smallest and largest channel. Grays, i.e., colors whose
/// smallest and largest channel are the same, have zero hue and zero
/// saturation. For all other colors, saturation divides the spread by either
/// `max + min` or `2 - max - min`, depending on whether lightness exceeds ½,
/// which avoids the division blowing up near white. Hue is determined by the
/// channel equal to the maximum, checking red, then green, then blue, and
/// comes out in unit range.
///
/// ```
/// # use kandinsky::{rgb_to_hsl, assert_close_enough};
/// let [h, s, l] = rgb_to_hsl([175.0, 103.0, 31.0]);
/// assert_close_enough!(h, 30.0 / 360.0);
/// assert_close_enough!(s, 144.0 / 206.0);
/// assert_close_enough!(l, 206.0 / 510.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = from_24bit(&rgb);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [hue / 6.0, saturation, lightness]
}

/// Determine one channel from the hue angle `t` and the helper quantities `p`
/// and `q`.
///
/// The hue angle is corrected into unit range once. That suffices because
/// [`hsl_to_rgb`] offsets a unit-range hue by at most a third.
#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    // Fused multiply-adds would round differently and shift hex results.
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert an HSL color to RGB.
///
/// Grays, i.e., colors with zero saturation, have all three channels equal to
/// the lightness. For all other colors, this function computes the two helper
/// quantities `q` and `p` from lightness and saturation and then determines
/// red, green, and blue at hue offsets of +⅓, 0, and -⅓, respectively. It
/// scales the result to `0..=255` and rounds half-up. It does not clamp; for
/// valid HSL input, the result is in range by construction.
///
/// ```
/// # use kandinsky::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb([30.0 / 360.0, 0.7, 0.4]), [173.0, 102.0, 31.0]);
/// assert_eq!(hsl_to_rgb([0.0, 0.0, 0.5]), [128.0, 128.0, 128.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[allow(clippy::suboptimal_flops)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let [h, s, l] = hsl;

    if s == 0.0 {
        return to_24bit(&[l, l, l]);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    to_24bit(&[
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the hexadecimal color and convert it to HSL.
///
/// # Errors
///
/// This function fails with the same errors as [`hex_to_rgb`](crate::hex_to_rgb).
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorFormatError> {
    Ok(rgb_to_hsl(super::hex_to_rgb(hex)?))
}

/// Convert the HSL color to RGB and format it in hashed hexadecimal notation.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    super::rgb_to_hex(hsl_to_rgb(hsl))
}

// ====================================================================================================================
