#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{clamp, clamp_norm, round_half_up};
use crate::error::ColorFormatError;
use crate::{Float, Hsl, HslaCss, Rgb, RgbaCss};

/// Parse a 24-bit color in hexadecimal format.
///
/// This function strips one leading `#`, if present. The remainder must be
/// exactly six hexadecimal digits in either case. If successful, this function
/// returns the three coordinates as integral floating point numbers in
/// `0..=255`.
///
/// # Errors
///
/// This function returns [`ColorFormatError::UnexpectedLength`] if the digits
/// are too few or too many and [`ColorFormatError::MalformedHex`] if they
/// include a character other than a hexadecimal digit.
///
/// ```
/// # use kandinsky::hex_to_rgb;
/// # use kandinsky::error::ColorFormatError;
/// assert_eq!(hex_to_rgb("#FF0000")?, [255.0, 0.0, 0.0]);
/// assert_eq!(hex_to_rgb("6699cc")?, [102.0, 153.0, 204.0]);
/// assert_eq!(hex_to_rgb("#f00"), Err(ColorFormatError::UnexpectedLength));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorFormatError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<Float, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedLength)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(Float::from(n))
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Convert a channel to a byte, clamping to `0..=255` and rounding half-up.
#[inline]
pub(crate) fn to_byte(channel: Float) -> u8 {
    // Not-a-number fails both comparisons in clamp and then casts to zero.
    clamp(0.0, 255.0, round_half_up(channel)) as u8
}

/// Format the RGB color in lowercase hashed hexadecimal notation.
///
/// Channels should be integral and in `0..=255`. Since a malformed hex string
/// is worse than a slightly off color, this function clamps and rounds each
/// channel before formatting it with two digits.
///
/// ```
/// # use kandinsky::rgb_to_hex;
/// assert_eq!(rgb_to_hex([255.0, 0.0, 0.0]), "#ff0000");
/// assert_eq!(rgb_to_hex([1.0, 2.0, 300.0]), "#0102ff");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the effective alpha. A missing or not-a-number alpha is opaque;
/// all other values are clamped to unit range.
#[inline]
pub(crate) fn effective_alpha(alpha: Option<Float>) -> Float {
    match alpha {
        Some(a) if !a.is_nan() => clamp_norm(a),
        _ => 1.0,
    }
}

/// Write the number in shortest form.
///
/// Rust's `Display` for floats already omits trailing zeros and the decimal
/// point for integral values. This function only ensures that negative zero
/// shows up as plain `0`.
#[inline]
fn write_number(n: Float, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // Too much negativity!
    let n = if n == 0.0 { 0.0 } else { n };
    f.write_fmt(format_args!("{}", n))
}

/// Format the RGB color with alpha as a CSS `rgba()` function.
pub(crate) fn format_rgba(
    rgb: &Rgb,
    alpha: Option<Float>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_fmt(format_args!(
        "rgba({}, {}, {}, ",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    ))?;
    write_number(effective_alpha(alpha), f)?;
    f.write_str(")")
}

/// Format the HSL color with alpha as a CSS `hsl()` function.
///
/// Hue is scaled to degrees, saturation and lightness to percent, and all three
/// are rounded half-up. They are not clamped.
pub(crate) fn format_hsla(
    hsl: &Hsl,
    alpha: Option<Float>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str("hsl(")?;
    write_number(round_half_up(hsl[0] * 360.0), f)?;
    f.write_str(", ")?;
    write_number(round_half_up(hsl[1] * 100.0), f)?;
    f.write_str("%, ")?;
    write_number(round_half_up(hsl[2] * 100.0), f)?;
    f.write_str("%, ")?;
    write_number(effective_alpha(alpha), f)?;
    f.write_str(")")
}

/// Format the RGB color with alpha as CSS, e.g., `rgba(255, 128, 64, 0.3)`.
///
/// Channels are rounded and clamped to `0..=255`. A missing or not-a-number
/// alpha is treated as opaque. Alpha values outside unit range are clamped,
/// so that anything above 1 is opaque, too.
///
/// ```
/// # use kandinsky::rgb_to_css;
/// assert_eq!(rgb_to_css(Some(0.3), [255.0, 128.0, 64.0]), "rgba(255, 128, 64, 0.3)");
/// assert_eq!(rgb_to_css(Some(1.5), [255.0, 128.0, 64.0]), "rgba(255, 128, 64, 1)");
/// assert_eq!(rgb_to_css(None, [255.0, 128.0, 64.0]), "rgba(255, 128, 64, 1)");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[cfg_attr(feature = "pyffi", pyo3(signature = (alpha, rgb)))]
pub fn rgb_to_css(alpha: Option<Float>, rgb: Rgb) -> String {
    RgbaCss::new(rgb, alpha).to_string()
}

/// Format the HSL color with alpha as CSS, e.g., `hsl(101, 62%, 41%, 1)`.
///
/// Alpha is treated just like for [`rgb_to_css`].
///
/// ```
/// # use kandinsky::hsl_to_css;
/// assert_eq!(hsl_to_css(Some(0.12), [0.28, 0.62, 0.414]), "hsl(101, 62%, 41%, 0.12)");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[cfg_attr(feature = "pyffi", pyo3(signature = (alpha, hsl)))]
pub fn hsl_to_css(alpha: Option<Float>, hsl: Hsl) -> String {
    HslaCss::new(hsl, alpha).to_string()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{effective_alpha, hex_to_rgb, hsl_to_css, rgb_to_css, rgb_to_hex, to_byte};
    use crate::error::ColorFormatError;
    use crate::Float;

    #[test]
    fn test_hex_to_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_rgb("#FF0000")?, [255.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("FF0000")?, [255.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("#af671f")?, [175.0, 103.0, 31.0]);
        assert_eq!(hex_to_rgb("#AbCdEf")?, [171.0, 205.0, 239.0]);

        assert_eq!(hex_to_rgb(""), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(hex_to_rgb("#"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(hex_to_rgb("#fff"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(
            hex_to_rgb("#ff00001"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(
            hex_to_rgb("##ff0000"),
            Err(ColorFormatError::UnexpectedLength)
        );
        assert_eq!(hex_to_rgb("#ff00g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(hex_to_rgb("+f+f+f"), Err(ColorFormatError::MalformedHex));
        assert_eq!(hex_to_rgb("#💩00"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex([255.0, 0.0, 0.0]), "#ff0000");
        assert_eq!(rgb_to_hex([0.0, 0.0, 0.0]), "#000000");
        assert_eq!(rgb_to_hex([10.0, 11.0, 12.0]), "#0a0b0c");
        assert_eq!(rgb_to_hex([-20.0, 127.5, 256.0]), "#0080ff");
        assert_eq!(rgb_to_hex([Float::NAN, 1.0, 1.0]), "#000101");
        assert_eq!(to_byte(254.49), 254);
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for hex in ["#000000", "#FFFFFF", "6699CC", "#af671f", "#0a0B0c"] {
            let normalized = format!("#{}", hex.trim_start_matches('#').to_ascii_lowercase());
            assert_eq!(rgb_to_hex(hex_to_rgb(hex)?), normalized);
        }

        for value in 0..=0xff_u32 {
            let hex = format!("#{:02x}{:02x}{:02x}", value, 0xff - value, value / 2);
            assert_eq!(rgb_to_hex(hex_to_rgb(&hex)?), hex);
        }

        Ok(())
    }

    #[test]
    fn test_alpha() {
        assert_eq!(effective_alpha(None), 1.0);
        assert_eq!(effective_alpha(Some(Float::NAN)), 1.0);
        assert_eq!(effective_alpha(Some(1.5)), 1.0);
        assert_eq!(effective_alpha(Some(-0.5)), 0.0);
        assert_eq!(effective_alpha(Some(0.25)), 0.25);
    }

    #[test]
    fn test_rgb_to_css() {
        let rgb = [255.0, 128.0, 64.0];
        assert_eq!(rgb_to_css(Some(1.0), rgb), "rgba(255, 128, 64, 1)");
        assert_eq!(rgb_to_css(Some(1.5), rgb), "rgba(255, 128, 64, 1)");
        assert_eq!(rgb_to_css(None, rgb), "rgba(255, 128, 64, 1)");
        assert_eq!(rgb_to_css(Some(0.3), rgb), "rgba(255, 128, 64, 0.3)");
        assert_eq!(rgb_to_css(Some(-0.0), rgb), "rgba(255, 128, 64, 0)");
        assert_eq!(
            rgb_to_css(Some(0.5), [300.2, 127.5, -4.0]),
            "rgba(255, 128, 0, 0.5)"
        );
    }

    #[test]
    fn test_hsl_to_css() {
        let hsl = [0.28, 0.62, 0.414];
        assert_eq!(hsl_to_css(Some(1.0), hsl), "hsl(101, 62%, 41%, 1)");
        assert_eq!(hsl_to_css(Some(0.12), hsl), "hsl(101, 62%, 41%, 0.12)");
        assert_eq!(hsl_to_css(None, hsl), "hsl(101, 62%, 41%, 1)");
        assert_eq!(hsl_to_css(Some(1.5), hsl), "hsl(101, 62%, 41%, 1)");
        assert_eq!(
            hsl_to_css(Some(1.0), [-0.001, 0.0, 1.0]),
            "hsl(0, 0%, 100%, 1)"
        );
    }
}
