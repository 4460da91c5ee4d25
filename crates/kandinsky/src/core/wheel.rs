#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, wrap_norm};
use crate::error::ColorFormatError;
use crate::{Float, Hsl, Rgb};

/// Rotate the HSL color around the color wheel in `count` even steps.
///
/// The color with index `i` has hue `h - i / count`, wrapped back into unit
/// range, while saturation and lightness stay the same. Hence the color with
/// index 0 is the given color itself, and for a count of two the second color
/// is the complement. A count of zero produces no colors.
///
/// ```
/// # use kandinsky::complement_hsl;
/// assert_eq!(complement_hsl(2, [0.25, 0.5, 0.5]), vec![[0.25, 0.5, 0.5], [0.75, 0.5, 0.5]]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn complement_hsl(count: usize, hsl: Hsl) -> Vec<Hsl> {
    let [h, s, l] = hsl;
    (0..count)
        .map(|index| [wrap_norm(h - index as Float / count as Float), s, l])
        .collect()
}

/// Rotate the RGB color around the color wheel in `count` even steps.
///
/// This function converts the color to HSL, rotates it with
/// [`complement_hsl`], and converts every result back to RGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn complement_rgb(count: usize, rgb: Rgb) -> Vec<Rgb> {
    complement_hsl(count, rgb_to_hsl(rgb))
        .into_iter()
        .map(hsl_to_rgb)
        .collect()
}

/// Rotate the hexadecimal color around the color wheel in `count` even steps.
///
/// # Errors
///
/// This function fails with the same errors as [`hex_to_rgb`].
///
/// ```
/// # use kandinsky::complement_hex;
/// # use kandinsky::error::ColorFormatError;
/// assert_eq!(complement_hex(3, "#ff0000")?, vec!["#ff0000", "#0000ff", "#00ff00"]);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn complement_hex(count: usize, hex: &str) -> Result<Vec<String>, ColorFormatError> {
    Ok(complement_rgb(count, hex_to_rgb(hex)?)
        .into_iter()
        .map(rgb_to_hex)
        .collect())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{complement_hex, complement_hsl, complement_rgb};
    use crate::error::ColorFormatError;
    use crate::{assert_same_coordinates, Hsl};

    #[test]
    fn test_complement_hsl() {
        let hsl: Hsl = [0.3, 0.6, 0.45];
        for count in 1..=12 {
            let colors = complement_hsl(count, hsl);
            assert_eq!(colors.len(), count);
            assert_eq!(colors[0], hsl);

            for color in &colors {
                assert!((0.0..=1.0).contains(&color[0]));
                assert_eq!((color[1], color[2]), (hsl[1], hsl[2]));
            }
        }

        let colors = complement_hsl(4, hsl);
        assert_same_coordinates!(&colors[1], &[0.05, 0.6, 0.45]);
        assert_same_coordinates!(&colors[2], &[0.8, 0.6, 0.45]);
        assert_same_coordinates!(&colors[3], &[0.55, 0.6, 0.45]);

        assert!(complement_hsl(0, hsl).is_empty());
    }

    #[test]
    fn test_complement_rgb() {
        let colors = complement_rgb(2, [255.0, 0.0, 0.0]);
        assert_eq!(colors, vec![[255.0, 0.0, 0.0], [0.0, 255.0, 255.0]]);
    }

    #[test]
    fn test_complement_hex() -> Result<(), ColorFormatError> {
        assert_eq!(complement_hex(1, "#ff0000")?, vec!["#ff0000"]);
        assert_eq!(complement_hex(2, "#ff0000")?, vec!["#ff0000", "#00ffff"]);
        assert_eq!(
            complement_hex(3, "#ff0000")?,
            vec!["#ff0000", "#0000ff", "#00ff00"]
        );

        // Ties at 127.5 break on the last bit, which depends on precision.
        #[cfg(feature = "f64")]
        assert_eq!(
            complement_hex(4, "#FF0000")?,
            vec!["#ff0000", "#7f00ff", "#00ffff", "#80ff00"]
        );
        let colors = complement_rgb(4, [255.0, 0.0, 0.0]);
        for (actual, expected) in colors.iter().zip([
            [255.0, 0.0, 0.0],
            [127.5, 0.0, 255.0],
            [0.0, 255.0, 255.0],
            [127.5, 255.0, 0.0],
        ]) {
            for index in 0..3 {
                assert!((actual[index] - expected[index]).abs() <= 0.5);
            }
        }

        assert_eq!(
            complement_hex(3, "red"),
            Err(ColorFormatError::UnexpectedLength)
        );
        Ok(())
    }
}
