//! Utility module with kandinsky's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Kandinsky only parses one color format, hashed or unhashed hexadecimal with
/// six digits. Both variants signal that a string does not match that format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with too few or too many characters. For example, `#f00`
    /// is missing three hexadecimal digits, whereas `##ff0000` has an extra
    /// hash.
    UnexpectedLength,

    /// A color format that has the correct length but contains a character
    /// other than a hexadecimal digit. For example, `#ff00g0` has a malformed
    /// third coordinate.
    MalformedHex,
}

impl ColorFormatError {
    /// Determine whether this error signals an invalid color format.
    ///
    /// All variants do. This method exists so that callers matching on the
    /// general condition need not enumerate the variants.
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::UnexpectedLength | Self::MalformedHex)
    }
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedLength => f.write_str(
                "color format should have 6 hexadecimal digits after an optional `#` but does not",
            ),
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorFormatError;

    #[test]
    fn test_display() {
        assert_eq!(
            ColorFormatError::MalformedHex.to_string(),
            "color format coordinates should be hexadecimal integers but are not"
        );
        assert!(ColorFormatError::UnexpectedLength
            .to_string()
            .starts_with("color format should have 6"));
        assert!(ColorFormatError::UnexpectedLength.is_invalid_format());
        assert!(ColorFormatError::MalformedHex.is_invalid_format());
    }
}
