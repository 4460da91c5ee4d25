mod conversion;
mod equality;
mod interpolation;
mod math;
mod string;
mod tone;
mod wheel;

// conversion
pub use conversion::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::{to_eq_bits, to_eq_coordinates};

// interpolation
pub(crate) use interpolation::round_gradient;
pub use interpolation::{
    gradient, lerp, linear_gradient, multi_gradient, rounded_gradient, rounded_linear_gradient,
    rounded_multi_gradient,
};
#[cfg(feature = "pyffi")]
pub(crate) use interpolation::{
    py_gradient, py_multi_gradient, py_rounded_gradient, py_rounded_multi_gradient, try_gradient,
};

// math
pub use math::{clamp, clamp_norm, round_half_up, wrap, wrap_norm};
pub(crate) use math::{round_all, FloatExt};

// string
pub(crate) use string::{format_hsla, format_rgba};
pub use string::{hex_to_rgb, hsl_to_css, rgb_to_css, rgb_to_hex};

// tone
pub use tone::{darken_hex, darken_hsl, darken_rgb, lighten_hex, lighten_hsl, lighten_rgb};

// wheel
pub use wheel::{complement_hex, complement_hsl, complement_rgb};
