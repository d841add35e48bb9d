//! Tunable constants for conversions, classification, and the swatch view.

/// Default luma threshold for [`crate::Rgb::is_light`], on a 0–255 scale.
pub const DEFAULT_LIGHT_THRESHOLD: u8 = 150;

/// Rec. 601 luma weights for red, green, and blue.
pub const LUMA_WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// Number of hex digits in an `RRGGBB` string.
pub const HEX_DIGITS: usize = 6;

/// Largest 8-bit channel value.
pub const CHANNEL_MAX: f64 = 255.0;

/// Alpha used for every generated color.
pub const OPAQUE: f64 = 1.0;

/// Swatch width in the floem view
#[cfg(feature = "floem")]
pub const SWATCH_WIDTH: f32 = 96.0;

/// Swatch height in the floem view
#[cfg(feature = "floem")]
pub const SWATCH_HEIGHT: f32 = 24.0;

/// Swatch label font size
#[cfg(feature = "floem")]
pub const SWATCH_FONT: f32 = 11.0;
