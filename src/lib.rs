//! # color-utils
//!
//! Small color-space toolkit: 6-digit hex parsing and formatting, RGB ↔ HSV
//! ↔ HSL conversion, tint/shade ramps, a "pleasing" random color, and a
//! luma-based light/dark test.
//!
//! All components are normalized f64 in 0.0–1.0, and hue is a fraction of a
//! full turn rather than degrees. Building toolkit colors goes through
//! [`ColorSink`], so the math has no GUI dependency; enable the `floem`
//! feature for floem colors and a swatch view.
//!
//! ## Usage
//!
//! ```rust
//! use color_utils::{Rgb, shades_for};
//!
//! let base = Rgb::from_hex("#3B82F6").unwrap();
//! let hsl = base.to_hsl();
//! assert!(hsl.l() > 0.5);
//!
//! let ramp = shades_for(base, 4);
//! assert_eq!(ramp.first().map(Rgb::to_hex).as_deref(), Some("FFFFFF"));
//! assert_eq!(ramp.last().map(Rgb::to_hex).as_deref(), Some("000000"));
//! ```

mod color;
pub mod constants;
mod error;
#[cfg(feature = "floem")]
mod gui;
mod hex;
mod math;
mod pleasing;
mod ramp;
mod random;
mod sink;

pub use color::{Hsl, Hsv, Rgb};
pub use error::{ColorError, Result};
#[cfg(feature = "floem")]
pub use gui::{FloemSink, color_from_hex, swatch};
pub use hex::{format_hex, parse_hex};
pub use pleasing::{pleasing_hsv, pleasing_random, pleasing_with};
pub use ramp::{shades_for, shades_for_with};
pub use random::UniformSource;
pub use sink::{ColorSink, RgbSink};
