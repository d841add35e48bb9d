//! Display-color construction, kept behind a trait so the math never depends
//! on a GUI toolkit.

use crate::color::{Hsv, Rgb};

/// Builds a toolkit color from normalized components plus alpha.
pub trait ColorSink {
    type Color;

    fn from_rgb(&self, rgb: Rgb, alpha: f64) -> Self::Color;

    fn from_hsv(&self, hsv: Hsv, alpha: f64) -> Self::Color;
}

/// In-memory sink that yields plain [`Rgb`] values and drops alpha.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbSink;

impl ColorSink for RgbSink {
    type Color = Rgb;

    fn from_rgb(&self, rgb: Rgb, _alpha: f64) -> Rgb {
        rgb
    }

    fn from_hsv(&self, hsv: Hsv, _alpha: f64) -> Rgb {
        hsv.to_rgb()
    }
}
