//! Rgb, Hsv and Hsl value types — the public color representations.
//!
//! Each stores three f64 components in the 0.0–1.0 range, with hue expressed
//! as a fraction of a full turn. Components are never validated or clamped.

use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_LIGHT_THRESHOLD;
use crate::error::ColorError;
use crate::{hex, math};

/// RGB color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Parse a 6-digit hex string, with or without `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex::parse_hex(s)
    }

    /// Format as uppercase hex (no `#` prefix), truncating each channel.
    pub fn to_hex(&self) -> String {
        hex::format_hex(*self)
    }

    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.r, self.g, self.b).into()
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }

    /// Rec. 601 luma, 0.0–1.0.
    pub fn luma(&self) -> f64 {
        math::luma(self.r, self.g, self.b)
    }

    /// Whether the luma exceeds the default threshold of 150/255.
    pub fn is_light(&self) -> bool {
        self.is_light_with_threshold(DEFAULT_LIGHT_THRESHOLD)
    }

    /// Whether the luma is strictly greater than `threshold / 255`.
    pub fn is_light_with_threshold(&self, threshold: u8) -> bool {
        math::is_light(self.r, self.g, self.b, threshold)
    }

    /// Per-channel `offset + weight * self`, the building block of tint and
    /// shade ramps.
    pub(crate) fn scale_offset(&self, weight: f64, offset: f64) -> Self {
        Self {
            r: offset + weight * self.r,
            g: offset + weight * self.g,
            b: offset + weight * self.b,
        }
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// HSV (a.k.a. HSB) color. Hue in 0.0..1.0, saturation and value 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue as a fraction of a full turn.
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn s(&self) -> f64 {
        self.s
    }
    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn to_rgb(&self) -> Rgb {
        math::hsv_to_rgb(self.h, self.s, self.v).into()
    }

    /// Convert to HSL. Hue is carried over unchanged.
    pub fn to_hsl(&self) -> Hsl {
        math::hsv_to_hsl(self.h, self.s, self.v).into()
    }
}

impl From<(f64, f64, f64)> for Hsv {
    fn from((h, s, v): (f64, f64, f64)) -> Self {
        Self { h, s, v }
    }
}

impl From<Hsv> for (f64, f64, f64) {
    fn from(c: Hsv) -> Self {
        (c.h, c.s, c.v)
    }
}

/// HSL color. Hue in 0.0..1.0, saturation and lightness 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hue as a fraction of a full turn.
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn s(&self) -> f64 {
        self.s
    }
    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn to_hsv(&self) -> Hsv {
        math::hsl_to_hsv(self.h, self.s, self.l).into()
    }

    pub fn to_rgb(&self) -> Rgb {
        self.to_hsv().to_rgb()
    }
}

impl From<(f64, f64, f64)> for Hsl {
    fn from((h, s, l): (f64, f64, f64)) -> Self {
        Self { h, s, l }
    }
}

impl From<Hsl> for (f64, f64, f64) {
    fn from(c: Hsl) -> Self {
        (c.h, c.s, c.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hex_helpers_delegate() {
        let c: Rgb = "#336699".parse().unwrap();
        assert_eq!(c, Rgb::new(0.2, 0.4, 0.6));
        assert_eq!(c.to_hex(), "336699");
        assert_eq!(c.to_string(), "336699");
        assert_eq!(Rgb::from_hex("xyz"), Err(ColorError::InvalidFormat("xyz".into())));
    }

    #[test]
    fn primaries_to_hsv() {
        let green = Rgb::new(0.0, 1.0, 0.0).to_hsv();
        assert!(approx_eq(green.h(), 1.0 / 3.0));
        assert_eq!((green.s(), green.v()), (1.0, 1.0));

        let blue = Rgb::new(0.0, 0.0, 1.0).to_hsv();
        assert!(approx_eq(blue.h(), 2.0 / 3.0));
    }

    #[test]
    fn pure_red_to_hsl() {
        let hsl = Rgb::new(1.0, 0.0, 0.0).to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn hsl_back_to_rgb() {
        let rgb = Rgb::new(0.25, 0.5, 0.75);
        let back = rgb.to_hsl().to_rgb();
        assert!(approx_eq(back.r(), 0.25));
        assert!(approx_eq(back.g(), 0.5));
        assert!(approx_eq(back.b(), 0.75));
    }

    #[test]
    fn tuple_conversions() {
        let rgb: Rgb = (0.1, 0.2, 0.3).into();
        let t: (f64, f64, f64) = rgb.into();
        assert_eq!(t, (0.1, 0.2, 0.3));
        let hsv: Hsv = (0.5, 0.5, 0.5).into();
        assert_eq!(<(f64, f64, f64)>::from(hsv), (0.5, 0.5, 0.5));
    }

    #[test]
    fn lightness_classification() {
        assert!(Rgb::WHITE.is_light());
        assert!(!Rgb::BLACK.is_light());
        // Yellow: luma 0.886
        assert!(Rgb::new(1.0, 1.0, 0.0).is_light());
        // Blue: luma 0.114
        assert!(!Rgb::new(0.0, 0.0, 1.0).is_light());
        assert!(!Rgb::new(0.5, 0.5, 0.5).is_light_with_threshold(200));
        assert!(Rgb::new(0.5, 0.5, 0.5).is_light_with_threshold(100));
    }
}
