//! Color math — direct conversions on plain tuples.
//! All functions use normalized f64 in 0.0–1.0; hue is a fraction of a turn.
//!
//! Inputs outside 0.0–1.0 are not clamped. The results for such inputs are
//! whatever the formulas produce.

use crate::constants::{CHANNEL_MAX, LUMA_WEIGHTS};

/// RGB → HSV. All values 0.0–1.0, hue in 0.0..1.0.
///
/// When several channels share the maximum, red wins over green and green
/// over blue.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);

    let sector = if c == 0.0 {
        0.0
    } else if v == r {
        ((g - b) / c).rem_euclid(6.0)
    } else if v == g {
        (b - r) / c + 2.0
    } else if v == b {
        (r - g) / c + 4.0
    } else {
        0.0
    };

    let mut h = sector / 6.0;
    // rem_euclid may round a tiny negative up to exactly 6.0
    if h >= 1.0 {
        h -= 1.0;
    }

    let s = if v == 0.0 { 0.0 } else { c / v };

    (h, s, v)
}

/// HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSV → HSL. Hue passes through unchanged.
///
/// Black keeps its HSV saturation, white gets zero saturation.
pub(crate) fn hsv_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let l = (2.0 - s) * v / 2.0;
    let s_l = if l == 0.0 {
        s
    } else if l == 1.0 {
        0.0
    } else if l < 0.5 {
        s * v / (l * 2.0)
    } else {
        s * v / (2.0 - l * 2.0)
    };
    (h, s_l, l)
}

/// HSL → HSV. Hue passes through unchanged.
pub(crate) fn hsl_to_hsv(h: f64, s_l: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_l * l.min(1.0 - l);
    let s_v = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s_v, v)
}

/// Rec. 601 luma of a normalized RGB triple.
pub(crate) fn luma(r: f64, g: f64, b: f64) -> f64 {
    let (wr, wg, wb) = LUMA_WEIGHTS;
    r * wr + g * wg + b * wb
}

/// True when the luma is strictly above `threshold / 255`.
pub(crate) fn is_light(r: f64, g: f64, b: f64, threshold: u8) -> bool {
    luma(r, g, b) > f64::from(threshold) / CHANNEL_MAX
}
