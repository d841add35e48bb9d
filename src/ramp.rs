//! Tint/shade ramps: a base color mixed toward white and toward black.
//!
//! For `n` steps the stride is `f = 1/n` and offsets run `o = 0, f, 2f, …`
//! while `o < 1`. Each offset contributes
//!
//! - a tint `o + f + (1 - o - f) * base`
//! - a shade `o * base`
//!
//! The shades followed by the tints are then reversed, so the ramp opens at
//! pure white, walks through the tints toward the base, continues down the
//! shades, and ends at black. Offsets come from `i * f` rather than repeated
//! addition, but when `f` does not divide 1.0 exactly the number of steps
//! still depends on how the last product rounds.

use crate::color::Rgb;
use crate::constants::OPAQUE;
use crate::sink::{ColorSink, RgbSink};

/// Tints and shades of `base` in `n` steps, as plain [`Rgb`] values.
pub fn shades_for(base: Rgb, n: usize) -> Vec<Rgb> {
    shades_for_with(&RgbSink, base, n)
}

/// Tints and shades of `base` in `n` steps, built through `sink`.
///
/// Every color is fully opaque. `n == 0` yields an empty ramp.
pub fn shades_for_with<S: ColorSink>(sink: &S, base: Rgb, n: usize) -> Vec<S::Color> {
    if n == 0 {
        return Vec::new();
    }
    let f = 1.0 / n as f64;

    let mut tints = Vec::with_capacity(n);
    let mut shades = Vec::with_capacity(n);
    for o in offsets(f) {
        let tint = base.scale_offset(1.0 - o - f, o + f);
        let shade = base.scale_offset(o, 0.0);
        tints.push(sink.from_rgb(tint, OPAQUE));
        shades.push(sink.from_rgb(shade, OPAQUE));
    }
    log::trace!("ramp for {base} with {n} requested steps has {} entries", tints.len() * 2);

    shades.extend(tints);
    shades.reverse();
    shades
}

fn offsets(step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(|o| *o < 1.0)
}
