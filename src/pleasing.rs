//! "Pleasing" random colors: a random hue with softened saturation and a
//! raised value.

use crate::color::{Hsv, Rgb};
use crate::constants::OPAQUE;
use crate::random::UniformSource;
use crate::sink::ColorSink;

/// Draw a pleasing color from `source`.
///
/// Three uniform draws form a base RGB color. Its hue is kept, its
/// saturation `s` becomes `s / 2`, and the value becomes `(1 + s) / 2`, so
/// the result always lands at medium saturation and medium-high brightness.
pub fn pleasing_hsv<U: UniformSource>(source: &mut U) -> Hsv {
    let base = Rgb::new(source.next_unit(), source.next_unit(), source.next_unit());
    let hsv = base.to_hsv();
    log::trace!("pleasing color from base {base}: hue {:.3}, saturation {:.3}", hsv.h(), hsv.s());
    Hsv::new(hsv.h(), hsv.s() / 2.0, (1.0 + hsv.s()) / 2.0)
}

/// Draw a pleasing color from `source` and build it through `sink`.
pub fn pleasing_with<S: ColorSink, U: UniformSource>(sink: &S, source: &mut U) -> S::Color {
    sink.from_hsv(pleasing_hsv(source), OPAQUE)
}

/// Draw a pleasing color from the thread-local generator.
pub fn pleasing_random() -> Hsv {
    pleasing_hsv(&mut rand::rng())
}
