//! Floem bindings: a [`ColorSink`] producing `peniko` colors and a clickable
//! swatch view.

use floem::peniko::Color;
use floem::prelude::*;

use crate::color::{Hsv, Rgb};
use crate::constants;
use crate::sink::ColorSink;

/// Sink that builds floem colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloemSink;

impl ColorSink for FloemSink {
    type Color = Color;

    fn from_rgb(&self, rgb: Rgb, alpha: f64) -> Color {
        Color::rgba(rgb.r(), rgb.g(), rgb.b(), alpha)
    }

    fn from_hsv(&self, hsv: Hsv, alpha: f64) -> Color {
        self.from_rgb(hsv.to_rgb(), alpha)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        FloemSink.from_rgb(rgb, constants::OPAQUE)
    }
}

/// Opaque color from a hex string, or black when the string is invalid.
pub fn color_from_hex(hex: &str) -> Color {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.into(),
        Err(err) => {
            log::debug!("{err}; falling back to black");
            Color::BLACK
        }
    }
}

/// A swatch filled with `color` and labelled with its hex code.
///
/// The label is black on light colors and white on dark ones. Clicking the
/// swatch copies the hex code to the clipboard.
pub fn swatch(color: Rgb) -> impl IntoView {
    let hex = color.to_hex();
    let fill = Color::from(color);
    let ink = if color.is_light() {
        Color::BLACK
    } else {
        Color::WHITE
    };

    let text = hex.clone();
    container(label(move || text.clone()).style(move |s| {
        s.font_size(constants::SWATCH_FONT)
            .font_family("monospace".to_string())
            .color(ink)
    }))
    .style(move |s| {
        s.width(constants::SWATCH_WIDTH)
            .height(constants::SWATCH_HEIGHT)
            .items_center()
            .justify_center()
            .background(fill)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        copy_to_clipboard(&hex);
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("could not copy {text} to clipboard: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}
