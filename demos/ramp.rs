//! Standalone demo: a tint/shade ramp next to a column of pleasing colors.
//!
//! Pass a base hex color as the first argument (defaults to `3B82F6`).
//! Click a swatch to copy its hex code.

use color_utils::{Rgb, pleasing_random, shades_for, swatch};
use floem::prelude::*;
use floem::window::WindowConfig;

const STEPS: usize = 6;

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "3B82F6".to_string());
    let base = match Rgb::from_hex(&arg) {
        Ok(base) => base,
        Err(err) => {
            log::warn!("{err}; using gray");
            Rgb::new(0.5, 0.5, 0.5)
        }
    };

    let ramp = shades_for(base, STEPS);
    let pleasing: Vec<Rgb> = (0..ramp.len()).map(|_| pleasing_random().to_rgb()).collect();

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    v_stack_from_iter(ramp.iter().copied().map(swatch)),
                    v_stack_from_iter(pleasing.iter().copied().map(swatch)),
                ))
                .style(|s| s.gap(8.0).padding(8.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 360.0))
                    .title("color-utils ramp"),
            ),
        )
        .run();
}
