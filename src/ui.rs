//! egui widgets for parameter and playback control.
//!
//! These are plain widget functions, not a window manager: the host
//! application owns the egui context and decides where the panels live. The
//! parameter panel reports whether anything changed so the host knows when to
//! re-run the integrator and rebind the sampler - the widgets themselves never
//! integrate.
//!
//! # Example
//!
//! ```ignore
//! egui::Window::new("Aizawa Attractor").show(ctx, |ui| {
//!     if aizawa::ui::params_panel(ui, &mut params) {
//!         let traj = Arc::new(integrate_default(&params)?);
//!         playback.bind(traj);
//!     }
//!     ui.separator();
//!     aizawa::ui::playback_panel(ui, &mut playback);
//! });
//! ```

use crate::params::{AizawaParams, PARAM_RANGES};
use crate::playback::{Playback, MAX_SPEED, MIN_SPEED};

/// Sliders for the six coefficients plus Reset and Randomize buttons.
///
/// Returns `true` if any coefficient changed this frame, from any source -
/// slider drag, Reset, or Randomize all look the same to the caller.
pub fn params_panel(ui: &mut egui::Ui, params: &mut AizawaParams) -> bool {
    let mut changed = false;

    ui.heading("Parameters");
    for ((name, value), range) in params.fields_mut().into_iter().zip(PARAM_RANGES) {
        changed |= ui
            .add(egui::Slider::new(value, range).text(name).step_by(0.01))
            .changed();
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            params.reset();
            changed = true;
        }
        if ui.button("Randomize").clicked() {
            params.randomize(&mut rand::thread_rng());
            changed = true;
        }
    });

    changed
}

/// Speed slider, play/pause button, and full-curve toggle.
///
/// Edits go straight to the sampler; rebinding is not needed for any of
/// these, so nothing is reported back.
pub fn playback_panel(ui: &mut egui::Ui, playback: &mut Playback) {
    ui.heading("Playback");

    let mut speed = playback.speed();
    if ui
        .add(
            egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                .text("Speed")
                .step_by(0.1),
        )
        .changed()
    {
        playback.set_speed(speed);
    }

    ui.horizontal(|ui| {
        let label = if playback.is_playing() { "Pause" } else { "Play" };
        if ui.button(label).clicked() {
            playback.toggle_play();
        }

        let mut full_curve = playback.full_curve_visible();
        if ui.checkbox(&mut full_curve, "Full curve").changed() {
            playback.set_visible_full_curve(full_curve);
        }
    });
}
