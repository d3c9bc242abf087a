//! Simulation control panel for `CosmicApp`.
//!
//! Draws play/pause, speed stepping, the speed slider and readout, audio
//! controls, the fullscreen toggle and the planet navigator strip.

use eframe::egui;

use cosmic_orbit::bodies::Body;
use cosmic_orbit::sim::{Playback, MAX_SPEED, MIN_SPEED, SPEED_STEP};

use super::CosmicApp;

const BUTTON: egui::Vec2 = egui::vec2(32.0, 24.0);

impl CosmicApp {
    /// Render the control strip above the viewport.
    pub fn draw_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let (play_label, play_hint) = match self.sim.playback() {
                Playback::Playing(_) => ("\u{23F8}", "Pause"),
                Playback::Paused => ("\u{25B6}", "Play"),
            };
            if ui
                .add(egui::Button::new(play_label).min_size(BUTTON))
                .on_hover_text(play_hint)
                .clicked()
            {
                self.sim.toggle_play();
                self.audio.play_one_shot();
            }

            if ui
                .add(egui::Button::new("\u{2212}").min_size(BUTTON))
                .on_hover_text("Slower")
                .clicked()
            {
                self.sim.decrease_speed();
                self.audio.play_one_shot();
            }

            // While paused the slider shows the speed playback resumes at.
            let mut speed = if self.sim.is_playing() {
                self.sim.speed()
            } else {
                self.sim.resume_speed()
            };
            let slider = ui.add(
                egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                    .step_by(f64::from(SPEED_STEP))
                    .show_value(false),
            );
            if slider.changed() {
                self.sim.set_speed(speed);
            }

            if ui
                .add(egui::Button::new("+").min_size(BUTTON))
                .on_hover_text("Faster")
                .clicked()
            {
                self.sim.increase_speed();
                self.audio.play_one_shot();
            }

            ui.monospace(format!("{:.2}x", self.sim.speed()));

            ui.separator();

            self.draw_audio_toggle(ui);
            let mut volume = self.audio.volume();
            if ui
                .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
                .on_hover_text("Volume")
                .changed()
            {
                self.audio.set_volume(volume);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.fullscreen { "Exit fullscreen" } else { "Fullscreen" };
                if ui.button(label).clicked() {
                    self.toggle_fullscreen(ctx);
                }
            });
        });
    }

    /// "All Planets" plus one button per body.
    pub fn draw_navigator(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let selected = self.sim.selected();
            if ui.selectable_label(selected.is_none(), "All Planets").clicked() {
                self.sim.select_by_name(None);
                self.audio.play_one_shot();
            }
            for body in Body::ALL {
                if ui
                    .selectable_label(selected == Some(body), body.name())
                    .clicked()
                {
                    self.sim.select_by_name(Some(body.name()));
                    self.details_open = true;
                    self.audio.play_one_shot();
                }
            }
        });
    }

    fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        let want = !self.fullscreen;
        log::info!("requesting fullscreen = {want}");
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(want));
    }

    /// Follow what the window reports, so a refused request (or leaving
    /// fullscreen with the platform key) never leaves the button out of step.
    pub fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        if let Some(state) = ctx.input(|i| i.viewport().fullscreen) {
            if state != self.fullscreen {
                log::debug!("window fullscreen is now {state}");
                self.fullscreen = state;
            }
        }
    }
}
