//! Navigation bar and route switching for `CosmicApp`.

use eframe::egui;

use cosmic_orbit::content::APP_TITLE;
use cosmic_orbit::route::Route;

use super::CosmicApp;

impl CosmicApp {
    /// Switch to `route`, playing the click sound.
    pub fn navigate(&mut self, route: Route) {
        self.audio.play_one_shot();
        if self.route == route {
            return;
        }
        log::debug!("navigate {} -> {}", self.route.path(), route.path());
        if self.route == Route::Simulation {
            self.hovered = None;
        }
        if route == Route::Simulation {
            // Frame timing restarts so the first frame back is not a jump.
            self.last_frame_time = std::time::Instant::now();
        }
        self.route = route;
    }

    /// Render the top navigation strip.
    pub fn draw_navbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let title = ui.add(
                egui::Label::new(egui::RichText::new(APP_TITLE).strong().size(18.0))
                    .sense(egui::Sense::click()),
            );
            if title.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                self.navigate(Route::Landing);
            }

            ui.separator();

            for route in Route::NAV {
                if ui
                    .selectable_label(self.route == route, route.title())
                    .clicked()
                {
                    self.navigate(route);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.draw_audio_toggle(ui);
            });
        });
    }

    /// Play/pause button for the background track.
    pub fn draw_audio_toggle(&mut self, ui: &mut egui::Ui) {
        let label = if self.audio.is_playing() {
            "\u{1F50A} Sound on"
        } else {
            "\u{1F507} Sound off"
        };
        let response = ui.add_enabled(self.audio.is_available(), egui::Button::new(label));
        if response.clicked() {
            self.audio.toggle();
        }
        response.on_disabled_hover_text("No audio available");
    }
}
