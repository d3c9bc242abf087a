//! Page rendering for `CosmicApp`.
//!
//! - `draw_content`     : dispatcher on the current route
//! - `draw_landing`     : hero, feature cards and call to action
//! - `draw_learn`       : tabbed educational text
//! - `draw_simulation`  : control panel, viewport and tabs
//! - `draw_planet_info` : right-hand "Planet Info" sidebar

use eframe::egui;

use cosmic_orbit::content::{
    APP_TITLE, FEATURES, HERO_TEXT, LEARN_HEADING, LEARN_INTRO, LEARN_TABS, PREVIEW_HEADING,
    PREVIEW_TEXT, SIMULATION_TABS,
};
use cosmic_orbit::info::InfoCard;
use cosmic_orbit::route::Route;

use crate::ui::{accent, card_frame, draw_blocks, draw_info_card, tab_strip};
use super::CosmicApp;

impl CosmicApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.route {
            Route::Landing => self.draw_landing(ui),
            Route::Learn => self.draw_learn(ui),
            Route::Simulation => self.draw_simulation(ui, ctx),
            Route::NotFound => self.draw_not_found(ui),
        }
    }

    // ── Landing ──────────────────────────────────────────────────────────────

    fn draw_landing(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(egui::RichText::new(APP_TITLE).size(40.0).strong().color(accent()));
                ui.add_space(12.0);
                ui.set_max_width(640.0);
                ui.label(egui::RichText::new(HERO_TEXT).size(16.0));
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui.button(egui::RichText::new("Launch Simulation").size(16.0)).clicked() {
                        self.navigate(Route::Simulation);
                    }
                    if ui.button(egui::RichText::new("Learn More").size(16.0)).clicked() {
                        self.navigate(Route::Learn);
                    }
                });
                ui.add_space(40.0);
            });

            ui.columns(FEATURES.len(), |cols| {
                for (col, feature) in cols.iter_mut().zip(FEATURES.iter()) {
                    card_frame().show(col, |ui| {
                        ui.label(egui::RichText::new(feature.icon).size(28.0).color(accent()));
                        ui.label(egui::RichText::new(feature.title).size(18.0).strong());
                        ui.label(feature.text);
                    });
                }
            });

            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                card_frame().show(ui, |ui| {
                    ui.label(egui::RichText::new(PREVIEW_HEADING).size(24.0).strong());
                    ui.label(PREVIEW_TEXT);
                    ui.add_space(8.0);
                    if ui.button("Try It Now").clicked() {
                        self.navigate(Route::Simulation);
                    }
                });
                ui.add_space(24.0);
                ui.weak(format!("\u{A9} {APP_TITLE}"));
            });
        });
    }

    // ── Learn ────────────────────────────────────────────────────────────────

    fn draw_learn(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(egui::RichText::new(LEARN_HEADING).size(32.0).strong().color(accent()));
            ui.label(LEARN_INTRO);
            ui.add_space(8.0);
        });
        if tab_strip(ui, &LEARN_TABS, &mut self.learn_tab) {
            self.audio.play_one_shot();
        }
        let tab = &LEARN_TABS[self.learn_tab.min(LEARN_TABS.len() - 1)];
        egui::ScrollArea::vertical().show(ui, |ui| {
            card_frame().show(ui, |ui| draw_blocks(ui, tab.blocks));
        });
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    fn draw_simulation(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        card_frame().show(ui, |ui| {
            self.draw_controls(ui, ctx);
            ui.separator();
            self.draw_navigator(ui);
        });

        let tabs_height = 180.0;
        let view_size = egui::vec2(
            ui.available_width(),
            (ui.available_height() - tabs_height).max(240.0),
        );
        ui.allocate_ui(view_size, |ui| self.draw_viewport(ui, ctx));

        if tab_strip(ui, &SIMULATION_TABS, &mut self.sim_tab) {
            self.audio.play_one_shot();
        }
        let tab = &SIMULATION_TABS[self.sim_tab.min(SIMULATION_TABS.len() - 1)];
        egui::ScrollArea::vertical()
            .id_salt("simulation_tabs")
            .show(ui, |ui| draw_blocks(ui, tab.blocks));
    }

    pub fn draw_planet_info(&mut self, ui: &mut egui::Ui) {
        ui.heading("Planet Info");
        ui.separator();
        match InfoCard::for_selection(self.sim.selected()) {
            Some(card) => {
                egui::ScrollArea::vertical()
                    .id_salt("planet_info_scroll")
                    .show(ui, |ui| draw_info_card(ui, &card));
                ui.add_space(8.0);
                if ui.button("Clear selection").clicked() {
                    self.sim.select(None);
                    self.audio.play_one_shot();
                }
            }
            None => {
                ui.weak("Click a planet or pick one from the navigator to learn about it.");
            }
        }
    }

    // ── Not found ────────────────────────────────────────────────────────────

    fn draw_not_found(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(egui::RichText::new("404").size(64.0).strong().color(accent()));
            ui.label("Oops! This page drifted out of orbit.");
            ui.add_space(12.0);
            if ui.button("Return to Home").clicked() {
                self.navigate(Route::Landing);
            }
        });
    }
}
