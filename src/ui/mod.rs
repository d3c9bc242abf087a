//! Generic egui UI helper functions shared across pages.
//!
//! Stateless functions that turn the static page content and info cards into
//! egui widgets, plus the 2-D starry backdrop painter.

use eframe::egui;

use cosmic_orbit::color::Rgba;
use cosmic_orbit::content::{Block, Tab};
use cosmic_orbit::info::InfoCard;
use cosmic_orbit::render::starfield::SkyBackdrop;

/// Page background behind the backdrop stars.
pub const SPACE_BG: egui::Color32 = egui::Color32::from_rgb(8, 8, 24);

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn accent() -> egui::Color32 {
    color32(cosmic_orbit::color::SUN_YELLOW)
}

/// Translucent rounded card.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 48, 200))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 30)))
        .rounding(8.0)
        .inner_margin(12.0)
        .outer_margin(4.0)
}

// ─── Content rendering ────────────────────────────────────────────────────────

/// Row of tab buttons. Returns `true` when the active tab changed.
pub fn tab_strip(ui: &mut egui::Ui, tabs: &[Tab], active: &mut usize) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for (i, tab) in tabs.iter().enumerate() {
            if ui.selectable_label(*active == i, tab.label).clicked() && *active != i {
                *active = i;
                changed = true;
            }
        }
    });
    changed
}

pub fn draw_blocks(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        match *block {
            Block::Heading(text) => {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(text).size(20.0).strong().color(accent()));
            }
            Block::Paragraph(text) => {
                ui.label(text);
                ui.add_space(6.0);
            }
            Block::Bullets(items) => bullet_list(ui, items),
            Block::Labeled(pairs) => {
                for &(label, text) in pairs {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(format!("{label}:")).strong());
                        ui.label(text);
                    });
                    ui.add_space(4.0);
                }
            }
            Block::Separator => {
                ui.separator();
            }
        }
    }
}

pub fn bullet_list(ui: &mut egui::Ui, items: &[&str]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("  \u{2022}");
            ui.label(*item);
        });
    }
    ui.add_space(4.0);
}

/// Description plus the "Quick Facts" list.
pub fn draw_info_card(ui: &mut egui::Ui, card: &InfoCard) {
    ui.label(egui::RichText::new(card.title).size(20.0).strong().color(accent()));
    ui.label(card.description);
    ui.add_space(6.0);
    ui.label(egui::RichText::new("Quick Facts").strong());
    bullet_list(ui, card.facts);
}

// ─── Backdrop ─────────────────────────────────────────────────────────────────

/// Twinkling stars and shooting stars across `rect` at time `t`.
pub fn paint_backdrop(painter: &egui::Painter, rect: egui::Rect, sky: &SkyBackdrop, t: f32) {
    let at = |x: f32, y: f32| rect.min + egui::vec2(x * rect.width(), y * rect.height());
    for star in &sky.stars {
        let alpha = (star.opacity_at(t) * 255.0) as u8;
        painter.circle_filled(
            at(star.x, star.y),
            star.size * 0.5,
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
        );
    }
    for shooting in &sky.shooting {
        if let Some((dx, dy, alpha)) = shooting.streak_at(t) {
            let head = at(shooting.x, shooting.y) + egui::vec2(dx, dy);
            let tail = head - egui::vec2(1.0, 1.0).normalized() * 60.0;
            painter.line_segment(
                [tail, head],
                egui::Stroke::new(
                    1.5,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, (alpha * 255.0) as u8),
                ),
            );
        }
    }
}
