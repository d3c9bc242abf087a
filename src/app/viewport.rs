//! The 3-D solar system view.
//!
//! Each frame: camera input, picking, one animator step, then painting back
//! to front (starfield, orbit paths, Sun glow, spheres and rings, labels)
//! and the detail card for the selected planet.

use std::time::Instant;

use eframe::egui;

use cosmic_orbit::bodies::Body;
use cosmic_orbit::info::InfoCard;
use cosmic_orbit::render::animator::advance;
use cosmic_orbit::render::camera::Projected;
use cosmic_orbit::render::math::{add, normalize, sub, Vec3};
use cosmic_orbit::render::scene::{shows_label, DrawKind, Material};
use cosmic_orbit::render::sphere::{shade_sphere, SphereView, Surface};

use crate::ui::{color32, draw_info_card};
use super::CosmicApp;

const ORBIT_STEPS: usize = 128;
const RING_SEGMENTS: usize = 72;
const RING_BANDS: usize = 6;
const MAX_SPRITE: f32 = 384.0;
const SKY: egui::Color32 = egui::Color32::from_rgb(3, 3, 14);

/// One GPU texture per body, re-filled every frame with the shaded sprite.
/// Slot 0 is the Sun.
pub struct SpriteCache {
    slots: Vec<Option<egui::TextureHandle>>,
}

impl Default for SpriteCache {
    fn default() -> Self {
        Self {
            slots: vec![None; Body::ALL.len() + 1],
        }
    }
}

impl SpriteCache {
    fn upload(
        &mut self,
        ctx: &egui::Context,
        slot: usize,
        size: usize,
        rgba: &[u8],
    ) -> Option<egui::TextureId> {
        let image = egui::ColorImage::from_rgba_unmultiplied([size, size], rgba);
        let entry = self.slots.get_mut(slot)?;
        match entry {
            Some(handle) => handle.set(image, egui::TextureOptions::LINEAR),
            None => {
                *entry = Some(ctx.load_texture(
                    format!("sprite_{slot}"),
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        entry.as_ref().map(|h| h.id())
    }
}

fn slot_of(kind: DrawKind) -> usize {
    match kind {
        DrawKind::Sun => 0,
        DrawKind::Planet(body) => body.index() + 1,
    }
}

impl CosmicApp {
    pub fn draw_viewport(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let size = [rect.width(), rect.height()];

        // ── Camera input ─────────────────────────────────────────────────────
        let delta = response.drag_delta();
        let shift = ui.input(|i| i.modifiers.shift);
        if response.dragged_by(egui::PointerButton::Secondary)
            || (shift && response.dragged_by(egui::PointerButton::Primary))
        {
            self.camera.pan(delta.x, delta.y, rect.height());
        } else if response.dragged_by(egui::PointerButton::Primary) {
            self.camera.rotate(delta.x, delta.y, rect.height());
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll);
            }
        }

        // ── Picking ──────────────────────────────────────────────────────────
        self.hovered = response.hover_pos().and_then(|pos| {
            let local = pos - rect.min;
            self.scene
                .pick(&self.anim, &self.camera, size, local.x, local.y)
        });
        if self.hovered.is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                if let Some(body) =
                    self.scene
                        .pick(&self.anim, &self.camera, size, local.x, local.y)
                {
                    log::debug!("picked {body}");
                    self.sim.select(Some(body));
                    self.details_open = true;
                    self.audio.play_one_shot();
                }
            }
        }

        // ── Animation step ───────────────────────────────────────────────────
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32().min(0.1);
        self.last_frame_time = now;
        self.anim = advance(&self.anim, dt, self.sim.speed());
        let t = self.anim.elapsed;

        // ── Paint ────────────────────────────────────────────────────────────
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 6.0, SKY);
        let to_screen = |p: &Projected| rect.min + egui::vec2(p.x, p.y);

        let field = &self.scene.starfield;
        for star in &field.stars {
            if let Some(p) = self.camera.project(star.position, size) {
                let pos = to_screen(&p);
                if !rect.contains(pos) {
                    continue;
                }
                let alpha = (field.brightness_at(star, t) * 255.0) as u8;
                let radius = (star.size * p.px_per_unit * 0.3).clamp(0.4, 2.5);
                painter.circle_filled(
                    pos,
                    radius,
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
                );
            }
        }

        let selected = self.sim.selected();
        for body in Body::ALL {
            let alpha = if selected == Some(body) { 70 } else { 28 };
            let stroke =
                egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha));
            let mut run: Vec<egui::Pos2> = Vec::new();
            let path = self.scene.orbit_path(body, ORBIT_STEPS);
            for world in path.iter().chain(path.first()) {
                match self.camera.project(*world, size) {
                    Some(p) => run.push(to_screen(&p)),
                    None => flush_line(&painter, &mut run, stroke),
                }
            }
            flush_line(&painter, &mut run, stroke);
        }

        let (right, up, forward) = self.camera.basis();
        let light = &self.scene.point;
        let ambient = self.scene.ambient.intensity;
        let light_rgb = {
            let c = light.color.to_f32();
            [c[0], c[1], c[2]]
        };

        for item in self.scene.draw_list(&self.anim, &self.camera, size) {
            let centre = to_screen(&item.screen);
            let sprite_px = (item.radius_px * 2.0).ceil().clamp(4.0, MAX_SPRITE) as usize;

            let (surface, view) = match item.kind {
                DrawKind::Sun => {
                    for glow in self.scene.sun_glow(t) {
                        painter.circle_filled(
                            centre,
                            glow.radius * item.screen.px_per_unit,
                            color32(glow.color.with_alpha((glow.opacity * 255.0) as u8)),
                        );
                    }
                    let view = SphereView {
                        right,
                        up,
                        forward,
                        spin: 0.0,
                        light_dir: None,
                        light_color: light_rgb,
                        ambient,
                        light_intensity: light.intensity,
                    };
                    (Surface::Flat(self.scene.sun.color), view)
                }
                DrawKind::Planet(body) => {
                    let mesh = self.scene.planet(body);
                    let surface = match mesh.material {
                        Material::Textured(path) => self
                            .loader
                            .get(path)
                            .map(Surface::Texture)
                            .unwrap_or(Surface::Flat(mesh.fallback)),
                        Material::Flat(c) => Surface::Flat(c),
                    };
                    let view = SphereView {
                        right,
                        up,
                        forward,
                        spin: self.anim.spin_of(body),
                        light_dir: Some(normalize(sub(light.position, item.world))),
                        light_color: light_rgb,
                        ambient,
                        light_intensity: light.intensity,
                    };
                    (surface, view)
                }
            };

            let ring = match item.kind {
                DrawKind::Planet(body) => self.ring_meshes(body, item.screen.depth, rect, size),
                DrawKind::Sun => None,
            };
            if let Some((back, _)) = &ring {
                painter.add(egui::Shape::mesh(back.clone()));
            }

            let pixels = shade_sphere(&surface, &view, sprite_px);
            if let Some(id) = self.sprites.upload(ctx, slot_of(item.kind), sprite_px, &pixels) {
                painter.image(
                    id,
                    egui::Rect::from_center_size(centre, egui::Vec2::splat(item.radius_px * 2.0)),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            if let Some((_, front)) = ring {
                painter.add(egui::Shape::mesh(front));
            }
        }

        // ── Labels ───────────────────────────────────────────────────────────
        // The Sun sits at the origin, so its label offset is a world position.
        let font = egui::FontId::proportional(14.0);
        let sun = &self.scene.sun;
        if let Some(p) = self.camera.project(sun.label_offset, size) {
            painter.text(
                to_screen(&p),
                egui::Align2::CENTER_BOTTOM,
                sun.label,
                font.clone(),
                color32(sun.color),
            );
        }
        for body in Body::ALL {
            if !shows_label(body, selected, self.hovered) {
                continue;
            }
            let mesh = self.scene.planet(body);
            let anchor: Vec3 = add(
                self.scene.planet_position(body, &self.anim),
                [0.0, mesh.radius + 0.8, 0.0],
            );
            if let Some(p) = self.camera.project(anchor, size) {
                painter.text(
                    to_screen(&p),
                    egui::Align2::CENTER_BOTTOM,
                    body.name(),
                    font.clone(),
                    egui::Color32::WHITE,
                );
            }
        }

        if !self.loader.is_idle() {
            painter.text(
                rect.left_bottom() + egui::vec2(8.0, -8.0),
                egui::Align2::LEFT_BOTTOM,
                format!("Loading textures\u{2026} ({})", self.loader.pending_count()),
                egui::FontId::proportional(12.0),
                egui::Color32::GRAY,
            );
        }

        self.draw_details_window(ctx, rect);
    }

    /// Ring triangles split into the halves behind and in front of the
    /// planet centre at view depth `depth`.
    fn ring_meshes(
        &self,
        body: Body,
        depth: f32,
        rect: egui::Rect,
        size: [f32; 2],
    ) -> Option<(egui::epaint::Mesh, egui::epaint::Mesh)> {
        let ring = self.scene.planet(body).ring?;
        let bands: Vec<egui::Color32> = (0..RING_BANDS)
            .map(|b| {
                let u = (b as f32 + 0.5) / RING_BANDS as f32;
                match ring.material {
                    Material::Textured(path) => match self.loader.get(path) {
                        Some(img) => {
                            let [r, g, b, a] = img.sample(u, 0.5);
                            egui::Color32::from_rgba_unmultiplied(
                                (r * 255.0) as u8,
                                (g * 255.0) as u8,
                                (b * 255.0) as u8,
                                (a * 220.0) as u8,
                            )
                        }
                        None => color32(self.scene.planet(body).fallback.with_alpha(120)),
                    },
                    Material::Flat(c) => color32(c),
                }
            })
            .collect();

        let mut back = egui::epaint::Mesh::default();
        let mut front = egui::epaint::Mesh::default();
        let point = |t: f32, a: f32| {
            self.scene
                .ring_point(body, &self.anim, t, a)
                .and_then(|w| self.camera.project(w, size))
        };

        for (b, &colour) in bands.iter().enumerate() {
            let t0 = b as f32 / RING_BANDS as f32;
            let t1 = (b + 1) as f32 / RING_BANDS as f32;
            for k in 0..RING_SEGMENTS {
                let a0 = std::f32::consts::TAU * k as f32 / RING_SEGMENTS as f32;
                let a1 = std::f32::consts::TAU * (k + 1) as f32 / RING_SEGMENTS as f32;
                let (Some(p0), Some(p1), Some(p2), Some(p3)) =
                    (point(t0, a0), point(t1, a0), point(t1, a1), point(t0, a1))
                else {
                    continue;
                };
                let mid_depth = (p0.depth + p1.depth + p2.depth + p3.depth) * 0.25;
                let mesh = if mid_depth > depth { &mut back } else { &mut front };
                let base = mesh.vertices.len() as u32;
                for p in [p0, p1, p2, p3] {
                    mesh.colored_vertex(rect.min + egui::vec2(p.x, p.y), colour);
                }
                mesh.add_triangle(base, base + 1, base + 2);
                mesh.add_triangle(base, base + 2, base + 3);
            }
        }
        Some((back, front))
    }

    /// Collapsible "<Name> Details" card over the viewport.
    fn draw_details_window(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let Some(card) = InfoCard::for_selection(self.sim.selected()) else {
            return;
        };
        let mut open = self.details_open;
        egui::Window::new(card.heading())
            .id(egui::Id::new("planet_details"))
            .open(&mut open)
            .collapsible(true)
            .resizable(false)
            .default_width(280.0)
            .default_pos(rect.left_top() + egui::vec2(12.0, 12.0))
            .constrain_to(rect)
            .show(ctx, |ui| draw_info_card(ui, &card));
        if !open {
            // Closing the card clears the focus.
            self.sim.select(None);
            self.details_open = true;
        }
    }
}

fn flush_line(painter: &egui::Painter, run: &mut Vec<egui::Pos2>, stroke: egui::Stroke) {
    if run.len() >= 2 {
        painter.add(egui::Shape::line(std::mem::take(run), stroke));
    } else {
        run.clear();
    }
}
