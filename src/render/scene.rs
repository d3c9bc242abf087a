//! Solar system scene graph.
//!
//! Built once from the registry: lights, the Sun with its glow shells, one
//! mesh per planet (plus rings), and the starfield. Per frame the scene is
//! combined with an [`AnimationState`] and an [`OrbitCamera`] into a depth
//! sorted draw list and used for click picking.

use crate::assets::TextureLoader;
use crate::bodies::{registry, Body, Ring};
use crate::color::{Rgba, SUN_YELLOW};

use super::animator::{AnimationState, Oscillator};
use super::camera::{OrbitCamera, Projected};
use super::math::{add, rotate_x, rotate_y, Vec3};
use super::starfield::{Starfield, StarfieldParams};

/// Minimum clickable radius on screen, in pixels.
const MIN_PICK_RADIUS: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: Rgba,
}

/// Translucent shell around the Sun whose size and opacity pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowShell {
    /// Radius multiplier relative to the Sun.
    pub scale: Oscillator,
    pub opacity: Oscillator,
    pub color: Rgba,
}

/// Evaluated glow shell for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSample {
    pub radius: f32,
    pub opacity: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunMesh {
    pub radius: f32,
    pub color: Rgba,
    pub label: &'static str,
    /// Label anchor relative to the Sun's centre.
    pub label_offset: Vec3,
    pub shells: Vec<GlowShell>,
}

/// Surface material of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Texture path relative to the asset root.
    Textured(&'static str),
    Flat(Rgba),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMesh {
    pub ring: Ring,
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetMesh {
    pub body: Body,
    pub radius: f32,
    pub rest_position: Vec3,
    pub material: Material,
    /// Colour used while the texture is loading or after it failed.
    pub fallback: Rgba,
    pub ring: Option<RingMesh>,
}

/// Something to paint this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawKind {
    Sun,
    Planet(Body),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub kind: DrawKind,
    pub world: Vec3,
    pub screen: Projected,
    /// Radius on screen in pixels.
    pub radius_px: f32,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub ambient: AmbientLight,
    pub point: PointLight,
    pub sun: SunMesh,
    pub planets: Vec<PlanetMesh>,
    pub starfield: Starfield,
}

impl Scene {
    pub fn build(stars: StarfieldParams, seed: u64) -> Self {
        let planets = registry()
            .iter()
            .map(|rec| PlanetMesh {
                body: rec.body,
                radius: rec.radius,
                rest_position: rec.position,
                material: Material::Textured(rec.texture),
                fallback: Rgba::from_name(rec.name),
                ring: rec.ring.map(|ring| RingMesh {
                    ring,
                    material: Material::Textured(ring.texture),
                }),
            })
            .collect();

        Self {
            ambient: AmbientLight { intensity: 0.3 },
            point: PointLight {
                position: [0.0; 3],
                intensity: 2.0,
                color: SUN_YELLOW,
            },
            sun: SunMesh {
                radius: 2.5,
                color: SUN_YELLOW,
                label: "The Sun",
                label_offset: [0.0, 3.0, 0.0],
                shells: vec![
                    GlowShell {
                        scale: Oscillator::new(1.2, 0.05, 1.5),
                        opacity: Oscillator::new(0.35, 0.1, 2.0),
                        color: Rgba::rgb(0xFF, 0xA5, 0x00),
                    },
                    GlowShell {
                        scale: Oscillator::new(1.5, 0.08, 0.8),
                        opacity: Oscillator::new(0.15, 0.05, 1.2),
                        color: Rgba::rgb(0xFF, 0x8C, 0x00),
                    },
                ],
            },
            planets,
            starfield: Starfield::generate(stars, seed),
        }
    }

    /// Every texture path the scene would like loaded.
    pub fn texture_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.planets.iter().flat_map(|p| {
            let ring = p.ring.and_then(|r| match r.material {
                Material::Textured(path) => Some(path),
                Material::Flat(_) => None,
            });
            let surface = match p.material {
                Material::Textured(path) => Some(path),
                Material::Flat(_) => None,
            };
            surface.into_iter().chain(ring)
        })
    }

    /// Swap materials whose texture failed to load for flat colours.
    ///
    /// Returns how many materials changed.
    pub fn resolve_materials(&mut self, loader: &TextureLoader) -> usize {
        let mut changed = 0;
        for p in &mut self.planets {
            if let Material::Textured(path) = p.material {
                if loader.has_failed(path) {
                    log::warn!("{}: texture {path} missing, painting flat colour", p.body);
                    p.material = Material::Flat(p.fallback);
                    changed += 1;
                }
            }
            if let Some(ring) = &mut p.ring {
                if let Material::Textured(path) = ring.material {
                    if loader.has_failed(path) {
                        log::warn!("{}: ring texture {path} missing", p.body);
                        ring.material = Material::Flat(p.fallback.with_alpha(160));
                        changed += 1;
                    }
                }
            }
        }
        changed
    }

    pub fn planet(&self, body: Body) -> &PlanetMesh {
        &self.planets[body.index()]
    }

    /// World position of `body` after orbital revolution.
    pub fn planet_position(&self, body: Body, anim: &AnimationState) -> Vec3 {
        rotate_y(self.planet(body).rest_position, anim.orbit_of(body))
    }

    /// `steps` points along the orbit of `body`, for drawing its path.
    pub fn orbit_path(&self, body: Body, steps: usize) -> Vec<Vec3> {
        let rest = self.planet(body).rest_position;
        (0..steps)
            .map(|i| rotate_y(rest, std::f32::consts::TAU * i as f32 / steps as f32))
            .collect()
    }

    /// Point on the ring of `body`; `t` runs from the inner edge (0) to the
    /// outer edge (1) and `angle` goes around the planet. `None` without a ring.
    pub fn ring_point(&self, body: Body, anim: &AnimationState, t: f32, angle: f32) -> Option<Vec3> {
        let planet = self.planet(body);
        let ring = planet.ring?.ring;
        let r = planet.radius * (ring.inner + (ring.outer - ring.inner) * t);
        let (s, c) = angle.sin_cos();
        let local = rotate_x([r * c, 0.0, r * s], ring.tilt);
        Some(add(self.planet_position(body, anim), local))
    }

    /// Glow shells evaluated at cosmetic time `t`.
    pub fn sun_glow(&self, t: f32) -> Vec<GlowSample> {
        self.sun
            .shells
            .iter()
            .map(|s| GlowSample {
                radius: self.sun.radius * s.scale.at(t),
                opacity: s.opacity.at(t).clamp(0.0, 1.0),
                color: s.color,
            })
            .collect()
    }

    /// Project the Sun and planets, sorted far to near.
    pub fn draw_list(
        &self,
        anim: &AnimationState,
        camera: &OrbitCamera,
        size: [f32; 2],
    ) -> Vec<DrawItem> {
        let sun = std::iter::once((DrawKind::Sun, [0.0; 3], self.sun.radius));
        let planets = self.planets.iter().map(|p| {
            (
                DrawKind::Planet(p.body),
                self.planet_position(p.body, anim),
                p.radius,
            )
        });

        let mut items: Vec<DrawItem> = sun
            .chain(planets)
            .filter_map(|(kind, world, radius)| {
                camera.project(world, size).map(|screen| DrawItem {
                    kind,
                    world,
                    screen,
                    radius_px: radius * screen.px_per_unit,
                })
            })
            .collect();
        items.sort_by(|a, b| b.screen.depth.total_cmp(&a.screen.depth));
        items
    }

    /// Planet under the pointer at `(x, y)`, nearest first. Clicking the Sun
    /// or empty space yields `None`.
    pub fn pick(
        &self,
        anim: &AnimationState,
        camera: &OrbitCamera,
        size: [f32; 2],
        x: f32,
        y: f32,
    ) -> Option<Body> {
        self.draw_list(anim, camera, size)
            .into_iter()
            .rev()
            .find(|item| {
                let dx = item.screen.x - x;
                let dy = item.screen.y - y;
                let r = item.radius_px.max(MIN_PICK_RADIUS);
                dx * dx + dy * dy <= r * r
            })
            .and_then(|item| match item.kind {
                DrawKind::Planet(body) => Some(body),
                DrawKind::Sun => None,
            })
    }
}

/// Whether a planet's name label is shown.
pub fn shows_label(body: Body, selected: Option<Body>, hovered: Option<Body>) -> bool {
    selected == Some(body) || hovered == Some(body)
}
