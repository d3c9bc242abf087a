//! Starfield backdrops.
//!
//! [`Starfield`] is the 3-D shell of stars around the simulation scene.
//! [`SkyBackdrop`] is the flat, screen-space sky behind the 2-D pages, with
//! twinkling stars and periodic shooting stars. Both are generated from a
//! seeded ChaCha RNG so a given seed always yields the same sky.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::math::{scale, Vec3};

pub const DEFAULT_SEED: u64 = 0x5eed_0f_57a25;

/// One star in the 3-D shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Point size in pixels before distance fading.
    pub size: f32,
    /// Base brightness in [0, 1].
    pub brightness: f32,
    /// Twinkle phase offset in radians.
    pub phase: f32,
}

/// Generation parameters for the 3-D shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldParams {
    /// Inner radius of the shell.
    pub radius: f32,
    /// Thickness of the shell.
    pub depth: f32,
    pub count: usize,
    /// Size multiplier.
    pub factor: f32,
    /// Dim stars towards the outer edge of the shell.
    pub fade: bool,
    /// Twinkle speed in radians per second.
    pub speed: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            fade: true,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub params: StarfieldParams,
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(params: StarfieldParams, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut stars = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let dir = random_unit_vector(&mut rng);
            let shell = rng.gen::<f32>();
            let r = params.radius + shell * params.depth;
            let brightness = if params.fade {
                1.0 - 0.6 * shell
            } else {
                1.0
            };
            stars.push(Star {
                position: scale(dir, r),
                size: (0.5 + rng.gen::<f32>()) * params.factor * 0.25,
                brightness,
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            });
        }
        log::debug!("generated {} stars (seed {:#x})", stars.len(), seed);
        Self { params, stars }
    }

    /// Brightness of `star` at cosmetic time `t`.
    pub fn brightness_at(&self, star: &Star, t: f32) -> f32 {
        let wobble = 0.15 * (t * self.params.speed + star.phase).sin();
        (star.brightness + wobble).clamp(0.0, 1.0)
    }
}

fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    // Uniform on the sphere: z uniform in [-1, 1], longitude uniform.
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let lon: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    [r * lon.cos(), z, r * lon.sin()]
}

// ─── Screen-space sky ────────────────────────────────────────────────────────

/// A star on the flat backdrop; coordinates are fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyStar {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    pub opacity: f32,
    /// `(period_s, delay_s)` for stars that twinkle.
    pub twinkle: Option<(f32, f32)>,
}

impl SkyStar {
    /// Opacity at time `t`: twinkling stars swing between 0.2 and 1.0.
    pub fn opacity_at(&self, t: f32) -> f32 {
        match self.twinkle {
            None => self.opacity,
            Some((period, delay)) => {
                if t < delay {
                    return self.opacity;
                }
                let phase = ((t - delay) / period).fract();
                let tri = 1.0 - (2.0 * phase - 1.0).abs();
                0.2 + 0.8 * tri
            }
        }
    }
}

/// Cycle length of every shooting star, in seconds.
pub const SHOOTING_STAR_CYCLE: f32 = 5.0;
/// Distance travelled along the diagonal during one streak, in pixels.
pub const SHOOTING_STAR_TRAVEL: f32 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub delay: f32,
    /// Streak duration within each cycle.
    pub duration: f32,
}

impl ShootingStar {
    /// `(dx_px, dy_px, alpha)` offset from the start point at time `t`, or
    /// `None` while the streak is not visible.
    pub fn streak_at(&self, t: f32) -> Option<(f32, f32, f32)> {
        if t < self.delay {
            return None;
        }
        let local = (t - self.delay) % SHOOTING_STAR_CYCLE;
        if local > self.duration {
            return None;
        }
        let p = local / self.duration;
        let alpha = if p < 0.7 { 1.0 } else { (1.0 - p) / 0.3 };
        let d = p * SHOOTING_STAR_TRAVEL;
        Some((d, d, alpha))
    }
}

#[derive(Debug, Clone)]
pub struct SkyBackdrop {
    pub stars: Vec<SkyStar>,
    pub shooting: Vec<ShootingStar>,
}

impl SkyBackdrop {
    pub fn generate(star_count: usize, shooting_count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = (0..star_count)
            .map(|_| {
                let x = rng.gen::<f32>();
                let y = rng.gen::<f32>();
                let size = rng.gen::<f32>() * 2.5;
                let opacity = rng.gen::<f32>() * 0.7 + 0.3;
                let twinkle = if rng.gen::<f32>() > 0.5 {
                    Some((rng.gen::<f32>() * 3.0 + 2.0, rng.gen::<f32>() * 5.0))
                } else {
                    None
                };
                SkyStar { x, y, size, opacity, twinkle }
            })
            .collect();
        let shooting = (0..shooting_count)
            .map(|_| ShootingStar {
                x: rng.gen::<f32>(),
                y: rng.gen::<f32>() * 0.5,
                delay: rng.gen::<f32>() * 10.0,
                duration: rng.gen::<f32>() * 2.0 + 1.0,
            })
            .collect();
        Self { stars, shooting }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::math::length;

    #[test]
    fn shell_respects_radius_and_depth() {
        let params = StarfieldParams { count: 500, ..Default::default() };
        let field = Starfield::generate(params, 7);
        assert_eq!(field.stars.len(), 500);
        for s in &field.stars {
            let r = length(s.position);
            assert!(r >= 100.0 - 1e-2 && r <= 150.0 + 1e-2, "r = {r}");
            assert!(s.brightness > 0.0 && s.brightness <= 1.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::generate(StarfieldParams { count: 64, ..Default::default() }, 42);
        let b = Starfield::generate(StarfieldParams { count: 64, ..Default::default() }, 42);
        assert_eq!(a.stars, b.stars);
        let c = SkyBackdrop::generate(50, 5, 1);
        let d = SkyBackdrop::generate(50, 5, 1);
        assert_eq!(c.stars, d.stars);
        assert_eq!(c.shooting, d.shooting);
    }

    #[test]
    fn sky_star_ranges() {
        let sky = SkyBackdrop::generate(300, 5, 3);
        for s in &sky.stars {
            assert!((0.0..1.0).contains(&s.x));
            assert!(s.size < 2.5);
            assert!((0.3..=1.0).contains(&s.opacity));
            for t in [0.0, 1.3, 7.9] {
                let o = s.opacity_at(t);
                assert!((0.0..=1.0).contains(&o));
            }
        }
        for s in &sky.shooting {
            assert!(s.y < 0.5);
            assert!((1.0..=3.0).contains(&s.duration));
        }
    }

    #[test]
    fn shooting_star_hidden_before_delay_and_after_streak() {
        let s = ShootingStar { x: 0.5, y: 0.1, delay: 2.0, duration: 1.0 };
        assert!(s.streak_at(1.0).is_none());
        let (dx, dy, a) = s.streak_at(2.5).unwrap();
        assert_eq!(dx, dy);
        assert_eq!(a, 1.0);
        assert!(s.streak_at(4.0).is_none());
        assert!(s.streak_at(2.0 + SHOOTING_STAR_CYCLE + 0.2).is_some());
    }
}
