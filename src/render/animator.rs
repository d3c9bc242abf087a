//! Per-frame animator for the solar system scene.
//!
//! Two clocks drive the scene:
//! - Simulation motion: each frame adds a fixed increment `rate * speed` to
//!   every planet's spin and orbit angle. Wall-clock delta is ignored, so the
//!   apparent rate follows the display frame rate.
//! - Cosmetic time: seconds since start, used by glow pulsing and star
//!   twinkle. It keeps running while the simulation is paused.

use crate::bodies::{registry, Body};

const BODY_COUNT: usize = Body::ALL.len();

/// Orbit increment in radians per frame at 1x for a body at `radius`.
///
/// Inner planets lap outer ones; not Keplerian.
#[inline]
pub fn orbit_rate(radius: f32) -> f32 {
    if radius > 0.1 {
        0.03 / radius.sqrt()
    } else {
        0.03
    }
}

/// Sinusoidal cosmetic parameter: `base + amplitude * sin(t * frequency)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub base: f32,
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
}

impl Oscillator {
    pub const fn new(base: f32, amplitude: f32, frequency: f32) -> Self {
        Self { base, amplitude, frequency }
    }

    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.amplitude.mul_add((t * self.frequency).sin(), self.base)
    }
}

/// Animation state for the whole scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Spin angle per body, indexed by [`Body::index`].
    pub spin: [f32; BODY_COUNT],
    /// Orbit angle per body around the Sun.
    pub orbit: [f32; BODY_COUNT],
    /// Cosmetic clock in seconds.
    pub elapsed: f32,
    /// Frames advanced while playing.
    pub sim_frames: u64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            spin: [0.0; BODY_COUNT],
            orbit: [0.0; BODY_COUNT],
            elapsed: 0.0,
            sim_frames: 0,
        }
    }

    pub fn spin_of(&self, body: Body) -> f32 {
        self.spin[body.index()]
    }

    pub fn orbit_of(&self, body: Body) -> f32 {
        self.orbit[body.index()]
    }
}

/// Advance one frame.
///
/// `elapsed_delta` (seconds) only feeds the cosmetic clock; negative or
/// non-finite deltas are treated as zero. With `speed <= 0` the planets stay
/// exactly where they are.
pub fn advance(state: &AnimationState, elapsed_delta: f32, speed: f32) -> AnimationState {
    let mut next = state.clone();

    if elapsed_delta.is_finite() && elapsed_delta > 0.0 {
        next.elapsed += elapsed_delta;
    }

    if speed > 0.0 && speed.is_finite() {
        for rec in registry() {
            let i = rec.body.index();
            next.spin[i] = wrap_angle(next.spin[i] + rec.rotation_rate * speed);
            next.orbit[i] = wrap_angle(next.orbit[i] + orbit_rate(rec.orbit_radius()) * speed);
        }
        next.sim_frames += 1;
    }

    next
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(std::f32::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_frame_adds_rate_times_speed() {
        let s = advance(&AnimationState::new(), 1.0 / 60.0, 2.0);
        for rec in registry() {
            assert_relative_eq!(s.spin_of(rec.body), rec.rotation_rate * 2.0);
        }
        assert_eq!(s.sim_frames, 1);
    }

    #[test]
    fn increment_ignores_wall_clock_delta() {
        let a = advance(&AnimationState::new(), 0.001, 1.0);
        let b = advance(&AnimationState::new(), 0.5, 1.0);
        assert_eq!(a.spin, b.spin);
        assert_eq!(a.orbit, b.orbit);
        assert!(b.elapsed > a.elapsed);
    }

    #[test]
    fn paused_frames_freeze_motion_but_not_cosmetics() {
        let mut s = advance(&AnimationState::new(), 0.016, 1.0);
        let frozen_spin = s.spin;
        let frozen_orbit = s.orbit;
        let glow = Oscillator::new(0.4, 0.1, 2.0);
        let mut glow_values = Vec::new();
        for _ in 0..30 {
            s = advance(&s, 0.016, 0.0);
            glow_values.push(glow.at(s.elapsed));
        }
        assert_eq!(s.spin, frozen_spin);
        assert_eq!(s.orbit, frozen_orbit);
        assert_eq!(s.sim_frames, 1);
        assert!(glow_values.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn bad_deltas_do_not_move_the_clock() {
        let s = AnimationState::new();
        assert_eq!(advance(&s, -1.0, 1.0).elapsed, 0.0);
        assert_eq!(advance(&s, f32::NAN, 1.0).elapsed, 0.0);
        assert_eq!(advance(&s, 0.1, f32::INFINITY).spin, s.spin);
    }

    #[test]
    fn angles_stay_wrapped() {
        let mut s = AnimationState::new();
        for _ in 0..10_000 {
            s = advance(&s, 0.016, 3.0);
        }
        for a in s.spin.iter().chain(s.orbit.iter()) {
            assert!((0.0..std::f32::consts::TAU).contains(a));
        }
    }

    #[test]
    fn inner_planets_orbit_faster() {
        assert!(orbit_rate(4.0) > orbit_rate(32.0));
    }

    #[test]
    fn oscillator_bounds() {
        let o = Oscillator::new(1.0, 0.2, 3.0);
        for i in 0..100 {
            let v = o.at(i as f32 * 0.1);
            assert!((0.8 - 1e-6..=1.2 + 1e-6).contains(&v));
        }
    }
}
