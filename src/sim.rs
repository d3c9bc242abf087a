//! Simulation playback state.
//!
//! Paused is encoded as `speed == 0.0`. While paused the last non-zero
//! speed is remembered so that resuming restores it.

use crate::bodies::Body;

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.25;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Playback phase derived from the speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback {
    Playing(f32),
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    speed: f32,
    resume_speed: f32,
    selected: Option<Body>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl SimulationState {
    /// Start playing at `speed`, clamped to the allowed range.
    pub fn new(speed: f32) -> Self {
        let speed = clamp_speed(speed);
        Self {
            speed,
            resume_speed: speed,
            selected: None,
        }
    }

    /// Current multiplier; `0.0` while paused.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed that `toggle_play` will resume at.
    pub fn resume_speed(&self) -> f32 {
        self.resume_speed
    }

    pub fn playback(&self) -> Playback {
        if self.speed > 0.0 {
            Playback::Playing(self.speed)
        } else {
            Playback::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.speed > 0.0
    }

    pub fn selected(&self) -> Option<Body> {
        self.selected
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.resume_speed = self.speed;
            self.speed = 0.0;
            log::debug!("simulation paused (resume at {:.2}x)", self.resume_speed);
        } else {
            self.speed = if self.resume_speed > 0.0 {
                self.resume_speed
            } else {
                DEFAULT_SPEED
            };
            log::debug!("simulation resumed at {:.2}x", self.speed);
        }
    }

    /// Step up by [`SPEED_STEP`]. From paused this resumes one step above
    /// the remembered speed.
    pub fn increase_speed(&mut self) {
        let from = if self.is_playing() { self.speed } else { self.resume_speed };
        let next = clamp_speed(from + SPEED_STEP);
        self.speed = next;
        self.resume_speed = next;
    }

    /// Step down by [`SPEED_STEP`], never below [`MIN_SPEED`].
    ///
    /// While paused only the resume speed moves.
    pub fn decrease_speed(&mut self) {
        if self.is_playing() {
            self.speed = clamp_speed(self.speed - SPEED_STEP);
            self.resume_speed = self.speed;
        } else {
            self.resume_speed = clamp_speed(self.resume_speed - SPEED_STEP);
        }
    }

    /// Slider input. Non-positive values pause; everything else is clamped.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }
        if speed <= 0.0 {
            if self.is_playing() {
                self.resume_speed = self.speed;
            }
            self.speed = 0.0;
        } else {
            self.speed = clamp_speed(speed);
            self.resume_speed = self.speed;
        }
    }

    /// Focus a planet, or clear the focus with `None`.
    pub fn select(&mut self, body: Option<Body>) {
        if self.selected != body {
            log::debug!("selected planet: {:?}", body);
        }
        self.selected = body;
    }

    /// Select by display name; unknown names clear the selection.
    pub fn select_by_name(&mut self, name: Option<&str>) {
        self.select(name.and_then(Body::from_name));
    }
}

/// Clamp to `[MIN_SPEED, MAX_SPEED]`, snapping to the nearest step.
pub fn clamp_speed(speed: f32) -> f32 {
    let snapped = (speed / SPEED_STEP).round() * SPEED_STEP;
    snapped.clamp(MIN_SPEED, MAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_increase_never_exceeds_max() {
        let mut s = SimulationState::default();
        for _ in 0..50 {
            s.increase_speed();
            assert!(s.speed() <= MAX_SPEED);
            assert!(s.speed() >= MIN_SPEED);
        }
        assert_eq!(s.speed(), MAX_SPEED);
    }

    #[test]
    fn repeated_decrease_never_goes_below_min() {
        let mut s = SimulationState::new(2.0);
        for _ in 0..50 {
            s.decrease_speed();
            assert!(s.speed() >= MIN_SPEED);
        }
        assert_eq!(s.speed(), MIN_SPEED);
        assert!(s.is_playing());
    }

    #[test]
    fn toggle_twice_restores_speed() {
        for start in [0.25, 1.0, 1.75, 3.0] {
            let mut s = SimulationState::new(start);
            s.toggle_play();
            assert_eq!(s.playback(), Playback::Paused);
            assert_eq!(s.speed(), 0.0);
            s.toggle_play();
            assert_eq!(s.playback(), Playback::Playing(start));
        }
    }

    #[test]
    fn increase_from_paused_resumes() {
        let mut s = SimulationState::new(2.0);
        s.toggle_play();
        s.increase_speed();
        assert_eq!(s.playback(), Playback::Playing(2.25));
        assert_eq!(s.resume_speed(), 2.25);
    }

    #[test]
    fn decrease_then_increase_while_paused_returns_to_start() {
        let mut s = SimulationState::new(2.0);
        s.toggle_play();
        s.decrease_speed();
        assert_eq!(s.resume_speed(), 1.75);
        s.increase_speed();
        assert_eq!(s.playback(), Playback::Playing(2.0));
    }

    #[test]
    fn increase_while_paused_at_max_stays_at_max() {
        let mut s = SimulationState::new(MAX_SPEED);
        s.toggle_play();
        s.increase_speed();
        assert_eq!(s.playback(), Playback::Playing(MAX_SPEED));
    }

    #[test]
    fn decrease_while_paused_stays_paused() {
        let mut s = SimulationState::new(2.0);
        s.toggle_play();
        s.decrease_speed();
        assert_eq!(s.playback(), Playback::Paused);
        s.toggle_play();
        assert_eq!(s.speed(), 1.75);
    }

    #[test]
    fn slider_to_zero_pauses_and_remembers() {
        let mut s = SimulationState::new(1.5);
        s.set_speed(0.0);
        assert!(!s.is_playing());
        assert_eq!(s.resume_speed(), 1.5);
        s.set_speed(10.0);
        assert_eq!(s.speed(), MAX_SPEED);
        s.set_speed(f32::NAN);
        assert_eq!(s.speed(), MAX_SPEED);
    }

    #[test]
    fn clamp_snaps_to_steps() {
        assert_eq!(clamp_speed(1.1), 1.0);
        assert_eq!(clamp_speed(1.13), 1.25);
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(99.0), MAX_SPEED);
    }

    #[test]
    fn select_then_clear_for_every_body() {
        let mut s = SimulationState::default();
        for body in Body::ALL {
            s.select_by_name(Some(body.name()));
            assert_eq!(s.selected(), Some(body));
            s.select_by_name(None);
            assert_eq!(s.selected(), None);
        }
        s.select_by_name(Some("Vulcan"));
        assert_eq!(s.selected(), None);
    }
}
