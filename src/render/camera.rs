//! Orbit-controls camera rig.
//!
//! The camera sits on a sphere around `target` and always looks at it.
//! Pointer drag rotates, shift/right drag pans, scroll dollies. Projection is
//! a plain pinhole model so the scene can be painted with 2-D primitives.

use super::math::{add, cross, dot, length, normalize, scale, sub, Vec3};

/// Initial eye position, looking at the origin.
pub const INITIAL_EYE: Vec3 = [0.0, 10.0, 25.0];

const ROTATE_SPEED: f32 = 0.5;
const PAN_SPEED: f32 = 0.5;
const ZOOM_SPEED: f32 = 0.5;
const MIN_DISTANCE: f32 = 3.0;
const MAX_DISTANCE: f32 = 150.0;
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera parameters for interactive 3-D navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal orbit angle in radians (0 = looking down -Z)
    pub azimuth: f32,
    /// Vertical orbit angle in radians (positive = above the orbital plane)
    pub elevation: f32,
    /// Distance from the eye to `target`
    pub distance: f32,
    /// Point the camera looks at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(INITIAL_EYE, [0.0; 3])
    }
}

impl OrbitCamera {
    /// Place the eye at `eye` looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let d = sub(eye, target);
        let distance = length(d).max(MIN_DISTANCE);
        let horizontal = (d[0] * d[0] + d[2] * d[2]).sqrt();
        Self {
            azimuth: d[0].atan2(d[2]),
            elevation: d[1].atan2(horizontal),
            distance,
            target,
            fov_y: 75f32.to_radians(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        add(
            self.target,
            scale([cos_el * sin_az, sin_el, cos_el * cos_az], self.distance),
        )
    }

    /// Orthonormal (right, up, forward) basis of the view.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = normalize(sub(self.target, self.eye()));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        (right, up, forward)
    }

    /// Drag rotation; `dx`, `dy` in screen pixels, `viewport_h` in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let k = std::f32::consts::TAU * ROTATE_SPEED / viewport_h.max(1.0);
        self.azimuth -= dx * k;
        self.elevation = (self.elevation + dy * k).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Translate the target in the view plane.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let (right, up, _) = self.basis();
        let world_per_px =
            2.0 * self.distance * (self.fov_y * 0.5).tan() / viewport_h.max(1.0) * PAN_SPEED;
        let offset = add(scale(right, -dx * world_per_px), scale(up, dy * world_per_px));
        self.target = add(self.target, offset);
    }

    /// Dolly in (positive `scroll`) or out.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = 0.95f32.powf(scroll * ZOOM_SPEED * 0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Focal length in pixels for a viewport of height `viewport_h`.
    pub fn focal_px(&self, viewport_h: f32) -> f32 {
        viewport_h * 0.5 / (self.fov_y * 0.5).tan()
    }

    /// Project a world point into a viewport of `size` pixels.
    ///
    /// Returns screen position (origin top-left) and view depth, or `None`
    /// for points behind the near plane.
    pub fn project(&self, p: Vec3, size: [f32; 2]) -> Option<Projected> {
        let (right, up, forward) = self.basis();
        let d = sub(p, self.eye());
        let z = dot(d, forward);
        if z < 0.1 {
            return None;
        }
        let f = self.focal_px(size[1]);
        Some(Projected {
            x: size[0] * 0.5 + dot(d, right) / z * f,
            y: size[1] * 0.5 - dot(d, up) / z * f,
            depth: z,
            px_per_unit: f / z,
        })
    }
}

/// A projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    /// Screen pixels per world unit at this depth.
    pub px_per_unit: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_eye_matches_initial_position() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        for i in 0..3 {
            assert_relative_eq!(eye[i], INITIAL_EYE[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn target_projects_to_centre() {
        let cam = OrbitCamera::default();
        let p = cam.project([0.0; 3], [800.0, 600.0]).unwrap();
        assert_relative_eq!(p.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(p.depth, cam.distance, epsilon = 1e-3);
    }

    #[test]
    fn points_behind_eye_are_culled() {
        let cam = OrbitCamera::default();
        assert!(cam.project([0.0, 20.0, 50.0], [800.0, 600.0]).is_none());
    }

    #[test]
    fn positive_x_lands_right_of_centre() {
        let cam = OrbitCamera::default();
        let p = cam.project([5.0, 0.0, 0.0], [800.0, 600.0]).unwrap();
        assert!(p.x > 400.0);
    }

    #[test]
    fn zoom_and_elevation_are_bounded() {
        let mut cam = OrbitCamera::default();
        for _ in 0..1000 {
            cam.zoom(100.0);
            cam.rotate(0.0, 500.0, 600.0);
        }
        assert_eq!(cam.distance, MIN_DISTANCE);
        assert!(cam.elevation <= MAX_ELEVATION);
        for _ in 0..1000 {
            cam.zoom(-100.0);
        }
        assert_eq!(cam.distance, MAX_DISTANCE);
    }

    #[test]
    fn pan_moves_target() {
        let mut cam = OrbitCamera::default();
        cam.pan(100.0, 0.0, 600.0);
        assert!(cam.target[0] < 0.0);
    }
}
