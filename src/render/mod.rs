//! 3-D scene description, camera and per-frame animation. Everything here is
//! independent of egui; the binary paints the results.

pub mod animator;
pub mod camera;
pub mod math;
pub mod scene;
pub mod sphere;
pub mod starfield;
