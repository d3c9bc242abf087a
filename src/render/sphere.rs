//! CPU sphere shading.
//!
//! Each frame every visible planet is shaded into a small square RGBA sprite:
//! the view-space normal of each pixel is rotated back into the planet's own
//! frame (undoing the spin), the equirectangular texture is sampled there,
//! and the point light at the Sun plus the ambient term light it. Rows are
//! shaded in parallel with rayon.

use rayon::prelude::*;

use crate::assets::ImageData;
use crate::color::Rgba;

use super::math::{add, dot, normalize, rotate_y, scale, Vec3};

/// What the sphere surface looks like.
#[derive(Debug, Clone, Copy)]
pub enum Surface<'a> {
    Texture(&'a ImageData),
    Flat(Rgba),
}

impl Surface<'_> {
    #[inline]
    fn sample(&self, u: f32, v: f32) -> [f32; 4] {
        match self {
            Surface::Texture(img) => img.sample(u, v),
            Surface::Flat(c) => c.to_f32(),
        }
    }
}

/// How the sphere is seen and lit.
#[derive(Debug, Clone, Copy)]
pub struct SphereView {
    /// Camera basis vectors in world space.
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    /// Spin about the planet's +Y axis.
    pub spin: f32,
    /// Unit direction from the surface towards the light; `None` = unlit.
    pub light_dir: Option<Vec3>,
    /// Light colour, normalized.
    pub light_color: [f32; 3],
    /// Ambient term added to every lit pixel.
    pub ambient: f32,
    /// Point light intensity; diffuse is scaled by half of it.
    pub light_intensity: f32,
}

/// Shade a `size`×`size` RGBA sprite. Pixels outside the disc are transparent.
pub fn shade_sphere(surface: &Surface<'_>, view: &SphereView, size: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; size * size * 4];
    if size == 0 {
        return pixels;
    }
    let inv = 2.0 / size as f32;
    let back = scale(view.forward, -1.0);

    pixels
        .par_chunks_mut(size * 4)
        .enumerate()
        .for_each(|(py, row)| {
            let ny = 1.0 - (py as f32 + 0.5) * inv;
            for px in 0..size {
                let nx = (px as f32 + 0.5) * inv - 1.0;
                let r2 = nx * nx + ny * ny;
                if r2 > 1.0 {
                    continue;
                }
                let nz = (1.0 - r2).sqrt();
                let world_n = normalize(add(
                    add(scale(view.right, nx), scale(view.up, ny)),
                    scale(back, nz),
                ));
                let local = rotate_y(world_n, -view.spin);
                let u = 0.5 + local[0].atan2(local[2]) * std::f32::consts::FRAC_1_PI * 0.5;
                let v = 0.5 - local[1].clamp(-1.0, 1.0).asin() * std::f32::consts::FRAC_1_PI;
                let base = surface.sample(u, v);

                let lit = match view.light_dir {
                    None => [1.0; 3],
                    Some(l) => {
                        let diffuse = dot(world_n, l).max(0.0) * view.light_intensity * 0.5;
                        [
                            view.ambient + diffuse * view.light_color[0],
                            view.ambient + diffuse * view.light_color[1],
                            view.ambient + diffuse * view.light_color[2],
                        ]
                    }
                };

                // Soft edge over the last pixel of the disc.
                let edge = ((1.0 - r2.sqrt()) * size as f32 * 0.5).clamp(0.0, 1.0);
                let c = Rgba::from_f32([
                    base[0] * lit[0],
                    base[1] * lit[1],
                    base[2] * lit[2],
                    base[3] * edge,
                ]);
                let o = px * 4;
                row[o..o + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        });

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_view(light: Option<Vec3>) -> SphereView {
        SphereView {
            right: [1.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            forward: [0.0, 0.0, -1.0],
            spin: 0.0,
            light_dir: light,
            light_color: [1.0, 1.0, 1.0],
            ambient: 0.3,
            light_intensity: 2.0,
        }
    }

    fn alpha(px: &[u8], size: usize, x: usize, y: usize) -> u8 {
        px[(y * size + x) * 4 + 3]
    }

    #[test]
    fn corners_are_transparent_centre_is_opaque() {
        let px = shade_sphere(&Surface::Flat(Rgba::WHITE), &front_view(None), 32);
        assert_eq!(px.len(), 32 * 32 * 4);
        assert_eq!(alpha(&px, 32, 0, 0), 0);
        assert_eq!(alpha(&px, 32, 31, 31), 0);
        assert_eq!(alpha(&px, 32, 16, 16), 255);
    }

    #[test]
    fn lit_side_is_brighter() {
        let px = shade_sphere(
            &Surface::Flat(Rgba::rgb(100, 100, 100)),
            &front_view(Some([1.0, 0.0, 0.0])),
            32,
        );
        let red = |x: usize| px[(16 * 32 + x) * 4];
        assert!(red(28) > red(3));
    }

    #[test]
    fn brighter_lights_brighten_the_sprite() {
        let surface = Surface::Flat(Rgba::rgb(100, 100, 100));
        let dim = front_view(Some([0.0, 0.0, 1.0]));
        let mut bright = dim;
        bright.ambient = 0.6;
        bright.light_intensity = 3.0;
        let centre = |px: &[u8]| px[(16 * 32 + 16) * 4];
        let a = shade_sphere(&surface, &dim, 32);
        let b = shade_sphere(&surface, &bright, 32);
        assert!(centre(&b) > centre(&a));

        // With the light behind, only the ambient term remains.
        let mut unlit = dim;
        unlit.light_dir = Some([0.0, 0.0, -1.0]);
        unlit.ambient = 0.0;
        assert_eq!(centre(&shade_sphere(&surface, &unlit, 32)), 0);
    }

    #[test]
    fn spin_changes_sampled_texture() {
        let mut rgba = Vec::new();
        for _y in 0..2 {
            for x in 0..4u8 {
                rgba.extend_from_slice(&[x * 60, 0, 0, 255]);
            }
        }
        let img = ImageData { width: 4, height: 2, rgba };
        let a = shade_sphere(&Surface::Texture(&img), &front_view(None), 16);
        let mut spun = front_view(None);
        spun.spin = std::f32::consts::FRAC_PI_2;
        let b = shade_sphere(&Surface::Texture(&img), &spun, 16);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(shade_sphere(&Surface::Flat(Rgba::WHITE), &front_view(None), 0).is_empty());
    }
}
