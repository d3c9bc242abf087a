//! Small `[f32; 3]` vector helpers shared by the camera and scene.

pub type Vec3 = [f32; 3];

#[inline(always)]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline(always)]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline(always)]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline(always)]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0].mul_add(b[0], a[1].mul_add(b[1], a[2] * b[2]))
}

#[inline(always)]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline(always)]
pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`; zero stays zero.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len > 1e-6 {
        scale(a, 1.0 / len)
    } else {
        [0.0; 3]
    }
}

/// Rotate `p` about the +Y axis by `angle` radians (counter-clockwise seen from above).
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [p[0] * c + p[2] * s, p[1], -p[0] * s + p[2] * c]
}

/// Rotate `p` about the +X axis by `angle` radians.
#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [p[0], p[1] * c - p[2] * s, p[1] * s + p[2] * c]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_y([1.0, 2.0, 0.0], std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(p[1], 2.0);
        assert_relative_eq!(p[2], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_x_tilts_the_xz_plane() {
        let p = rotate_x([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(p[1], -1.0, epsilon = 1e-6);
        assert_relative_eq!(p[2], 0.0, epsilon = 1e-6);
        assert_relative_eq!(length(rotate_x([1.0, 2.0, 3.0], 0.7)), length([1.0, 2.0, 3.0]));
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        assert_relative_eq!(length(normalize([3.0, 4.0, 0.0])), 1.0);
    }
}
