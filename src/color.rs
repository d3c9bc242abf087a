//! Colours for the scene.
//!
//! Bodies whose texture cannot be loaded are painted with a flat colour
//! derived from their name, so the same planet always gets the same hue.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to normalized f32 (for shading)
    #[inline(always)]
    pub fn to_f32(self) -> [f32; 4] {
        const INV_255: f32 = 1.0 / 255.0;
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
            self.a as f32 * INV_255,
        ]
    }

    /// Build from normalized channels, clamping each to [0, 1].
    #[inline]
    pub fn from_f32(c: [f32; 4]) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        Self { r: q(c[0]), g: q(c[1]), b: q(c[2]), a: q(c[3]) }
    }

    /// Same colour with alpha replaced.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Deterministic fallback colour for a named body.
    ///
    /// FNV-1a of the name picks the hue; saturation and value are fixed so
    /// every fallback reads as a planet rather than a warning swatch.
    pub fn from_name(name: &str) -> Self {
        let hue = (fnv1a(name.as_bytes()) % 360) as f32;
        hsv_to_rgb(hue, 0.55, 0.85)
    }
}

/// 32-bit FNV-1a hash.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    let mut h: u32 = 0x811c_9dc5;
    for &b in bytes {
        h ^= b as u32;
        h = h.wrapping_mul(0x0100_0193);
    }
    h
}

/// HSV → RGB with `h` in degrees, `s` and `v` in [0, 1].
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgba {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgba::from_f32([r + m, g + m, b + m, 1.0])
}

/// Sun yellow, `#FDB813`.
pub const SUN_YELLOW: Rgba = Rgba::rgb(0xFD, 0xB8, 0x13);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_colour_is_deterministic() {
        assert_eq!(Rgba::from_name("Neptune"), Rgba::from_name("Neptune"));
        assert_eq!(Rgba::from_name("Neptune").a, 255);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgba::rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgba::rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgba::rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Rgba::WHITE);
    }

    #[test]
    fn f32_round_trip_is_close() {
        let f = Rgba::rgb(255, 128, 0).to_f32();
        assert!((f[0] - 1.0).abs() < 0.01);
        assert!((f[1] - 0.502).abs() < 0.01);
        assert_eq!(Rgba::from_f32([2.0, -1.0, 0.0, 1.0]), Rgba::rgb(255, 0, 0));
    }
}
