//! Colour conversions.

use gloam_math::Vec3;

/// Luma of an RGB colour: `dot((0.2989, 0.587, 0.114), rgb)`.
#[inline]
pub fn grayscale(rgb: &Vec3) -> f64 {
    Vec3::new(0.2989, 0.587, 0.114).dot(rgb)
}

/// Map a unit normal from `[-1, 1]^3` to an RGB colour in `[0, 1]^3`.
#[inline]
pub fn normalmap(n: &Vec3) -> Vec3 {
    n * 0.5 + Vec3::repeat(0.5)
}

/// Split `0xRRGGBB` into `[0, 1]` channels.
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let r = (hex >> 16) & 0xff;
    let g = (hex >> 8) & 0xff;
    let b = hex & 0xff;
    Vec3::new(r as f64, g as f64, b as f64) / 255.0
}

/// Pack `[0, 1]` channels into `0xRRGGBB`, clamping out-of-range values.
pub fn rgb_to_hex(rgb: &Vec3) -> u32 {
    let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (q(rgb.x) << 16) | (q(rgb.y) << 8) | q(rgb.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grayscale_weights() {
        assert_relative_eq!(grayscale(&Vec3::new(1.0, 1.0, 1.0)), 0.9999, epsilon = 1e-12);
        assert_relative_eq!(grayscale(&Vec3::new(0.0, 1.0, 0.0)), 0.587);
    }

    #[test]
    fn test_normalmap_range() {
        assert_eq!(normalmap(&Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.5, 0.5, 1.0));
        assert_eq!(normalmap(&Vec3::new(-1.0, 0.0, 0.0)), Vec3::new(0.0, 0.5, 0.5));
    }

    #[test]
    fn test_hex_round_trip() {
        let c = hex_to_rgb(0xff8000);
        assert_relative_eq!(c, Vec3::new(1.0, 128.0 / 255.0, 0.0));
        assert_eq!(rgb_to_hex(&c), 0xff8000);
        assert_eq!(rgb_to_hex(&Vec3::new(2.0, -1.0, 0.0)), 0xff0000);
    }
}
