//! Procedural test images over uv coordinates in `[0, 1]^2`.

use gloam_math::{Vec2, fract};

/// `I / shape`: the uv coordinate of cell `I`.
#[inline]
pub fn view(shape: [usize; 2], index: [usize; 2]) -> Vec2 {
    Vec2::new(
        index[0] as f64 / shape[0] as f64,
        index[1] as f64 / shape[1] as f64,
    )
}

/// Checkerboard with `n` squares per side: `0.0` or `1.0`.
pub fn image_chess(uv: &Vec2, n: u32) -> f64 {
    let n = n as f64;
    let k = (uv.x * n).floor() as i64 + (uv.y * n).floor() as i64;
    k.rem_euclid(2) as f64
}

/// Grid lines: `1.0` where either `fract(uv * n)` is below `tol`.
pub fn image_grid(uv: &Vec2, n: u32, tol: f64) -> f64 {
    let n = n as f64;
    if fract(uv.x * n) < tol || fract(uv.y * n) < tol {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn inside(p: &Vec2, c: Vec2, r: f64) -> bool {
    (p - c).norm_squared() <= r * r
}

/// Taijitu (yin-yang) emblem in the unit square: `true` on the light half.
///
/// Tests run in priority order: outside the disk is dark, the ring is
/// light, then the two dots, the two lobes, and finally the left/right
/// halves.
pub fn inside_taijitu(p: &Vec2) -> bool {
    let centre = Vec2::new(0.5, 0.5);
    let p = centre + (p - centre) * 1.11;
    let low = Vec2::new(0.5, 0.25);
    let high = Vec2::new(0.5, 0.75);

    if !inside(&p, centre, 0.55) {
        return false;
    }
    if !inside(&p, centre, 0.50) {
        return true;
    }
    if inside(&p, low, 0.09) {
        return true;
    }
    if inside(&p, high, 0.09) {
        return false;
    }
    if inside(&p, low, 0.25) {
        return false;
    }
    if inside(&p, high, 0.25) {
        return true;
    }
    p.x < 0.5
}
