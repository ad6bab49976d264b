//! Anti-aliased line and arrow painting into scalar fields.

use gloam_field::Field;
use gloam_math::{PI, Vec2, cross2, inv_length, na, smoothstep};

/// Distance from `p` to the segment `u -> v`.
///
/// Past either end point this is the distance to that end point. Between
/// them it is the perpendicular distance, signed by the 2D cross product
/// `(p - u) x (v - u)`.
pub fn sd_line(u: &Vec2, v: &Vec2, p: &Vec2) -> f64 {
    let pu = p - u;
    let vp = v - p;
    let vu = v - u;
    if pu.dot(&vu) < 0.0 {
        pu.norm()
    } else if vp.dot(&vu) < 0.0 {
        vp.norm()
    } else {
        cross2(&pu, &vu) * inv_length(&vu)
    }
}

/// Stroke parameters for [`paint_arrow`], in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Value written at full coverage.
    pub color: f64,
    pub width: f64,
    /// Upper bound on head length.
    pub max_size: f64,
    /// Head length as a fraction of the shaft length, before `max_size`.
    pub min_scale: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: 1.0,
            width: 3.0,
            max_size: 12.0,
            min_scale: 0.4,
        }
    }
}

/// Paint an arrow from `orig` along `dir`, both in uv units.
///
/// Only the bounding box of the arrow is visited. Each pixel keeps the
/// maximum of its current value and the arrow's coverage times
/// `style.color`.
pub fn paint_arrow(img: &mut Field<f64>, orig: &Vec2, dir: &Vec2, style: &ArrowStyle) {
    let res = Vec2::new(img.width() as f64, img.height() as f64);
    let i = orig.component_mul(&res);
    let d = dir.component_mul(&res);
    let j = i + d;
    let dl = d.norm();
    let s = style.max_size.min(dl * style.min_scale);
    let ds = d / (dl + 1e-4) * s;
    let sw = s + style.width;
    let d1 = na::Rotation2::new(PI * 3.0 / 4.0) * ds;
    let d2 = na::Rotation2::new(-PI * 3.0 / 4.0) * ds;
    let (j1, j2) = (j + d1, j + d2);

    let lo = i.inf(&j).add_scalar(-sw).sup(&Vec2::zeros()).map(f64::floor);
    let hi = i.sup(&j).add_scalar(sw).inf(&(res - Vec2::repeat(1.0))).map(f64::ceil);
    if lo.x >= hi.x || lo.y >= hi.y {
        return;
    }

    let (w, half) = (style.width, style.width / 2.0);
    for y in lo.y as usize..hi.y as usize {
        for x in lo.x as usize..hi.x as usize {
            let p = Vec2::new(x as f64, y as f64);
            let c0 = smoothstep(sd_line(&i, &j, &p).abs(), w, half);
            let c1 = smoothstep(sd_line(&j, &j1, &p).abs(), w, half);
            let c2 = smoothstep(sd_line(&j, &j2, &p).abs(), w, half);
            let cover = c0.max(c1).max(c2) * style.color;
            let cell = &mut img[[x, y]];
            *cell = cell.max(cover);
        }
    }
}
