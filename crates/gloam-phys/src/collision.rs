//! Collision response.

use gloam_math::na;

type SVec<const D: usize> = na::SVector<f64, D>;

/// Velocities of two bodies after they bounce.
///
/// `disp` is the collision normal, usually `pos1 - pos2` normalised. The
/// normal components are exchanged as in an elastic collision of masses
/// `m1` and `m2`; `gamma` in `[0, 1]` scales the normal before the exchange
/// is written back, so `gamma = 1` conserves energy and smaller values lose
/// some.
pub fn momentum_exchange<const D: usize>(
    v1: &SVec<D>,
    v2: &SVec<D>,
    disp: &SVec<D>,
    m1: f64,
    m2: f64,
    gamma: f64,
) -> (SVec<D>, SVec<D>) {
    let sm1 = m1.sqrt();
    let sm2 = m2.sqrt();
    let itsm = 1.0 / (m1 + m2).sqrt();

    // mass-weighted normal speeds, reflected about (sm2, -sm1) / |m|
    let mut k1 = v1.dot(disp) * sm1;
    let mut k2 = v2.dot(disp) * sm2;
    let smd1 = sm2 * itsm;
    let smd2 = -sm1 * itsm;
    let kos = 2.0 * (k1 * smd1 + k2 * smd2);
    k1 -= kos * smd1;
    k2 -= kos * smd2;
    let vel1 = k1 / sm1;
    let vel2 = k2 / sm2;

    let n = disp * gamma;
    let out1 = v1 - n * v1.dot(&n) + n * vel1;
    let out2 = v2 - n * v2.dot(&n) + n * vel2;
    (out1, out2)
}

/// Keep a point inside the box `[min, max]^D`.
///
/// Each velocity component that points out of the box while the
/// position is already past that face is reversed and scaled by `gamma`.
pub fn bound_reflect<const D: usize>(
    pos: &SVec<D>,
    vel: &SVec<D>,
    min: f64,
    max: f64,
    gamma: f64,
) -> SVec<D> {
    vel.zip_map(pos, |v, p| {
        if (p < min && v < 0.0) || (p > max && v > 0.0) {
            -gamma * v
        } else {
            v
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gloam_math::Vec2;

    #[test]
    fn test_equal_masses_swap_normal_velocity() {
        let (a, b) = momentum_exchange(
            &Vec2::new(1.0, 0.5),
            &Vec2::new(-1.0, 0.0),
            &Vec2::new(1.0, 0.0),
            1.0,
            1.0,
            1.0,
        );
        assert_relative_eq!(a, Vec2::new(-1.0, 0.5), epsilon = 1e-12);
        assert_relative_eq!(b, Vec2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_heavy_body_barely_moves() {
        let (a, b) = momentum_exchange(
            &Vec2::new(1.0, 0.0),
            &Vec2::zeros(),
            &Vec2::new(1.0, 0.0),
            1.0,
            1e6,
            1.0,
        );
        assert_relative_eq!(a.x, -1.0, epsilon = 1e-5);
        assert!(b.x.abs() < 1e-5);
    }

    #[test]
    fn test_bound_reflect() {
        let pos = Vec2::new(-0.1, 0.5);
        let vel = Vec2::new(-2.0, -1.0);
        assert_eq!(bound_reflect(&pos, &vel, 0.0, 1.0, 0.8), Vec2::new(1.6, -1.0));

        // already heading back in: untouched
        let vel = Vec2::new(2.0, 3.0);
        assert_eq!(bound_reflect(&pos, &vel, 0.0, 1.0, 0.8), vel);

        let pos = Vec2::new(0.5, 1.2);
        assert_eq!(bound_reflect(&pos, &vel, 0.0, 1.0, 0.5), Vec2::new(2.0, -1.5));
    }
}
