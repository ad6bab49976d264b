//! Integration tests across the gloam crates.

use approx::assert_relative_eq;
use gloam::prelude::*;
use gloam::{
    anim::AnimError,
    field::ComplexField,
    math::{Component, MathError},
};

fn norm2(v: &Field<Vec2>) -> f64 {
    v.as_slice().iter().map(|x| x.norm_squared()).sum()
}

/// `∇(cos πx cos πy)` at cell centres of an `n x n` unit square.
fn potential_flow(n: usize) -> Field<Vec2> {
    let dx = 1.0 / n as f64;
    Field::from_fn([n, n], |[i, j]| {
        let (x, y) = ((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dx);
        Vec2::new(
            -PI * (PI * x).sin() * (PI * y).cos(),
            -PI * (PI * x).cos() * (PI * y).sin(),
        )
    })
    .unwrap()
}

#[test]
fn test_projection_removes_gradient_flow() {
    let n = 16;
    let mut vel = potential_flow(n);
    let before = norm2(&vel);

    let mut solver = PressureSolver::new([n, n], 1.0 / n as f64).unwrap();
    let relaxation = Relaxation {
        jacobi: 0,
        gauss_seidel: 400,
    };
    solver.project(&mut vel, relaxation).unwrap();

    assert!(norm2(&vel) < 0.5 * before);
    assert!(solver.pressure().max_abs() > 0.0);
}

#[test]
fn test_projection_rejects_mismatched_grid() {
    let mut solver = PressureSolver::new([8, 8], 0.125).unwrap();
    let mut vel = Field::<Vec2>::new([8, 4]).unwrap();
    let err = solver.project(&mut vel, Relaxation::default()).unwrap_err();
    let err: gloam::Error = err.into();
    assert!(matches!(err, gloam::Error::Fluid(_)));
}

struct Stir {
    dye: Maccormack<f64>,
    step: AdvectionStep,
}

impl Animation for Stir {
    fn on_advance(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        let swirl = |p: &Vec2| Vec2::new(8.0 - p.y, p.x - 8.0);
        self.dye.advance(&swirl, self.step);
        self.dye.update();
        Ok(())
    }

    fn image(&self) -> Option<ImageRef<'_>> {
        Some(self.dye.current().into())
    }
}

#[test]
fn test_animation_drives_maccormack_on_constant_dye() {
    let mut anim = Stir {
        dye: Maccormack::make(|| Field::filled([16, 16], 0.75)).unwrap(),
        step: AdvectionStep::new(0.05, 1.0),
    };
    let mut surface = HeadlessSurface::new();
    let config = AnimationConfig::default().with_max_frames(10);

    assert_eq!(run(&mut anim, &mut surface, &config).unwrap(), 10);
    for &x in anim.dye.current().as_slice() {
        assert_relative_eq!(x, 0.75, epsilon = 1e-9);
    }
    let shown = surface.last_frame().unwrap();
    assert_eq!(shown.image.as_ref().map(|i| i.shape()), Some([16, 16]));
}

struct Bouncing {
    pos: Vec<Vec2>,
    vel: Vec<Vec2>,
}

impl Animation for Bouncing {
    fn on_start(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        let mut rng = Rand::new(7);
        self.pos = (0..512).map(|_| rng.rand_nd::<2>()).collect();
        self.vel = (0..512).map(|_| rng.rand_solid_2d()).collect();
        Ok(())
    }

    fn on_advance(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        let dt = 0.01;
        for (p, v) in self.pos.iter_mut().zip(&mut self.vel) {
            *v += Vec2::new(0.0, -1.0) * dt;
            *v = bound_reflect(&*p, &*v, 0.0, 1.0, 0.8);
            *p += *v * dt;
        }
        Ok(())
    }

    fn circles(&self) -> Option<&[Vec2]> {
        Some(self.pos.as_slice())
    }
}

#[test]
fn test_particles_stay_in_the_box() {
    let mut anim = Bouncing {
        pos: Vec::new(),
        vel: Vec::new(),
    };
    let mut surface = HeadlessSurface::new();
    let config = AnimationConfig::default().with_max_frames(300);
    run(&mut anim, &mut surface, &config).unwrap();

    for p in &anim.pos {
        assert!(p.x > -0.05 && p.x < 1.05, "{p:?}");
        assert!(p.y > -0.05 && p.y < 1.05, "{p:?}");
    }
    assert_eq!(surface.last_frame().unwrap().circles.len(), 512);
}

#[test]
fn test_smoke_pump_fills_dye() {
    let mut solver = SmokeSolver::new(SmokeConfig {
        resolution: 48,
        ..SmokeConfig::default()
    })
    .unwrap();
    for _ in 0..5 {
        solver.step(Some(0.0)).unwrap();
    }
    assert!(solver.dye().sum() > 0.0);
    assert!(solver.dye().as_slice().iter().all(|x| x.is_finite()));
    assert!(solver.velocity().max_norm() > 0.0);
}

#[test]
fn test_complex_field_product() {
    let mut z = ComplexField::zeros([4, 4]).unwrap();
    z.set([1, 2], cplx(1.0, 2.0));
    let w = cplx(3.0, 4.0);
    let p = z.at([1, 2]).mat_mul(&w);
    assert_eq!(p, cplx(-5.0, 10.0));
    assert_eq!(z.at([0, 0]), cplx(0.0, 0.0));
    assert_relative_eq!(p.mag2(), 125.0);
}

#[test]
fn test_errors_convert_into_umbrella_error() {
    let parts: [Component; 2] = [1.0_f64.into(), Vec2::new(2.0, 3.0).into()];
    let err: gloam::Error = vec2(&parts).unwrap_err().into();
    assert!(matches!(
        err,
        gloam::Error::Math(MathError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));

    let err: gloam::Error = Context::new([4, 4]).i_mouse().unwrap_err().into();
    assert!(matches!(err, gloam::Error::Anim(AnimError::InputsNotDefined)));
}
