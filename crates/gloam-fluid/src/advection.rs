//! Semi-Lagrangian advection.
//!
//! Every scheme traces each cell centre backwards through a velocity field
//! and reads the source field there with [`bilerp`]. Positions are in cell
//! units, so the velocity is scaled by `dt / dx` before the backtrace.

use gloam_field::{Composite, Field, FieldValue, bilerp};
use gloam_math::Vec2;

use crate::Pair;

/// Time step and cell size of one advection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvectionStep {
    pub dt: f64,
    pub dx: f64,
}

impl AdvectionStep {
    pub fn new(dt: f64, dx: f64) -> Self {
        Self { dt, dx }
    }

    /// Same step run backwards in time.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            dt: -self.dt,
            dx: self.dx,
        }
    }

    /// Cells travelled per step at `speed`.
    #[inline]
    pub fn courant(&self, speed: f64) -> f64 {
        speed * self.dt.abs() / self.dx
    }
}

/// Something that reports a velocity at a position given in cell units.
pub trait Velocity: Sync {
    fn velocity(&self, p: &Vec2) -> Vec2;
}

impl<F> Velocity for F
where
    F: Fn(&Vec2) -> Vec2 + Sync,
{
    #[inline]
    fn velocity(&self, p: &Vec2) -> Vec2 {
        self(p)
    }
}

/// Collocated velocity grid, sampled bilinearly.
impl Velocity for Field<Vec2> {
    #[inline]
    fn velocity(&self, p: &Vec2) -> Vec2 {
        bilerp(self, p)
    }
}

/// Backtrace integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// One Euler step.
    Rk1,
    /// Midpoint rule.
    #[default]
    Rk2,
}

impl Scheme {
    /// Departure point of the cell at `p`.
    pub fn backtrace(self, vel: &impl Velocity, p: &Vec2, step: AdvectionStep) -> Vec2 {
        let k = step.dt / step.dx;
        match self {
            Scheme::Rk1 => p - vel.velocity(p) * k,
            Scheme::Rk2 => {
                let mid = p - vel.velocity(p) * (0.5 * k);
                p - vel.velocity(&mid) * k
            }
        }
    }
}

/// Write `dst[I] = bilerp(src, backtrace(I))` for every cell.
///
/// `dst` must have the shape of `src`.
pub fn advect_into<T: FieldValue>(
    src: &Field<T>,
    dst: &mut Field<T>,
    vel: &impl Velocity,
    step: AdvectionStep,
    scheme: Scheme,
) -> gloam_field::Result<()> {
    dst.check_same_shape(src)?;
    dst.par_fill_with(|[i, j]| {
        let p = Vec2::new(i as f64, j as f64);
        bilerp(src, &scheme.backtrace(vel, &p, step))
    });
    Ok(())
}

/// Common surface of the advection schemes.
pub trait Advect {
    type Value: FieldValue;

    /// Fill the output buffer from the input buffer.
    fn advance<V: Velocity>(&mut self, vel: &V, step: AdvectionStep);

    /// Make the output the next input.
    fn update(&mut self);

    fn current(&self) -> &Field<Self::Value>;

    fn current_mut(&mut self) -> &mut Field<Self::Value>;

    fn result(&self) -> &Field<Self::Value>;
}

/// A [`Pair`] advected with RK1 or RK2 backtraces.
#[derive(Debug, Clone)]
pub struct SemiLagrangian<T: FieldValue> {
    pair: Pair<T>,
    scheme: Scheme,
}

impl<T: FieldValue> SemiLagrangian<T> {
    pub fn new(pair: Pair<T>, scheme: Scheme) -> Self {
        Self { pair, scheme }
    }

    pub fn rk1(pair: Pair<T>) -> Self {
        Self::new(pair, Scheme::Rk1)
    }

    pub fn rk2(pair: Pair<T>) -> Self {
        Self::new(pair, Scheme::Rk2)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn pair(&self) -> &Pair<T> {
        &self.pair
    }

    pub fn pair_mut(&mut self) -> &mut Pair<T> {
        &mut self.pair
    }

    fn pass(&mut self, vel: &impl Velocity, step: AdvectionStep) {
        let (old, new) = self.pair.split_mut();
        let scheme = self.scheme;
        new.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(old, &scheme.backtrace(vel, &p, step))
        });
    }
}

impl SemiLagrangian<Vec2> {
    /// Advect a velocity field through itself.
    pub fn advance_self(&mut self, step: AdvectionStep) {
        let (old, new) = self.pair.split_mut();
        let scheme = self.scheme;
        new.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(old, &scheme.backtrace(old, &p, step))
        });
    }
}

impl<T: FieldValue> Advect for SemiLagrangian<T> {
    type Value = T;

    fn advance<V: Velocity>(&mut self, vel: &V, step: AdvectionStep) {
        self.pass(vel, step);
    }

    fn update(&mut self) {
        self.pair.update();
    }

    fn current(&self) -> &Field<T> {
        self.pair.old()
    }

    fn current_mut(&mut self) -> &mut Field<T> {
        self.pair.old_mut()
    }

    fn result(&self) -> &Field<T> {
        self.pair.new()
    }
}

/// MacCormack advection over three buffers.
///
/// A forward pass `old -> new`, a backward pass `new -> aux` with the time
/// step negated, then `new += 0.5 * (old - aux)`. No limiter is applied, so
/// steep gradients may over- or undershoot.
#[derive(Debug, Clone)]
pub struct Maccormack<T: FieldValue> {
    buffers: Composite<Field<T>, 3>,
    base: Scheme,
}

impl<T: FieldValue> Maccormack<T> {
    /// Three buffers built with `init`, RK2 backtraces.
    pub fn make(init: impl FnMut() -> gloam_field::Result<Field<T>>) -> gloam_field::Result<Self> {
        Self::make_with(init, Scheme::Rk2)
    }

    pub fn make_with(
        mut init: impl FnMut() -> gloam_field::Result<Field<T>>,
        base: Scheme,
    ) -> gloam_field::Result<Self> {
        let (a, b, c) = (init()?, init()?, init()?);
        Ok(Self {
            buffers: Composite::try_new([a, b, c])?,
            base,
        })
    }

    pub fn zeros(shape: [usize; 2]) -> gloam_field::Result<Self> {
        Self::make(|| Field::new(shape))
    }

    pub fn base(&self) -> Scheme {
        self.base
    }

    pub fn old(&self) -> &Field<T> {
        &self.buffers[0]
    }

    pub fn new(&self) -> &Field<T> {
        &self.buffers[1]
    }

    pub fn aux(&self) -> &Field<T> {
        &self.buffers[2]
    }

    pub fn old_mut(&mut self) -> &mut Field<T> {
        &mut self.buffers[0]
    }

    fn correct(&mut self) {
        let [old, new, aux] = self.buffers.entries_mut();
        let (old, aux) = (&*old, &*aux);
        new.par_for_each_mut(|index, cell| {
            *cell += (old[index] - aux[index]) * 0.5;
        });
    }
}

impl Maccormack<Vec2> {
    /// Advect a velocity field through itself; both passes read `old` as the
    /// velocity.
    pub fn advance_self(&mut self, step: AdvectionStep) {
        let base = self.base;
        let [old, new, aux] = self.buffers.entries_mut();
        let old = &*old;
        new.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(old, &base.backtrace(old, &p, step))
        });
        let back = step.reversed();
        let new = &*new;
        aux.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(new, &base.backtrace(old, &p, back))
        });
        self.correct();
    }
}

impl<T: FieldValue> Advect for Maccormack<T> {
    type Value = T;

    fn advance<V: Velocity>(&mut self, vel: &V, step: AdvectionStep) {
        let base = self.base;
        let [old, new, aux] = self.buffers.entries_mut();
        let old = &*old;
        new.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(old, &base.backtrace(vel, &p, step))
        });
        let back = step.reversed();
        let new = &*new;
        aux.par_fill_with(|[i, j]| {
            let p = Vec2::new(i as f64, j as f64);
            bilerp(new, &base.backtrace(vel, &p, back))
        });
        self.correct();
    }

    fn update(&mut self) {
        let [old, new, _] = self.buffers.entries_mut();
        old.as_mut_slice().copy_from_slice(new.as_slice());
    }

    fn current(&self) -> &Field<T> {
        self.old()
    }

    fn current_mut(&mut self) -> &mut Field<T> {
        self.old_mut()
    }

    fn result(&self) -> &Field<T> {
        self.new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uniform(v: Vec2) -> impl Fn(&Vec2) -> Vec2 + Sync {
        move |_| v
    }

    fn step() -> AdvectionStep {
        AdvectionStep::new(1.0, 1.0)
    }

    #[test]
    fn test_reversed_step() {
        let s = AdvectionStep::new(0.1, 0.5).reversed();
        assert_eq!(s.dt, -0.1);
        assert_eq!(s.dx, 0.5);
        assert_relative_eq!(s.courant(10.0), 2.0);
    }

    #[test]
    fn test_backtrace_schemes() {
        let p = Vec2::new(4.0, 4.0);
        let v = uniform(Vec2::new(1.0, -2.0));
        let s = AdvectionStep::new(0.5, 0.25);
        assert_eq!(Scheme::Rk1.backtrace(&v, &p, s), Vec2::new(2.0, 8.0));
        assert_eq!(Scheme::Rk2.backtrace(&v, &p, s), Vec2::new(2.0, 8.0));

        // rotation: RK2 samples the midpoint velocity
        let rot = |q: &Vec2| Vec2::new(-q.y, q.x);
        let s = AdvectionStep::new(1.0, 1.0);
        let rk1 = Scheme::Rk1.backtrace(&rot, &Vec2::new(1.0, 0.0), s);
        let rk2 = Scheme::Rk2.backtrace(&rot, &Vec2::new(1.0, 0.0), s);
        assert_eq!(rk1, Vec2::new(1.0, -1.0));
        assert_eq!(rk2, Vec2::new(0.5, -1.0));
    }

    #[test]
    fn test_rk1_shifts_by_one_cell() {
        let pair = Pair::make(|| Field::from_fn([5, 1], |[i, _]| i as f64)).unwrap();
        let mut sl = SemiLagrangian::rk1(pair);
        sl.advance(&uniform(Vec2::new(1.0, 0.0)), step());
        // new[i] = old[i - 1], clamped at the left edge
        assert_eq!(sl.result().as_slice(), &[0.0, 0.0, 1.0, 2.0, 3.0]);
        sl.update();
        assert_eq!(sl.current().as_slice(), &[0.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_advect_into_checks_shape() {
        let src = Field::<f64>::new([3, 3]).unwrap();
        let mut dst = Field::<f64>::new([3, 4]).unwrap();
        let r = advect_into(&src, &mut dst, &uniform(Vec2::zeros()), step(), Scheme::Rk2);
        assert!(r.is_err());
    }

    #[test]
    fn test_field_velocity_self_advection_at_rest() {
        let pair = Pair::<Vec2>::zeros([4, 4]).unwrap();
        let mut sl = SemiLagrangian::rk2(pair);
        sl.pair_mut().old_mut().fill(Vec2::new(0.0, 0.0));
        sl.advance_self(step());
        assert_eq!(sl.result().max_norm(), 0.0);
    }

    #[test]
    fn test_maccormack_linear_profile_interior() {
        // a linear ramp moved by a uniform velocity is exact away from edges
        let mut mc = Maccormack::make(|| Field::from_fn([8, 1], |[i, _]| i as f64)).unwrap();
        mc.advance(&uniform(Vec2::new(0.5, 0.0)), step());
        for i in 2..6 {
            assert_relative_eq!(mc.result()[[i, 0]], i as f64 - 0.5, epsilon = 1e-12);
        }
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use approx::relative_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn maccormack_keeps_constant_field(
            c in -50.0f64..50.0,
            vx in -3.0f64..3.0,
            vy in -3.0f64..3.0,
            dt in 0.01f64..2.0,
        ) {
            let mut mc = Maccormack::make(|| Field::filled([6, 5], c)).unwrap();
            let vel = move |p: &Vec2| Vec2::new(vx + 0.1 * p.y, vy - 0.1 * p.x);
            mc.advance(&vel, AdvectionStep::new(dt, 1.0));
            for &v in mc.result().as_slice() {
                prop_assert!(relative_eq!(v, c, epsilon = 1e-9, max_relative = 1e-12));
            }
        }
    }
}
