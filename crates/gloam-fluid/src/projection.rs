//! Pressure projection on a collocated grid.
//!
//! Solves `∇²p = ∇·u` with a fixed number of Jacobi sweeps followed by
//! red-black Gauss-Seidel sweeps, then subtracts `∇p` from the velocity.
//! All stencils use clamped sampling, so the boundary behaves as a
//! zero-gradient wall.

use gloam_field::{DOWN, Field, LEFT, RIGHT, UP, offset, sample};
use gloam_math::{IVec2, Vec2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Pair, Result};

#[inline]
fn ivec(index: [usize; 2]) -> IVec2 {
    IVec2::new(index[0] as i32, index[1] as i32)
}

/// Unscaled central-difference divergence `(r.x - l.x) + (t.y - b.y)`.
pub fn divergence(vel: &Field<Vec2>, index: [usize; 2]) -> f64 {
    let i = ivec(index);
    let l = sample(vel, offset(i, LEFT)).x;
    let r = sample(vel, offset(i, RIGHT)).x;
    let b = sample(vel, offset(i, DOWN)).y;
    let t = sample(vel, offset(i, UP)).y;
    r - l + t - b
}

/// Unscaled central-difference gradient `(r - l, t - b)`.
pub fn gradient(p: &Field<f64>, index: [usize; 2]) -> Vec2 {
    let i = ivec(index);
    let l = sample(p, offset(i, LEFT));
    let r = sample(p, offset(i, RIGHT));
    let b = sample(p, offset(i, DOWN));
    let t = sample(p, offset(i, UP));
    Vec2::new(r - l, t - b)
}

/// Sum of the four axis neighbours.
pub fn sum_around(p: &Field<f64>, index: [usize; 2]) -> f64 {
    let i = ivec(index);
    sample(p, offset(i, LEFT))
        + sample(p, offset(i, RIGHT))
        + sample(p, offset(i, DOWN))
        + sample(p, offset(i, UP))
}

/// Sweep counts for one pressure solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relaxation {
    pub jacobi: usize,
    pub gauss_seidel: usize,
}

impl Default for Relaxation {
    fn default() -> Self {
        Self {
            jacobi: 5,
            gauss_seidel: 20,
        }
    }
}

/// Pressure Poisson solver.
///
/// The pressure buffers persist between solves, so each solve starts from
/// the previous result.
#[derive(Debug, Clone)]
pub struct PressureSolver {
    pressure: Pair<f64>,
    divergence: Field<f64>,
    dx: f64,
}

impl PressureSolver {
    pub fn new(shape: [usize; 2], dx: f64) -> Result<Self> {
        Ok(Self {
            pressure: Pair::zeros(shape)?,
            divergence: Field::new(shape)?,
            dx,
        })
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Latest pressure estimate.
    pub fn pressure(&self) -> &Field<f64> {
        self.pressure.old()
    }

    /// Last computed `∇·u`.
    pub fn divergence(&self) -> &Field<f64> {
        &self.divergence
    }

    /// Zero the pressure buffers.
    pub fn reset(&mut self) {
        self.pressure.old_mut().fill(0.0);
        self.pressure.new_mut().fill(0.0);
    }

    /// `div[I] = divergence(vel, I) * 0.5 / dx`.
    pub fn compute_divergence(&mut self, vel: &Field<Vec2>) -> Result<()> {
        self.divergence.check_same_shape(vel)?;
        let scale = 0.5 / self.dx;
        self.divergence
            .par_fill_with(|index| divergence(vel, index) * scale);
        Ok(())
    }

    /// One Jacobi sweep: `new = (sum_around(old) - dx² div) / 4`, then swap.
    pub fn jacobi_step(&mut self) {
        let dx2 = self.dx * self.dx;
        let div = &self.divergence;
        let (old, new) = self.pressure.split_mut();
        new.par_fill_with(|index| (sum_around(old, index) - dx2 * div[index]) * 0.25);
        self.pressure.swap();
    }

    /// One red-black Gauss-Seidel sweep.
    ///
    /// Cells with even `i + j` are relaxed from `old` into `new`; odd cells
    /// are then relaxed from the updated `new`. Buffers are swapped after.
    pub fn gauss_seidel_step(&mut self) {
        let dx2 = self.dx * self.dx;
        let div = &self.divergence;
        let (old, new) = self.pressure.split_mut();
        new.par_for_each_mut(|index, cell| {
            if (index[0] + index[1]) % 2 == 0 {
                *cell = (sum_around(old, index) - dx2 * div[index]) * 0.25;
            }
        });
        let red = new.clone();
        new.par_for_each_mut(|index, cell| {
            if (index[0] + index[1]) % 2 == 1 {
                *cell = (sum_around(&red, index) - dx2 * div[index]) * 0.25;
            }
        });
        self.pressure.swap();
    }

    /// Fixed sweep counts, no convergence test.
    pub fn solve(&mut self, relaxation: Relaxation) {
        for _ in 0..relaxation.jacobi {
            self.jacobi_step();
        }
        trace!(sweeps = relaxation.jacobi, "jacobi done");
        for _ in 0..relaxation.gauss_seidel {
            self.gauss_seidel_step();
        }
        trace!(sweeps = relaxation.gauss_seidel, "gauss-seidel done");
    }

    /// `vel[I] -= gradient(p, I) * 0.5 / dx`.
    pub fn subtract_gradient(&self, vel: &mut Field<Vec2>) -> Result<()> {
        let p = self.pressure.old();
        vel.check_same_shape(p)?;
        let scale = 0.5 / self.dx;
        vel.par_for_each_mut(|index, v| {
            *v -= gradient(p, index) * scale;
        });
        Ok(())
    }

    /// Divergence, solve and gradient subtraction in one call.
    pub fn project(&mut self, vel: &mut Field<Vec2>, relaxation: Relaxation) -> Result<()> {
        self.compute_divergence(vel)?;
        self.solve(relaxation);
        self.subtract_gradient(vel)
    }

    /// Mean squared residual of `∇²p = div` over the grid.
    pub fn residual(&self) -> f64 {
        let dx2 = self.dx * self.dx;
        let p = self.pressure.old();
        let div = &self.divergence;
        let [w, h] = p.shape();
        let total: f64 = (0..h)
            .into_par_iter()
            .map(|j| {
                (0..w)
                    .map(|i| {
                        let lap = sum_around(p, [i, j]) - 4.0 * p[[i, j]];
                        let r = lap - dx2 * div[[i, j]];
                        r * r
                    })
                    .sum::<f64>()
            })
            .sum();
        total / p.len() as f64
    }
}
