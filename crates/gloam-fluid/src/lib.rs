//! Toy-fluid building blocks on [`gloam_field::Field`]s.
//!
//! - [`Pair`] double buffers with `update` / `swap`
//! - [`SemiLagrangian`] RK1 / RK2 and [`Maccormack`] advection behind the
//!   [`Advect`] trait, parameterised by an [`AdvectionStep`] and any
//!   [`Velocity`] source
//! - [`PressureSolver`]: divergence, Jacobi and red-black Gauss-Seidel
//!   sweeps, gradient subtraction
//! - [`SmokeSolver`]: all of the above wired into a pumped smoke plume
//!
//! # Example
//!
//! ```
//! use gloam_field::Field;
//! use gloam_fluid::{Advect, AdvectionStep, Maccormack};
//! use gloam_math::Vec2;
//!
//! let mut dye = Maccormack::make(|| Field::filled([16, 16], 1.0)).unwrap();
//! let swirl = |p: &Vec2| Vec2::new(8.0 - p.y, p.x - 8.0);
//! dye.advance(&swirl, AdvectionStep::new(0.01, 1.0));
//! dye.update();
//! assert!((dye.current()[[3, 3]] - 1.0).abs() < 1e-9);
//! ```

pub mod advection;
pub mod error;
pub mod pair;
pub mod projection;
pub mod smoke;

pub use advection::{Advect, AdvectionStep, Maccormack, Scheme, SemiLagrangian, Velocity, advect_into};
pub use error::{FluidError, Result};
pub use pair::Pair;
pub use projection::{PressureSolver, Relaxation, divergence, gradient, sum_around};
pub use smoke::{SmokeConfig, SmokeSolver, maccormack_advect};
