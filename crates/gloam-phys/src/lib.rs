//! Small physics helpers: collision response and SPH smoothing kernels.

pub mod collision;
pub mod sph;

pub use collision::{bound_reflect, momentum_exchange};
pub use sph::{dpoly6, dspiky, poly6, spiky};
