//! gloam: GLSL-flavoured helpers for grid simulations and toy animations.
//!
//! This is the umbrella crate. It re-exports the sub-crates and offers a
//! single [`Error`] that every sub-crate error converts into, so demos can
//! use `?` across crate boundaries.
//!
//! # Example
//!
//! ```
//! use gloam::prelude::*;
//!
//! let mut solver = SmokeSolver::new(SmokeConfig {
//!     resolution: 32,
//!     ..SmokeConfig::default()
//! })?;
//! solver.fill_dye(|[i, j]| image_chess(&view([32, 32], [i, j]), 8));
//! solver.step(Some(0.0))?;
//! assert_eq!(solver.frame(), 1);
//! # Ok::<(), gloam::Error>(())
//! ```

pub use gloam_anim::{self as anim};
pub use gloam_field::{self as field};
pub use gloam_fluid::{self as fluid};
pub use gloam_math::{self as math, na};
pub use gloam_paint::{self as paint};
pub use gloam_phys::{self as phys};
pub use gloam_rand::{self as rand, Rand};

/// Any error raised by a gloam crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Math(#[from] gloam_math::MathError),

    #[error(transparent)]
    Field(#[from] gloam_field::FieldError),

    #[error(transparent)]
    Fluid(#[from] gloam_fluid::FluidError),

    #[error(transparent)]
    Anim(#[from] gloam_anim::AnimError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The names most demos need.
pub mod prelude {
    pub use gloam_anim::{
        Animation, AnimationConfig, Context, Event, HeadlessSurface, ImageRef, Key, Surface, run,
    };
    pub use gloam_field::{
        Complex, Composite, Field, FieldValue, SamplePolicy, bilerp, clamp_sample, cplx, sample,
    };
    pub use gloam_fluid::{
        Advect, AdvectionStep, Maccormack, Pair, PressureSolver, Relaxation, Scheme,
        SemiLagrangian, SmokeConfig, SmokeSolver,
    };
    pub use gloam_math::{
        GenType, PI, TAU, Vec2, Vec3, Vec4, clamp, fract, mix, normalize, normalize_pow,
        smoothstep, vec, vec2, vec3,
    };
    pub use gloam_paint::{
        ArrowStyle, grayscale, image_chess, image_grid, inside_taijitu, paint_arrow, view,
    };
    pub use gloam_phys::{bound_reflect, momentum_exchange};
    pub use gloam_rand::Rand;
}
