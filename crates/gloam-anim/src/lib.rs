//! Shadertoy-style animation loop.
//!
//! An [`Animation`] implements the lifecycle hooks it cares about and
//! [`run`] drives them against a [`Surface`]. Loop state lives in an
//! explicit [`Context`] passed to every hook rather than in globals.
//! [`HeadlessSurface`] stands in for a real window: events are scripted
//! per frame and shown frames are recorded in memory.
//!
//! # Example
//!
//! ```
//! use gloam_anim::{Animation, AnimationConfig, Context, HeadlessSurface, ImageRef, run};
//! use gloam_field::Field;
//!
//! struct Pulse {
//!     img: Field<f64>,
//! }
//!
//! impl Animation for Pulse {
//!     fn on_init(&mut self, ctx: &mut Context) -> gloam_anim::Result<()> {
//!         ctx.define_input();
//!         Ok(())
//!     }
//!
//!     fn on_render(&mut self, ctx: &mut Context) -> gloam_anim::Result<()> {
//!         let t = ctx.i_frame()? as f64;
//!         self.img.fill((t * 0.1).sin() * 0.5 + 0.5);
//!         Ok(())
//!     }
//!
//!     fn image(&self) -> Option<ImageRef<'_>> {
//!         Some((&self.img).into())
//!     }
//! }
//!
//! let mut anim = Pulse { img: Field::new([32, 32]).unwrap() };
//! let mut surface = HeadlessSurface::new();
//! let config = AnimationConfig::default().with_max_frames(4);
//! assert_eq!(run(&mut anim, &mut surface, &config).unwrap(), 4);
//! assert_eq!(surface.frames().len(), 4);
//! ```

pub mod animation;
pub mod config;
pub mod context;
pub mod error;
pub mod surface;

pub use animation::{Animation, run};
pub use config::AnimationConfig;
pub use context::{Context, Inputs, key_direction};
pub use error::{AnimError, Result};
pub use surface::{Event, HeadlessSurface, Image, ImageRef, Key, RecordedFrame, Surface};
