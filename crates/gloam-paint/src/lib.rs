//! Painting helpers: colour conversions, procedural test images and
//! anti-aliased arrows drawn into [`gloam_field::Field`]s.

pub mod arrow;
pub mod colormap;
pub mod pattern;

pub use arrow::{ArrowStyle, paint_arrow, sd_line};
pub use colormap::{grayscale, hex_to_rgb, normalmap, rgb_to_hex};
pub use pattern::{image_chess, image_grid, inside_taijitu, view};
