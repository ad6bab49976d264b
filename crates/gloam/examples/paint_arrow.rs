//! An arrow from the corner to the cursor, redrawn every frame.
//!
//! The scripted cursor sweeps a quarter circle; the last frame is written
//! to stdout as ASCII art.

use gloam::prelude::*;
use tracing_subscriber::EnvFilter;

struct Arrow {
    img: Field<f64>,
    style: ArrowStyle,
}

impl Animation for Arrow {
    fn on_init(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        ctx.define_input();
        Ok(())
    }

    fn on_render(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        self.img.fill(0.0);
        paint_arrow(&mut self.img, &Vec2::zeros(), &ctx.i_mouse()?, &self.style);
        Ok(())
    }

    fn image(&self) -> Option<ImageRef<'_>> {
        Some((&self.img).into())
    }
}

fn main() -> gloam::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut anim = Arrow {
        img: Field::new([64, 32])?,
        style: ArrowStyle::default(),
    };
    let mut surface = HeadlessSurface::new();
    let frames = 24;
    for k in 0..frames {
        let a = PI / 2.0 * k as f64 / (frames - 1) as f64;
        let pos = Vec2::new(a.cos(), a.sin()) * 0.9;
        surface.push_frame([Event::Motion { pos }]);
    }

    let config = AnimationConfig::default()
        .with_title("Test Arrow")
        .with_max_frames(frames);
    run(&mut anim, &mut surface, &config)?;

    let [w, h] = anim.img.shape();
    for j in (0..h).rev() {
        let row: String = (0..w)
            .map(|i| match anim.img[[i, j]] {
                c if c > 0.66 => '#',
                c if c > 0.33 => '+',
                c if c > 0.0 => '.',
                _ => ' ',
            })
            .collect();
        println!("{row}");
    }
    Ok(())
}
