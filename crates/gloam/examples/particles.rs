//! 8192 bouncing particles under gravity.
//!
//! ASWD / arrow keys replace gravity with the key direction, the left
//! mouse button attracts particles to the cursor and the middle button
//! repels them. The scripted run drops the particles, attracts them to the
//! centre, then pushes them right.

use gloam::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Particles {
    pos: Vec<Vec2>,
    vel: Vec<Vec2>,
    rng: Rand,
    dt: f64,
}

impl Particles {
    fn new(n: usize, seed: u64) -> Self {
        Self {
            pos: vec![Vec2::zeros(); n],
            vel: vec![Vec2::zeros(); n],
            rng: Rand::new(seed),
            dt: 0.01,
        }
    }
}

impl Animation for Particles {
    fn on_init(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        ctx.define_input();
        Ok(())
    }

    fn on_start(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        for (p, v) in self.pos.iter_mut().zip(&mut self.vel) {
            *p = self.rng.rand_nd::<2>();
            *v = self.rng.rand_solid_2d();
        }
        Ok(())
    }

    fn on_advance(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        let dir = ctx.i_key_direction()?;
        let buttons = ctx.i_mouse_button()?;
        let mouse = ctx.i_mouse()?;
        let gravity = if dir == Vec2::zeros() {
            Vec2::new(0.0, -1.0)
        } else {
            dir
        };

        for (p, v) in self.pos.iter_mut().zip(&mut self.vel) {
            let mut acc = gravity;
            if buttons.iter().any(|&b| b) {
                let pull = normalize(&(mouse - *p)) * 2.0;
                if buttons[0] {
                    acc += pull;
                }
                if buttons[1] {
                    acc -= pull;
                }
            }
            *v += acc * self.dt;
            *v = bound_reflect(&*p, &*v, 0.0, 1.0, 0.8);
            *p += *v * self.dt;
        }
        Ok(())
    }

    fn circles(&self) -> Option<&[Vec2]> {
        Some(self.pos.as_slice())
    }
}

fn main() -> gloam::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut anim = Particles::new(8192, 0);
    let centre = Vec2::new(0.5, 0.5);
    let mut surface = HeadlessSurface::new();
    for _ in 0..100 {
        surface.push_frame(Vec::<Event>::new());
    }
    surface.push_frame([Event::Press {
        key: Key::Lmb,
        pos: centre,
    }]);
    for _ in 0..99 {
        surface.push_frame(Vec::<Event>::new());
    }
    surface.push_frame([
        Event::Release {
            key: Key::Lmb,
            pos: centre,
        },
        Event::Press {
            key: Key::Char('d'),
            pos: centre,
        },
    ]);

    let config = AnimationConfig {
        circle_radius: 1.5,
        circle_color: 0x068587,
        ..AnimationConfig::default().with_title("Particles").with_max_frames(300)
    };
    let frames = run(&mut anim, &mut surface, &config)?;

    let mean = anim.pos.iter().sum::<Vec2>() / anim.pos.len() as f64;
    info!(frames, mean_x = mean.x, mean_y = mean.y, "done");
    println!("{frames} frames, mean position ({:.3}, {:.3})", mean.x, mean.y);
    Ok(())
}
