//! Four point vortices stirring a grid pattern with MacCormack advection.
//!
//! Runs headless for a fixed number of frames and prints how far the dye
//! has been displaced. Set `RUST_LOG=debug` to see every frame.

use gloam::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const RES: usize = 256;

struct Vortices {
    color: Maccormack<f64>,
    vorts: Vec<Vec2>,
    step: AdvectionStep,
}

/// Velocity induced at cell position `p` by the vortex set.
struct Induced<'a> {
    vorts: &'a [Vec2],
    dx: f64,
}

impl gloam::fluid::Velocity for Induced<'_> {
    fn velocity(&self, p: &Vec2) -> Vec2 {
        let p = p * self.dx;
        let vel: Vec2 = self
            .vorts
            .iter()
            .map(|v| {
                let d = normalize_pow(&(p - v), -1.0, 0.001);
                Vec2::new(d.y, -d.x)
            })
            .sum();
        vel * 0.01
    }
}

impl Animation for Vortices {
    fn on_init(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        ctx.define_input();
        Ok(())
    }

    fn on_start(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        let shape = ctx.i_resolution();
        self.color
            .current_mut()
            .par_fill_with(|index| image_grid(&view(shape, index), 16, 0.1));
        self.vorts = vec![
            Vec2::new(0.25, 0.5),
            Vec2::new(0.75, 0.5),
            Vec2::new(0.5, 0.25),
            Vec2::new(0.5, 0.75),
        ];
        Ok(())
    }

    fn on_advance(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        let vel = Induced {
            vorts: &self.vorts,
            dx: self.step.dx,
        };
        self.color.advance(&vel, self.step);
        self.color.update();
        Ok(())
    }

    fn image(&self) -> Option<ImageRef<'_>> {
        Some(self.color.result().into())
    }

    fn circles(&self) -> Option<&[Vec2]> {
        Some(self.vorts.as_slice())
    }
}

fn main() -> gloam::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let initial: Field<f64> = Field::from_fn([RES, RES], |index| {
        image_grid(&view([RES, RES], index), 16, 0.1)
    })?;
    let mut anim = Vortices {
        color: Maccormack::zeros([RES, RES])?,
        vorts: Vec::new(),
        step: AdvectionStep::new(0.04, 1.0 / RES as f64),
    };
    let config = AnimationConfig::default()
        .with_title("Simple vortices")
        .with_max_frames(60);
    let mut surface = HeadlessSurface::new();
    let frames = run(&mut anim, &mut surface, &config)?;

    let moved = anim
        .color
        .current()
        .as_slice()
        .iter()
        .zip(initial.as_slice())
        .filter(|(a, b)| (*a - *b).abs() > 0.5)
        .count();
    info!(frames, moved, "done");
    println!("{frames} frames, {moved} of {} cells changed shade", RES * RES);
    Ok(())
}
