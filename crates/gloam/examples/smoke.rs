//! Pumped smoke plume.
//!
//! Hold Space to switch the pump off, A/Left and D/Right to steer it. The
//! solver parameters can be read from a TOML file:
//!
//! ```text
//! cargo run --example smoke -- smoke.toml
//! ```
//!
//! with for example
//!
//! ```toml
//! resolution = 128
//! dt = 0.001
//!
//! [relaxation]
//! jacobi = 5
//! gauss_seidel = 20
//! ```

use gloam::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Smoke {
    solver: SmokeSolver,
}

impl Animation for Smoke {
    fn on_start(&mut self, _ctx: &mut Context) -> gloam::anim::Result<()> {
        let shape = [self.solver.config().resolution; 2];
        self.solver
            .fill_dye(|index| image_chess(&view(shape, index), 8) * 0.25);
        Ok(())
    }

    fn on_advance(&mut self, ctx: &mut Context) -> gloam::anim::Result<()> {
        let pump = if ctx.is_pressed(Key::Space) {
            None
        } else {
            let mut a = 0.0;
            if ctx.is_pressed(Key::Char('a')) || ctx.is_pressed(Key::Left) {
                a += 0.7;
            }
            if ctx.is_pressed(Key::Char('d')) || ctx.is_pressed(Key::Right) {
                a -= 0.7;
            }
            Some(a)
        };
        self.solver.step(pump).map_err(gloam::anim::AnimError::callback)
    }

    fn image(&self) -> Option<ImageRef<'_>> {
        Some(self.solver.dye().into())
    }
}

fn main() -> gloam::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SmokeConfig::from_path(path)?,
        None => SmokeConfig {
            resolution: 128,
            ..SmokeConfig::default()
        },
    };
    info!(?config, "smoke config");

    let mut anim = Smoke {
        solver: SmokeSolver::new(config)?,
    };
    let mut surface = HeadlessSurface::new();
    // steer left for the second half of the run
    for _ in 0..50 {
        surface.push_frame(Vec::<Event>::new());
    }
    surface.push_frame([Event::Press {
        key: Key::Left,
        pos: Vec2::new(0.5, 0.5),
    }]);

    let config = AnimationConfig::default().with_title("advect").with_max_frames(100);
    let frames = run(&mut anim, &mut surface, &config)?;

    let dye = anim.solver.dye();
    println!(
        "{frames} frames: total dye {:.3}, peak {:.3}, peak speed {:.3}",
        dye.sum(),
        dye.max_abs(),
        anim.solver.velocity().max_norm()
    );
    Ok(())
}
