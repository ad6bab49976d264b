//! A complete 2D smoke solver: dye carried by a self-advected, projected
//! velocity field, driven by a steerable pump near the bottom edge.

use std::path::Path;

use gloam_field::{Field, bilerp};
use gloam_math::{PI, Vec2, vec_angle};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{FluidError, Pair, PressureSolver, Relaxation, Result};

/// Parameters of [`SmokeSolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Cells per side; the grid is square and `dx = 1 / resolution`.
    pub resolution: usize,
    pub dt: f64,
    pub pump_strength: f64,
    /// Half extent of the pump footprint in cells, `[x, y]`.
    pub pump_radius: [i64; 2],
    /// Velocity gain of the pump.
    pub pump_velocity_gain: f64,
    /// Dye gain of the pump.
    pub pump_dye_gain: f64,
    pub relaxation: Relaxation,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            resolution: 512,
            dt: 0.001,
            pump_strength: 0.1,
            pump_radius: [15, 15],
            pump_velocity_gain: 7.8,
            pump_dye_gain: 21.3,
            relaxation: Relaxation::default(),
        }
    }
}

impl SmokeConfig {
    /// Parse and [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pump and the advection would divide by.
    ///
    /// # Errors
    /// [`FluidError::InvalidConfig`] for a zero resolution, a non-positive
    /// `dt` or pump strength, or a pump radius below one cell.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(FluidError::InvalidConfig("resolution must be positive".into()));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(FluidError::InvalidConfig(format!("dt must be positive, got {}", self.dt)));
        }
        if !(self.pump_strength > 0.0 && self.pump_strength.is_finite()) {
            return Err(FluidError::InvalidConfig(format!(
                "pump_strength must be positive, got {}",
                self.pump_strength
            )));
        }
        if self.pump_radius.iter().any(|&r| r < 1) {
            return Err(FluidError::InvalidConfig(format!(
                "pump_radius must be at least 1 cell, got {:?}",
                self.pump_radius
            )));
        }
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn dx(&self) -> f64 {
        1.0 / self.resolution as f64
    }
}

/// Departure point of `p` under `v` with a midpoint step. `dt` is in cells
/// per unit velocity.
#[inline]
fn backtrace(v: &Field<Vec2>, p: &Vec2, dt: f64) -> Vec2 {
    let mid = p - bilerp(v, p) * (0.5 * dt);
    p - bilerp(v, &mid) * dt
}

/// Error-compensated semi-Lagrangian step of `src` into `dst`:
/// `dst[I] = src(bt) + 0.5 * (src(ft) - src[I])` where `bt` is the
/// backtrace of `I` and `ft` the forward trace of `bt`.
pub fn maccormack_advect<T: gloam_field::FieldValue>(
    src: &Field<T>,
    dst: &mut Field<T>,
    vel: &Field<Vec2>,
    dt: f64,
) -> gloam_field::Result<()> {
    dst.check_same_shape(src)?;
    dst.par_fill_with(|[i, j]| {
        let p = Vec2::new(i as f64, j as f64);
        let bt = backtrace(vel, &p, dt);
        let ft = backtrace(vel, &bt, -dt);
        bilerp(src, &bt) + (bilerp(src, &ft) - src[[i, j]]) * 0.5
    });
    Ok(())
}

/// Interactive smoke simulation.
#[derive(Debug, Clone)]
pub struct SmokeSolver {
    config: SmokeConfig,
    dye: Pair<f64>,
    velocity: Pair<Vec2>,
    pressure: PressureSolver,
    frame: u64,
}

impl SmokeSolver {
    /// # Errors
    /// [`FluidError::InvalidConfig`] if `config` fails
    /// [`SmokeConfig::validate`].
    pub fn new(config: SmokeConfig) -> Result<Self> {
        config.validate()?;
        let shape = [config.resolution, config.resolution];
        Ok(Self {
            dye: Pair::zeros(shape)?,
            velocity: Pair::zeros(shape)?,
            pressure: PressureSolver::new(shape, config.dx())?,
            config,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SmokeConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn dye(&self) -> &Field<f64> {
        self.dye.old()
    }

    pub fn velocity(&self) -> &Field<Vec2> {
        self.velocity.old()
    }

    pub fn pressure(&self) -> &Field<f64> {
        self.pressure.pressure()
    }

    /// Set every dye cell from `f`.
    pub fn fill_dye(&mut self, f: impl Fn([usize; 2]) -> f64 + Sync) {
        self.dye.old_mut().par_fill_with(f);
    }

    /// Set every velocity cell from `f`.
    pub fn fill_velocity(&mut self, f: impl Fn([usize; 2]) -> Vec2 + Sync) {
        self.velocity.old_mut().par_fill_with(f);
    }

    /// Rigid rotation about the grid centre.
    pub fn fill_rotation(&mut self) {
        let c = self.config.resolution as f64 / 2.0;
        self.fill_velocity(|[i, j]| Vec2::new(c - j as f64, i as f64 - c));
    }

    /// Inject velocity and dye through the pump, aimed `angle` radians off
    /// vertical.
    pub fn pump(&mut self, angle: f64) {
        let [rx, ry] = self.config.pump_radius;
        let n = self.config.resolution as i64;
        let dt = self.config.dt;
        let strength = self.config.pump_strength;
        let dir = vec_angle(angle + PI / 2.0);
        let dv = dir * (strength / dt) * self.config.pump_velocity_gain;
        let dd = (dt / strength) * self.config.pump_dye_gain;

        for x in -rx..=rx {
            for y in (-ry + 1)..ry {
                let (i, j) = (n / 2 + x, ry + y);
                if i < 0 || j < 0 || i >= n || j >= n {
                    continue;
                }
                let fx = (rx - x.abs()) as f64 / rx as f64;
                let fy = (ry - y.abs()) as f64 / ry as f64;
                let s = (fy * fx).powi(2);
                let index = [i as usize, j as usize];
                self.velocity.old_mut()[index] += dv * s;
                self.dye.old_mut()[index] += s * dd;
            }
        }
    }

    /// Advance one frame. `pump` is the pump angle, or `None` to leave it
    /// off.
    pub fn step(&mut self, pump: Option<f64>) -> Result<()> {
        if let Some(angle) = pump {
            self.pump(angle);
        }

        let dt = self.config.dt;
        let cfl = self.velocity.old().max_norm() * dt;
        if cfl > 1.0 {
            warn!(cfl, frame = self.frame, "velocity crosses more than one cell per step");
        }

        {
            let vel = self.velocity.old();
            let (old, new) = self.dye.split_mut();
            maccormack_advect(old, new, vel, dt)?;
        }
        {
            let (old, new) = self.velocity.split_mut();
            maccormack_advect(old, new, old, dt)?;
        }
        self.dye.swap();
        self.velocity.swap();

        let relaxation = self.config.relaxation;
        self.pressure.project(self.velocity.old_mut(), relaxation)?;

        self.frame += 1;
        debug!(frame = self.frame, dye = self.dye.old().sum(), "smoke step");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small() -> SmokeConfig {
        SmokeConfig {
            resolution: 32,
            pump_radius: [4, 4],
            ..SmokeConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let c = SmokeConfig::default();
        assert_eq!(c.resolution, 512);
        assert_eq!(c.relaxation.jacobi, 5);
        assert_eq!(c.relaxation.gauss_seidel, 20);
        assert_relative_eq!(c.dx(), 1.0 / 512.0);
    }

    #[test]
    fn test_config_from_toml_keeps_defaults() {
        let c = SmokeConfig::from_toml_str("resolution = 64\n[relaxation]\njacobi = 2\n").unwrap();
        assert_eq!(c.resolution, 64);
        assert_eq!(c.relaxation.jacobi, 2);
        assert_eq!(c.relaxation.gauss_seidel, 20);
        assert_eq!(c.dt, 0.001);
        assert!(SmokeConfig::from_toml_str("resolution = \"big\"").is_err());
    }

    #[test]
    fn test_zero_pump_radius_rejected() {
        let err = SmokeConfig::from_toml_str("pump_radius = [0, 15]").unwrap_err();
        assert!(matches!(err, FluidError::InvalidConfig(_)));

        let config = SmokeConfig {
            pump_radius: [4, 0],
            ..small()
        };
        assert!(matches!(SmokeSolver::new(config), Err(FluidError::InvalidConfig(_))));
    }

    #[test]
    fn test_degenerate_step_sizes_rejected() {
        for text in ["dt = 0.0", "dt = -0.1", "pump_strength = 0.0", "resolution = 0"] {
            let err = SmokeConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, FluidError::InvalidConfig(_)), "{text}");
        }
        SmokeConfig::default().validate().unwrap();
    }

    #[test]
    fn test_maccormack_advect_at_rest_is_identity() {
        let src = Field::from_fn([8, 8], |[i, j]| (i * j) as f64).unwrap();
        let mut dst = Field::new([8, 8]).unwrap();
        let vel = Field::new([8, 8]).unwrap();
        maccormack_advect(&src, &mut dst, &vel, 0.1).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_pump_adds_dye_and_upward_velocity() {
        let mut s = SmokeSolver::new(small()).unwrap();
        s.pump(0.0);
        assert!(s.dye().sum() > 0.0);
        let v = s.velocity()[[16, 4]];
        assert!(v.y > 0.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_step_keeps_fields_finite() {
        let mut s = SmokeSolver::new(small()).unwrap();
        for _ in 0..3 {
            s.step(Some(0.3)).unwrap();
        }
        assert_eq!(s.frame(), 3);
        assert!(s.dye().as_slice().iter().all(|d| d.is_finite()));
        assert!(s.velocity().as_slice().iter().all(|v| v.x.is_finite() && v.y.is_finite()));
        assert!(s.dye().sum() > 0.0);
    }
}
