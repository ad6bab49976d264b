//! Window and loop configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings for [`run`](crate::run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub title: String,
    /// Window size `[width, height]`; replaced by the image shape when the
    /// animation shows an image.
    pub resolution: [usize; 2],
    /// `0xRRGGBB`.
    pub background_color: u32,
    /// `0xRRGGBB`.
    pub circle_color: u32,
    pub circle_radius: f64,
    /// Save every shown frame as `{dir}/{frame:06}.png`.
    pub screenshot_dir: Option<PathBuf>,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            title: "Animation".to_string(),
            resolution: [512, 512],
            background_color: 0x000000,
            circle_color: 0xffffff,
            circle_radius: 1.0,
            screenshot_dir: None,
            max_frames: None,
        }
    }
}

impl AnimationConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_max_frames(mut self, n: u64) -> Self {
        self.max_frames = Some(n);
        self
    }

    /// Screenshot path for `frame`, if a screenshot directory is set.
    pub fn screenshot_path(&self, frame: u64) -> Option<PathBuf> {
        self.screenshot_dir
            .as_ref()
            .map(|dir| dir.join(format!("{frame:06}.png")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let c = AnimationConfig::default();
        assert_eq!(c.title, "Animation");
        assert_eq!(c.resolution, [512, 512]);
        assert_eq!(c.background_color, 0x000000);
        assert_eq!(c.circle_color, 0xffffff);
        assert_eq!(c.circle_radius, 1.0);
        assert!(c.screenshot_dir.is_none());
    }

    #[test]
    fn test_from_toml() {
        let c = AnimationConfig::from_toml_str(
            "title = \"Particles\"\nresolution = [256, 128]\nscreenshot_dir = \"/tmp/shots\"\n",
        )
        .unwrap();
        assert_eq!(c.title, "Particles");
        assert_eq!(c.resolution, [256, 128]);
        assert_relative_eq!(c.circle_radius, 1.0);
        assert_eq!(
            c.screenshot_path(7),
            Some(PathBuf::from("/tmp/shots/000007.png"))
        );
    }

    #[test]
    fn test_background_and_radius_from_toml() {
        let c = AnimationConfig::from_toml_str("background_color = 0x068587\ncircle_radius = 2.5\n")
            .unwrap();
        assert_eq!(c.background_color, 0x068587);
        assert_relative_eq!(c.circle_radius, 2.5);
        assert_eq!(c.title, "Animation");
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            AnimationConfig::from_toml_str("resolution = 3"),
            Err(crate::AnimError::Config(_))
        ));
    }
}
