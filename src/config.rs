//! Run configuration: screen extent and frame pacing
//!
//! Loaded from a small JSON file when one is supplied, defaults otherwise.
//! Validation is strict: a degenerate extent would produce negative-size
//! collision geometry downstream, so bad values are rejected up front.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GAP_HEIGHT, GAP_MARGIN, PIPE_WIDTH};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible width in pixels
    pub screen_width: u32,
    /// Visible height in pixels
    pub screen_height: u32,
    /// Upper bound on frames per second for the outer loop
    pub fps_cap: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 540,
            screen_height: 480,
            fps_cap: 120,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.screen_width > 0, "screen_width must be positive");
        ensure!(self.screen_height > 0, "screen_height must be positive");
        ensure!(self.fps_cap > 0, "fps_cap must be positive");
        ensure!(
            self.screen_height as f32 > 2.0 * GAP_MARGIN + GAP_HEIGHT,
            "screen_height {} leaves no room for the gap band",
            self.screen_height
        );
        ensure!(
            self.screen_width as f32 >= 4.0 * PIPE_WIDTH,
            "screen_width {} is narrower than the pipe spacing needs",
            self.screen_width
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Screen extent as a vector, for the simulation
    pub fn screen_extent(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Time budget of one frame at the cap (ms)
    pub fn frame_budget_ms(&self) -> f32 {
        1000.0 / self.fps_cap as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_extent(), Vec2::new(540.0, 480.0));
        assert!((config.frame_budget_ms() - 1000.0 / 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_extents_rejected() {
        let mut config = Config::default();
        config.screen_width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.screen_height = 150;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fps_cap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"fps_cap": 60}"#).unwrap();
        assert_eq!(config.fps_cap, 60);
        assert_eq!(config.screen_width, 540);
        assert_eq!(config.screen_height, 480);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            screen_width: 800,
            screen_height: 600,
            fps_cap: 60,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.screen_width, 800);
        assert_eq!(back.screen_height, 600);
        assert_eq!(back.fps_cap, 60);
    }
}
