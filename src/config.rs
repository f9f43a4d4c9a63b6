// config.rs - Game configuration loaded from JSON
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::animation::TokenAnimator;
use crate::board::{Preset, DEFAULT_BOX_SIZE};
use crate::camera::CameraConfig;
use crate::math::{GroundIntersector, PickingError, DEFAULT_MARCH_DISTANCE, DEFAULT_MARCH_STEP};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingConfig {
    pub step: f32,
    pub max_distance: f32,
    /// Use the exact plane solution instead of marching.
    pub closed_form: bool,
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_MARCH_STEP,
            max_distance: DEFAULT_MARCH_DISTANCE,
            closed_form: false,
        }
    }
}

impl PickingConfig {
    pub fn intersector(&self) -> Result<GroundIntersector, PickingError> {
        if self.closed_form {
            Ok(GroundIntersector::Exact)
        } else {
            GroundIntersector::marching(self.step, self.max_distance)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// World-space width of one cell.
    pub cell_size: f32,
    /// Side of a box region; the board side is its square.
    pub box_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 0.1,
            box_size: DEFAULT_BOX_SIZE,
        }
    }
}

impl GridConfig {
    pub fn side(&self) -> usize {
        self.box_size * self.box_size
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub camera: CameraConfig,
    pub picking: PickingConfig,
    pub grid: GridConfig,
    pub animation: TokenAnimator,
    pub preset: Preset,
    /// Tokens each category needs for the board to count as won. Defaults to the board side.
    pub target_per_category: Option<usize>,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn target_per_category(&self) -> usize {
        self.target_per_category.unwrap_or_else(|| self.grid.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid.side(), 9);
        assert_eq!(config.target_per_category(), 9);
        assert_eq!(config.preset, Preset::Challenging);
        assert_eq!(config.picking.step, 0.01);
        assert_eq!(config.picking.max_distance, 10.0);
        assert_eq!(config.camera.pixel_scale, 0.1);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "preset": "nearSolved", "picking": { "closed_form": true }, "grid": { "cell_size": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(config.preset, Preset::NearSolved);
        assert!(config.picking.closed_form);
        assert_eq!(config.picking.step, 0.01);
        assert_eq!(config.grid.cell_size, 0.2);
        assert_eq!(config.grid.box_size, 3);
        assert_eq!(config.picking.intersector(), Ok(GroundIntersector::Exact));
    }

    #[test]
    fn test_camera_vectors_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "camera": { "position": [0.0, 2.0, 2.0], "width": 640 } }"#).unwrap();
        assert_eq!(config.camera.position, glam::Vec3::new(0.0, 2.0, 2.0));
        assert_eq!(config.camera.width, 640);
        assert_eq!(config.camera.height, 720);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
