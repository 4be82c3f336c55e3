use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::camera::CameraConfig;
use crate::parallax::config::{ParallaxConfig, ParallaxLayerDef};
use crate::parallax::controller::DEFAULT_SMOOTHING;

/// Asset loaded from *.parallax.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct ParallaxSceneAsset {
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    #[serde(default = "default_depth_axis")]
    pub depth_axis: [f32; 3],
    pub camera: CameraConfig,
    pub layers: Vec<ParallaxLayerDef>,
}

fn default_smoothing() -> f32 {
    DEFAULT_SMOOTHING
}

fn default_depth_axis() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}

impl ParallaxSceneAsset {
    pub fn parallax_config(&self) -> ParallaxConfig {
        ParallaxConfig {
            smoothing: self.smoothing,
            depth_axis: self.depth_axis(),
            layers: self.layers.clone(),
        }
    }

    /// Falls back to +Z when the configured axis has no direction.
    pub fn depth_axis(&self) -> Dir3 {
        Dir3::new(Vec3::from_array(self.depth_axis)).unwrap_or_else(|_| {
            warn!(
                "Invalid parallax depth axis {:?}, using +Z",
                self.depth_axis
            );
            Dir3::Z
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"(
        smoothing: 8.0,
        depth_axis: (0.0, 0.0, -1.0),
        camera: (pan_speed: 250.0),
        layers: [
            (name: "sky", color: (0.4, 0.6, 0.9), size: (4000.0, 720.0), position: (0.0, 0.0, -0.9)),
            (name: "bushes", color: (0.1, 0.3, 0.1), size: (4000.0, 120.0), position: (0.0, -300.0, 0.4)),
        ],
    )"#;

    #[test]
    fn parses_scene_ron() {
        let asset: ParallaxSceneAsset = ron::de::from_str(SCENE).unwrap();
        assert_eq!(asset.smoothing, 8.0);
        assert_eq!(asset.camera.pan_speed, 250.0);
        assert_eq!(asset.layers.len(), 2);
        assert_eq!(asset.layers[1].name, "bushes");
        assert_eq!(asset.layers[1].translation(), Vec3::new(0.0, -300.0, 0.4));
    }

    #[test]
    fn smoothing_and_axis_default() {
        let asset: ParallaxSceneAsset =
            ron::de::from_str("(camera: (pan_speed: 1.0), layers: [])").unwrap();
        assert_eq!(asset.smoothing, DEFAULT_SMOOTHING);
        assert_eq!(asset.depth_axis(), Dir3::Z);
        assert!(asset.layers.is_empty());
    }

    #[test]
    fn builds_parallax_config() {
        let asset: ParallaxSceneAsset = ron::de::from_str(SCENE).unwrap();
        let config = asset.parallax_config();
        assert_eq!(config.smoothing, 8.0);
        assert_eq!(config.depth_axis, Dir3::NEG_Z);
        assert_eq!(config.layers, asset.layers);
    }

    #[test]
    fn bundled_scene_parses() {
        let asset: ParallaxSceneAsset =
            ron::de::from_str(include_str!("../../assets/scenes/default.parallax.ron")).unwrap();
        assert_eq!(asset.depth_axis(), Dir3::NEG_Z);
        assert!(asset.smoothing > 0.0);
        assert!(!asset.layers.is_empty());
    }

    #[test]
    fn zero_axis_falls_back_to_z() {
        let asset = ParallaxSceneAsset {
            smoothing: 1.0,
            depth_axis: [0.0, 0.0, 0.0],
            camera: CameraConfig { pan_speed: 1.0 },
            layers: vec![],
        };
        assert_eq!(asset.depth_axis(), Dir3::Z);
    }
}
