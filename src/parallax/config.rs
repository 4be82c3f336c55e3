use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParallaxLayerDef {
    pub name: String,
    /// sRGB, 0..1.
    pub color: [f32; 3],
    pub size: [f32; 2],
    pub position: [f32; 3],
}

impl ParallaxLayerDef {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Parallax setup for the active scene, built from the scene asset.
#[derive(Resource, Debug, Clone)]
pub struct ParallaxConfig {
    pub smoothing: f32,
    pub depth_axis: Dir3,
    pub layers: Vec<ParallaxLayerDef>,
}
