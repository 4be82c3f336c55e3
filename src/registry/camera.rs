use bevy::prelude::*;
use serde::Deserialize;

/// Demo camera parameters loaded from RON.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct CameraConfig {
    /// World units per second.
    pub pan_speed: f32,
}
