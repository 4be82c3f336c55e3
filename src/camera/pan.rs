use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::registry::camera::CameraConfig;

/// Slide the camera horizontally with A/D or the arrow keys.
pub fn camera_pan(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    camera_config: Res<CameraConfig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let left = keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]);
    let right = keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]);
    let direction = pan_direction(left, right);
    if direction == 0.0 {
        return;
    }

    let step = direction * camera_config.pan_speed * time.delta_secs();
    for mut transform in &mut camera_query {
        transform.translation.x += step;
    }
}

/// -1, 0 or 1. Holding both keys cancels out.
pub fn pan_direction(left: bool, right: bool) -> f32 {
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
