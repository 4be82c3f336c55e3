pub mod pan;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

const CAMERA_SCALE: f32 = 1.0;

/// Marks the camera the demo scene binds its parallax controller to.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            pan::camera_pan
                .in_set(GameSet::Camera)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
