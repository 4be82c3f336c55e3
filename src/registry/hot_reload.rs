//! Hot-reload systems for registry assets.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::RegistryHandles;
use super::assets::ParallaxSceneAsset;
use super::camera::CameraConfig;

use crate::parallax::config::ParallaxConfig;
use crate::parallax::controller::ParallaxController;

/// Re-applies tunables from an edited scene file.
///
/// Smoothing and pan speed take effect immediately. The layer list, depth
/// axis and scale tables of running controllers stay as they were.
pub(crate) fn hot_reload_scene(
    mut events: MessageReader<AssetEvent<ParallaxSceneAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<ParallaxSceneAsset>>,
    mut parallax_config: ResMut<ParallaxConfig>,
    mut camera_config: ResMut<CameraConfig>,
    mut controllers: Query<&mut ParallaxController>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.scene.id()
            && let Some(asset) = assets.get(&handles.scene)
        {
            apply_scene_tunables(
                asset,
                &mut parallax_config,
                &mut camera_config,
                controllers.iter_mut().map(|controller| controller.into_inner()),
            );
            info!(
                "Hot-reloaded scene: smoothing={}, pan_speed={}",
                asset.smoothing, asset.camera.pan_speed
            );
        }
    }
}

fn apply_scene_tunables<'a>(
    asset: &ParallaxSceneAsset,
    parallax_config: &mut ParallaxConfig,
    camera_config: &mut CameraConfig,
    controllers: impl Iterator<Item = &'a mut ParallaxController>,
) {
    parallax_config.smoothing = asset.smoothing;
    *camera_config = asset.camera.clone();
    for controller in controllers {
        controller.set_smoothing(asset.smoothing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn tunables_reach_live_controllers() {
        let asset: ParallaxSceneAsset = ron::de::from_str(
            "(smoothing: 12.0, depth_axis: (1.0, 0.0, 0.0), camera: (pan_speed: 90.0), layers: [])",
        )
        .unwrap();
        let mut parallax_config = fixtures::test_parallax_config();
        let mut camera_config = fixtures::test_camera_config();
        let mut controllers = vec![
            ParallaxController::attach(Entity::PLACEHOLDER).with_smoothing(1.0),
            ParallaxController::attach(Entity::PLACEHOLDER).with_smoothing(3.0),
        ];

        apply_scene_tunables(
            &asset,
            &mut parallax_config,
            &mut camera_config,
            controllers.iter_mut(),
        );

        assert_eq!(parallax_config.smoothing, 12.0);
        assert_eq!(parallax_config.depth_axis, Dir3::NEG_Z);
        assert_eq!(parallax_config.layers.len(), 3);
        assert_eq!(camera_config.pan_speed, 90.0);
        assert!(controllers.iter().all(|c| c.smoothing() == 12.0));
        assert!(controllers.iter().all(|c| c.depth_axis() == Vec3::Z));
    }
}
