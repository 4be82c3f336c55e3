pub mod fixtures {
    use std::time::Duration;

    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;

    use crate::parallax::ParallaxPlugin;
    use crate::parallax::config::{ParallaxConfig, ParallaxLayerDef};
    use crate::parallax::spawn::ParallaxLayer;
    use crate::registry::camera::CameraConfig;

    /// Fixed frame time every test app advances by (after its first update,
    /// which always reports dt = 0).
    pub const FRAME: Duration = Duration::from_millis(100);

    pub fn test_parallax_config() -> ParallaxConfig {
        let layer = |name: &str, z: f32, y: f32| ParallaxLayerDef {
            name: name.into(),
            color: [0.5, 0.5, 0.5],
            size: [2000.0, 200.0],
            position: [0.0, y, z],
        };
        ParallaxConfig {
            smoothing: 4.0,
            depth_axis: Dir3::NEG_Z,
            layers: vec![
                layer("sky", -0.9, 0.0),
                layer("hills", -0.5, -40.0),
                layer("bushes", 0.3, -80.0),
            ],
        }
    }

    pub fn test_camera_config() -> CameraConfig {
        CameraConfig { pan_speed: 300.0 }
    }

    /// Create a minimal Bevy App with the parallax systems and a
    /// deterministic clock.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.add_plugins(ParallaxPlugin);
        app
    }

    pub fn spawn_camera(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn(Transform::from_translation(position))
            .id()
    }

    pub fn spawn_layer(app: &mut App, name: &str, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                ParallaxLayer { name: name.into() },
                Transform::from_translation(position),
            ))
            .id()
    }

    pub fn move_camera_x(app: &mut App, camera: Entity, x: f32) {
        app.world_mut()
            .get_mut::<Transform>(camera)
            .unwrap()
            .translation
            .x = x;
    }
}
