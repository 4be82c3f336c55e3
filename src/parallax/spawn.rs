use bevy::prelude::*;

use crate::camera::MainCamera;

use super::config::ParallaxConfig;
use super::controller::ParallaxController;

/// Marker component for an entity whose horizontal position is driven by a
/// [`ParallaxController`].
#[derive(Component, Debug, Clone)]
pub struct ParallaxLayer {
    pub name: String,
}

/// Spawn one sprite per configured layer plus the controller that drives
/// them, bound to the main camera.
pub fn spawn_parallax_scene(
    mut commands: Commands,
    config: Res<ParallaxConfig>,
    camera_query: Query<Entity, With<MainCamera>>,
) -> Result {
    let camera = camera_query.single()?;
    spawn_layers(&mut commands, &config, camera);
    Ok(())
}

/// Returns the controller entity. Layers are handed to the controller in
/// definition order.
pub fn spawn_layers(commands: &mut Commands, config: &ParallaxConfig, camera: Entity) -> Entity {
    let layers: Vec<Entity> = config
        .layers
        .iter()
        .map(|layer_def| {
            let [r, g, b] = layer_def.color;
            let [w, h] = layer_def.size;
            commands
                .spawn((
                    ParallaxLayer {
                        name: layer_def.name.clone(),
                    },
                    Sprite::from_color(Color::srgb(r, g, b), Vec2::new(w, h)),
                    Transform::from_translation(layer_def.translation()),
                ))
                .id()
        })
        .collect();

    info!("Spawned {} parallax layers", layers.len());

    commands
        .spawn((
            Name::new("Parallax"),
            ParallaxController::attach(camera)
                .with_layers(layers)
                .with_smoothing(config.smoothing)
                .with_depth_axis(config.depth_axis),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn spawns_layers_in_definition_order() {
        let mut app = fixtures::test_app();
        app.insert_resource(fixtures::test_parallax_config());
        app.world_mut()
            .spawn((MainCamera, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.add_systems(Startup, spawn_parallax_scene);

        app.update();

        let mut query = app.world_mut().query::<&ParallaxController>();
        let controller = query.single(app.world()).unwrap().clone();
        assert_eq!(controller.layers().len(), 3);
        assert_eq!(controller.smoothing(), 4.0);
        assert_eq!(controller.depth_axis(), Vec3::NEG_Z);

        let names: Vec<String> = controller
            .layers()
            .iter()
            .map(|&e| app.world().get::<ParallaxLayer>(e).unwrap().name.clone())
            .collect();
        assert_eq!(names, ["sky", "hills", "bushes"]);

        let hills = app
            .world()
            .get::<Transform>(controller.layers()[1])
            .unwrap();
        assert_eq!(hills.translation, Vec3::new(0.0, -40.0, -0.5));
    }

    #[test]
    fn scene_scales_follow_depth_axis() {
        let mut app = fixtures::test_app();
        app.insert_resource(fixtures::test_parallax_config());
        app.world_mut()
            .spawn((MainCamera, Transform::from_xyz(0.0, 0.0, 0.0)));
        app.add_systems(Startup, spawn_parallax_scene);

        // Startup spawns, the first Update initializes.
        app.update();

        let mut query = app.world_mut().query::<&ParallaxController>();
        let controller = query.single(app.world()).unwrap();
        assert!(controller.is_running());
        let scales = controller.scales();
        // far layers trail the camera, the foreground sweeps past it
        assert!(scales[0] < scales[1]);
        assert!(scales[1] < 0.0);
        assert!(scales[2] > 0.0);
    }
}
