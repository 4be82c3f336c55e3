use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use super::controller::{ParallaxController, ParallaxError};
use super::spawn::ParallaxLayer;

/// Binds freshly spawned controllers to their camera and derives the
/// per-layer scale table.
///
/// Runs every frame but only touches controllers that are not running yet,
/// so it doubles as the one-time initialization hook. A controller that
/// fails stays uninitialized; the others are still set up.
pub fn initialize_parallax(
    mut controllers: Query<(Entity, &mut ParallaxController)>,
    transforms: TransformHelper,
    layers: Query<(), With<ParallaxLayer>>,
) -> Result {
    let mut first_error = None;

    for (entity, mut controller) in &mut controllers {
        if controller.is_running() {
            continue;
        }
        if let Err(err) = initialize_controller(&mut controller, &transforms, &layers) {
            keep_first(&mut first_error, err);
            continue;
        }

        if controller.smoothing() <= 0.0 {
            warn!(
                "Parallax controller {entity} has smoothing {}; its layers will not move",
                controller.smoothing()
            );
        }
        info!(
            "Parallax controller {entity} attached to camera {} with {} layer(s)",
            controller.camera(),
            controller.layers().len()
        );
    }
    first_error.map_or(Ok(()), |err| Err(err.into()))
}

/// Per-frame parallax step.
///
/// For each controller the camera position is read once, every layer
/// position is gathered, and nothing is written back unless that
/// controller's whole frame succeeded.
pub fn parallax_scroll(
    time: Res<Time>,
    mut controllers: Query<&mut ParallaxController>,
    mut transforms: ParamSet<(TransformHelper, Query<&mut Transform, With<ParallaxLayer>>)>,
) -> Result {
    let dt = time.delta_secs();
    let mut first_error = None;

    for mut controller in &mut controllers {
        if !controller.is_running() {
            continue;
        }
        if let Err(err) = scroll_controller(&mut controller, &mut transforms, dt) {
            keep_first(&mut first_error, err);
        }
    }
    first_error.map_or(Ok(()), |err| Err(err.into()))
}

fn initialize_controller(
    controller: &mut ParallaxController,
    transforms: &TransformHelper,
    layers: &Query<(), With<ParallaxLayer>>,
) -> Result<(), ParallaxError> {
    controller.check_distinct_layers()?;

    let camera = controller.camera();
    let camera_position =
        world_position(transforms, camera).ok_or(ParallaxError::MissingCamera(camera))?;
    let positions = layer_positions(controller.layers(), |layer| {
        layers
            .contains(layer)
            .then(|| world_position(transforms, layer))
            .flatten()
    })?;

    controller.initialize(camera_position, &positions)
}

fn scroll_controller(
    controller: &mut ParallaxController,
    transforms: &mut ParamSet<(TransformHelper, Query<&mut Transform, With<ParallaxLayer>>)>,
    dt: f32,
) -> Result<(), ParallaxError> {
    let camera = controller.camera();
    let camera_position =
        world_position(&transforms.p0(), camera).ok_or(ParallaxError::MissingCamera(camera))?;

    let mut layers = transforms.p1();
    let mut positions = layer_positions(controller.layers(), |layer| {
        layers.get(layer).ok().map(|tf| tf.translation)
    })?;

    controller.advance(camera_position, &mut positions, dt)?;

    for (&layer, position) in controller.layers().iter().zip(positions) {
        if let Ok(mut transform) = layers.get_mut(layer) {
            transform.translation = position;
        }
    }
    Ok(())
}

/// Up-to-date world position, walking the hierarchy so a parent moved
/// earlier this frame is already accounted for.
fn world_position(transforms: &TransformHelper, entity: Entity) -> Option<Vec3> {
    transforms
        .compute_global_transform(entity)
        .ok()
        .map(|global| global.translation())
}

fn keep_first(first: &mut Option<ParallaxError>, err: ParallaxError) {
    if first.is_some() {
        error!("{err}");
    } else {
        *first = Some(err);
    }
}

fn layer_positions(
    layers: &[Entity],
    mut position_of: impl FnMut(Entity) -> Option<Vec3>,
) -> Result<Vec<Vec3>, ParallaxError> {
    layers
        .iter()
        .enumerate()
        .map(|(index, &entity)| {
            position_of(entity).ok_or(ParallaxError::MissingLayer { index, entity })
        })
        .collect()
}
