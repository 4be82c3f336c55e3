use bevy::prelude::*;
use thiserror::Error;

/// Smoothing used when the host does not configure one.
pub const DEFAULT_SMOOTHING: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParallaxError {
    #[error("parallax camera {0} does not exist or has no Transform")]
    MissingCamera(Entity),
    #[error("parallax layer #{index} ({entity}) does not exist or is not a ParallaxLayer")]
    MissingLayer { index: usize, entity: Entity },
    #[error("parallax layer #{index} ({entity}) is listed more than once")]
    DuplicateLayer { index: usize, entity: Entity },
    #[error("expected {expected} layer positions, got {found}")]
    LayerCountMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Uninitialized,
    Running,
}

/// Shifts a fixed list of layers horizontally against camera motion.
///
/// The camera and the layers are entities owned by the host; the controller
/// only remembers their handles. Scale factors are derived once, on the first
/// frame the controller is seen, from each layer's world depth:
///   `scale = -(position · depth_axis)`
///
/// The camera is tracked by world position, so it may sit under a moving rig.
/// Layers are moved on their local `Transform`, in their parent's frame.
///
/// Every frame afterwards each layer moves toward
///   `x + (previous_camera_x - camera_x) * scale`
/// by a fraction `clamp(smoothing * dt, 0, 1)`. Y and Z are never touched.
#[derive(Component, Debug, Clone)]
pub struct ParallaxController {
    camera: Entity,
    layers: Vec<Entity>,
    smoothing: f32,
    depth_axis: Vec3,
    scales: Vec<f32>,
    previous_camera_position: Vec3,
    state: ControllerState,
}

impl ParallaxController {
    /// Binds a controller to `camera`. Layers and tuning are added with the
    /// `with_*` builders before the component is spawned.
    pub fn attach(camera: Entity) -> Self {
        Self {
            camera,
            layers: Vec::new(),
            smoothing: DEFAULT_SMOOTHING,
            depth_axis: Vec3::Z,
            scales: Vec::new(),
            previous_camera_position: Vec3::ZERO,
            state: ControllerState::Uninitialized,
        }
    }

    /// Each entity may appear once; repeats are rejected at initialization.
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = Entity>) -> Self {
        self.layers = layers.into_iter().collect();
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Axis the layer depth is measured along. Bevy 2D cameras look down
    /// `-Z`, so 2D scenes want `Dir3::NEG_Z` here.
    pub fn with_depth_axis(mut self, axis: Dir3) -> Self {
        self.depth_axis = *axis;
        self
    }

    pub fn camera(&self) -> Entity {
        self.camera
    }

    pub fn layers(&self) -> &[Entity] {
        &self.layers
    }

    /// Per-layer scale factors, index-aligned with [`Self::layers`]. Empty
    /// until the controller is initialized.
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Zero or negative values freeze every layer in place.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing;
    }

    pub fn depth_axis(&self) -> Vec3 {
        self.depth_axis
    }

    pub fn previous_camera_position(&self) -> Vec3 {
        self.previous_camera_position
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Fails on the second occurrence of any layer entity.
    pub fn check_distinct_layers(&self) -> Result<(), ParallaxError> {
        match self
            .layers
            .iter()
            .enumerate()
            .find(|(index, entity)| self.layers[..*index].contains(*entity))
        {
            Some((index, &entity)) => Err(ParallaxError::DuplicateLayer { index, entity }),
            None => Ok(()),
        }
    }

    /// Snapshots the camera and derives one scale per layer from its depth.
    pub fn initialize(
        &mut self,
        camera_position: Vec3,
        layer_positions: &[Vec3],
    ) -> Result<(), ParallaxError> {
        self.check_layer_count(layer_positions.len())?;

        self.previous_camera_position = camera_position;
        self.scales = layer_positions
            .iter()
            .map(|position| scale_for_depth(position.dot(self.depth_axis)))
            .collect();
        self.state = ControllerState::Running;
        Ok(())
    }

    /// Moves every layer one frame and records `camera_position` for the
    /// next one. No-op until the controller is initialized.
    pub fn advance(
        &mut self,
        camera_position: Vec3,
        layer_positions: &mut [Vec3],
        delta_secs: f32,
    ) -> Result<(), ParallaxError> {
        if !self.is_running() {
            return Ok(());
        }
        self.check_layer_count(layer_positions.len())?;

        let camera_dx = self.previous_camera_position.x - camera_position.x;
        let fraction = interpolation_fraction(self.smoothing, delta_secs);
        for (position, &scale) in layer_positions.iter_mut().zip(&self.scales) {
            *position = scroll_layer(*position, camera_dx, scale, fraction);
        }

        // Committed last so a rejected frame leaves the displacement intact.
        self.previous_camera_position = camera_position;
        Ok(())
    }

    fn check_layer_count(&self, found: usize) -> Result<(), ParallaxError> {
        if found == self.layers.len() {
            Ok(())
        } else {
            Err(ParallaxError::LayerCountMismatch {
                expected: self.layers.len(),
                found,
            })
        }
    }
}

/// Layers further along the depth axis get a negative scale and trail the
/// camera; layers behind it get a positive one and sweep past.
pub fn scale_for_depth(depth: f32) -> f32 {
    -depth
}

pub fn interpolation_fraction(smoothing: f32, delta_secs: f32) -> f32 {
    (smoothing * delta_secs).clamp(0.0, 1.0)
}

/// One layer, one frame. Only `x` is interpolated.
pub fn scroll_layer(position: Vec3, camera_dx: f32, scale: f32, fraction: f32) -> Vec3 {
    let target_x = position.x + camera_dx * scale;
    Vec3::new(
        position.x + (target_x - position.x) * fraction,
        position.y,
        position.z,
    )
}
