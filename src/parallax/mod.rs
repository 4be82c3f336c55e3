pub mod config;
pub mod controller;
pub mod scroll;
pub mod spawn;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

/// Drives every [`controller::ParallaxController`] in the world. Has no
/// state or asset requirements of its own.
pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (scroll::initialize_parallax, scroll::parallax_scroll)
                .chain()
                .in_set(GameSet::Parallax),
        );
    }
}

/// Spawns the configured layers once the scene asset is loaded.
pub struct ParallaxScenePlugin;

impl Plugin for ParallaxScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn::spawn_parallax_scene);
    }
}
