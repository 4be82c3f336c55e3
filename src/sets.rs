use bevy::prelude::*;

/// Top-level system ordering sets for the frame.
///
/// Configured as a chain: Camera → Parallax → Ui, so parallax always sees
/// the camera position of the current frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Camera,
    Parallax,
    Ui,
}

pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (GameSet::Camera, GameSet::Parallax, GameSet::Ui).chain(),
    );
}
