use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use parallax_scroll::camera::CameraPlugin;
use parallax_scroll::parallax::{ParallaxPlugin, ParallaxScenePlugin};
use parallax_scroll::registry::RegistryPlugin;
use parallax_scroll::sets::configure_game_sets;
use parallax_scroll::ui::UiPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Parallax Scroll".into(),
            resolution: (1280, 720).into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(RegistryPlugin)
    .add_plugins(CameraPlugin)
    .add_plugins(ParallaxPlugin)
    .add_plugins(ParallaxScenePlugin)
    .add_plugins(UiPlugin);
    configure_game_sets(&mut app);
    app.run();
}
