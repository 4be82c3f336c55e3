pub mod assets;
pub mod camera;
pub mod hot_reload;
pub mod loader;

use bevy::prelude::*;

use assets::ParallaxSceneAsset;
use loader::RonLoader;

/// Scene loaded at startup, relative to the asset root.
pub const SCENE_PATH: &str = "scenes/default.parallax.ron";

/// Application state: Loading waits for assets, InGame runs the scene.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Keeps the scene handle alive for hot-reload detection.
#[derive(Resource)]
pub struct RegistryHandles {
    pub scene: Handle<ParallaxSceneAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<ParallaxSceneAsset>()
            .register_asset_loader(RonLoader::<ParallaxSceneAsset>::new(&["parallax.ron"]))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_scene.run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let scene = asset_server.load::<ParallaxSceneAsset>(SCENE_PATH);
    commands.insert_resource(RegistryHandles { scene });
}

fn check_loading(
    mut commands: Commands,
    handles: Res<RegistryHandles>,
    scene_assets: Res<Assets<ParallaxSceneAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(scene) = scene_assets.get(&handles.scene) else {
        return; // not loaded yet
    };

    commands.insert_resource(scene.parallax_config());
    commands.insert_resource(scene.camera.clone());

    next_state.set(AppState::InGame);
    info!(
        "Scene '{}' loaded ({} parallax layers), entering InGame state",
        SCENE_PATH,
        scene.layers.len()
    );
}
