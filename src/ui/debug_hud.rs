use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::parallax::controller::ParallaxController;

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("Camera X: 0.0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    camera_query: Query<&Transform, With<MainCamera>>,
    controller_query: Query<&ParallaxController>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    **text = hud_line(camera_tf.translation.x, controller_query.iter().next());
}

fn hud_line(camera_x: f32, controller: Option<&ParallaxController>) -> String {
    match controller {
        Some(controller) => format!(
            "Camera X: {camera_x:.1}  smoothing {:.2}  (A/D to pan, F3 inspector)",
            controller.smoothing()
        ),
        None => format!("Camera X: {camera_x:.1}  (no parallax)"),
    }
}
