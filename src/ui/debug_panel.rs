use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::parallax::controller::ParallaxController;
use crate::parallax::spawn::ParallaxLayer;

const SMOOTHING_RANGE: std::ops::RangeInclusive<f32> = 0.0..=60.0;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the parallax inspector: camera, per-layer state, live smoothing.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    diagnostics: Res<DiagnosticsStore>,
    camera_query: Query<&Transform, With<MainCamera>>,
    mut controllers: Query<(Entity, &mut ParallaxController)>,
    layers: Query<(&ParallaxLayer, &Transform)>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(300.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Parallax");
            ui.separator();

            egui::Grid::new("camera_grid")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label("FPS:");
                    let fps_text = diagnostics
                        .get(&FrameTimeDiagnosticsPlugin::FPS)
                        .and_then(|d| d.smoothed())
                        .map(|v| format!("{v:.1}"))
                        .unwrap_or_else(|| "...".to_string());
                    ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                    ui.end_row();

                    ui.label("Camera:");
                    match camera_query.single() {
                        Ok(tf) => ui.monospace(format!(
                            "{:.1}, {:.1}",
                            tf.translation.x, tf.translation.y
                        )),
                        Err(_) => ui.label("none"),
                    };
                    ui.end_row();
                });

            for (entity, mut controller) in &mut controllers {
                egui::CollapsingHeader::new(
                    egui::RichText::new(format!("Controller {entity}")).strong(),
                )
                .default_open(true)
                .show(ui, |ui| {
                    let mut smoothing = controller.smoothing();
                    if ui
                        .add(egui::Slider::new(&mut smoothing, SMOOTHING_RANGE).text("smoothing"))
                        .changed()
                    {
                        controller.set_smoothing(smoothing);
                    }

                    ui.label(format!(
                        "State: {:?}  prev camera x: {:.1}",
                        controller.state(),
                        controller.previous_camera_position().x
                    ));

                    egui::Grid::new(("layer_grid", entity))
                        .num_columns(3)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("Layer");
                            ui.strong("Scale");
                            ui.strong("Position");
                            ui.end_row();

                            for (&layer, &scale) in
                                controller.layers().iter().zip(controller.scales())
                            {
                                match layers.get(layer) {
                                    Ok((marker, tf)) => {
                                        ui.label(&marker.name);
                                        ui.monospace(format!("{scale:+.2}"));
                                        ui.monospace(format!(
                                            "{:.1}, {:.1}, {:.2}",
                                            tf.translation.x, tf.translation.y, tf.translation.z
                                        ));
                                    }
                                    Err(_) => {
                                        ui.colored_label(egui::Color32::LIGHT_RED, "missing");
                                        ui.monospace(format!("{scale:+.2}"));
                                        ui.label("-");
                                    }
                                }
                                ui.end_row();
                            }
                        });
                });
            }
        });

    Ok(())
}
