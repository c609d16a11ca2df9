use eframe::egui;
use net_core::ecs::DeviceRole;

use crate::app::NetUiApp;

pub(super) fn render_top_controls(ui: &mut egui::Ui, app: &mut NetUiApp) {
    let running = app.workspace.is_running();
    ui.horizontal(|ui| {
        if ui.add_enabled(!running, egui::Button::new("Play")).clicked() {
            app.play();
        }
        if ui.button("Stop").clicked() {
            app.stop();
        }
        if ui
            .add_enabled(!running, egui::Button::new("Reset"))
            .clicked()
        {
            app.reset();
        }
        let has_router = app
            .workspace
            .devices()
            .iter()
            .any(|device| device.role == DeviceRole::Router);
        if ui
            .add_enabled(has_router, egui::Button::new("Configure router"))
            .clicked()
        {
            app.configure_router();
        }

        ui.separator();
        ui.label(format!("Frame: {}", app.workspace.frame()));
        ui.label(format!("Devices: {}", app.workspace.devices().len()));
        ui.label(format!("Packets: {}", app.workspace.packets().len()));
        ui.label(format!("Cables: {}", app.workspace.cable_lines().len()));
        if app.workspace.selection_len() > 0 {
            ui.label("Cable: 1 end attached");
        }
    });

    if !app.status_line.is_empty() {
        ui.colored_label(egui::Color32::from_rgb(220, 180, 80), &app.status_line);
    }
}
