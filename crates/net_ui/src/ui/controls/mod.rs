//! Control panel UI for simulation actions and workspace settings.

mod settings;
mod topbar;

use eframe::egui;

use crate::app::NetUiApp;
use crate::ui::controls::settings::render_workspace_settings;
use crate::ui::controls::topbar::render_top_controls;

pub fn render_control_panel(ui: &mut egui::Ui, app: &mut NetUiApp) {
    render_top_controls(ui, app);

    egui::CollapsingHeader::new("Workspace settings")
        .default_open(false)
        .show(ui, |ui| {
            render_workspace_settings(ui, app);
        });
}
