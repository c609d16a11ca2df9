//! Router configuration dialog and the blocking notice modal.

use eframe::egui;

use crate::app::NetUiApp;

pub fn render_router_dialog(ctx: &egui::Context, app: &mut NetUiApp) {
    let Some(router) = app.workspace.pending_router() else {
        return;
    };
    let response = egui::Modal::new(egui::Id::new("router_config_modal")).show(ctx, |ui| {
        ui.heading("Configure router");
        ui.label(format!("Router {router}"));
        egui::Grid::new("router_config_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("IP address");
                ui.add(egui::TextEdit::singleline(&mut app.router_ip_input).hint_text("192.168.1.1"));
                ui.end_row();
                ui.label("Subnet mask");
                ui.add(
                    egui::TextEdit::singleline(&mut app.router_mask_input)
                        .hint_text("255.255.255.0"),
                );
                ui.end_row();
            });
        let mut cancelled = false;
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                app.confirm_router_config();
            }
            cancelled = ui.button("Cancel").clicked();
        });
        cancelled
    });
    if response.inner || response.should_close() {
        app.cancel_router_config();
    }
}

/// Notice or error that blocks the rest of the UI until acknowledged.
pub fn render_modal(ctx: &egui::Context, app: &mut NetUiApp) {
    let Some(message) = app.modal.as_ref() else {
        return;
    };
    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.heading(message.title);
        ui.label(&message.text);
        ui.button("OK").clicked()
    });
    if response.inner || response.should_close() {
        app.dismiss_modal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use net_core::ecs::{DeviceRole, DragPayload};
    use net_core::params::WorkspaceParams;
    use net_core::spatial::Point;

    fn run_frame(ctx: &egui::Context, app: &mut NetUiApp) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_router_dialog(ctx, app);
            render_modal(ctx, app);
        });
    }

    #[test]
    fn notice_stays_open_until_acknowledged() {
        let ctx = egui::Context::default();
        let mut app = NetUiApp::with_params(WorkspaceParams::default().with_seed(1));
        app.handle_drop(DragPayload::Device(DeviceRole::Server), Point::new(20.0, 20.0));
        app.play();
        app.stop();

        run_frame(&ctx, &mut app);
        run_frame(&ctx, &mut app);

        assert!(app.is_blocked());
        app.play();
        assert!(!app.workspace.is_running());
    }

    #[test]
    fn router_dialog_stays_open_while_pending() {
        let ctx = egui::Context::default();
        let mut app = NetUiApp::with_params(WorkspaceParams::default().with_seed(1));
        app.handle_drop(DragPayload::Device(DeviceRole::Router), Point::new(20.0, 20.0));

        run_frame(&ctx, &mut app);
        run_frame(&ctx, &mut app);

        assert!(app.workspace.pending_router().is_some());
    }
}
