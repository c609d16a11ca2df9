use eframe::egui;

use crate::app::NetUiApp;
use crate::ui::controls::render_control_panel;
use crate::ui::dialogs::{render_modal, render_router_dialog};
use crate::ui::palette::render_palette;
use crate::ui::rendering::render_workspace;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Network Workspace",
        options,
        Box::new(|_cc| Ok(Box::new(NetUiApp::new()))),
    )
}

impl eframe::App for NetUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One simulation frame per repaint.
        if self.workspace.is_running() {
            self.tick();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            render_control_panel(ui, self);
        });

        egui::SidePanel::left("palette")
            .resizable(false)
            .show(ctx, |ui| {
                render_palette(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                render_workspace(ui, self);
            });
        });

        render_router_dialog(ctx, self);
        render_modal(ctx, self);

        // Also covers a Play click handled earlier in this frame.
        if self.needs_repaint() {
            ctx.request_repaint();
        }
    }
}
