//! Rendering of the workspace canvas: devices, cables and packets.

use eframe::egui::{self, Align2, FontId, Sense, Stroke, StrokeKind};
use net_core::ecs::DragPayload;
use net_core::spatial::{icon_center, Point};

use crate::app::NetUiApp;
use crate::ui::constants::{CABLE_STROKE_WIDTH, WORKSPACE_CORNER_RADIUS};
use crate::ui::utils::{
    cable_color, device_color, device_label, packet_color, to_screen, to_workspace,
    workspace_background,
};

/// Paint the workspace and route palette drops into the app.
pub fn render_workspace(ui: &mut egui::Ui, app: &mut NetUiApp) {
    let params = app.workspace.params();
    let size = egui::vec2(params.canvas_width, params.canvas_height);
    let icon_size = params.icon_size;
    let packet_radius = params.packet_radius_px;

    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, WORKSPACE_CORNER_RADIUS, workspace_background());
    painter.rect_stroke(
        rect,
        WORKSPACE_CORNER_RADIUS,
        Stroke::new(1.0, egui::Color32::from_gray(160)),
        StrokeKind::Inside,
    );

    let cable_stroke = Stroke::new(CABLE_STROKE_WIDTH, cable_color());
    for line in app.workspace.cable_lines() {
        painter.line_segment(
            [to_screen(rect, line.from), to_screen(rect, line.to)],
            cable_stroke,
        );
    }

    for device in app.workspace.devices() {
        let top_left = to_screen(rect, device.position);
        let icon = egui::Rect::from_min_size(top_left, egui::vec2(icon_size, icon_size));
        painter.rect_filled(icon, WORKSPACE_CORNER_RADIUS, device_color(device.role));
        painter.text(
            to_screen(rect, icon_center(device.position, icon_size)),
            Align2::CENTER_CENTER,
            device.id.to_string(),
            FontId::monospace(12.0),
            egui::Color32::BLACK,
        );
        painter.text(
            icon.center_bottom() + egui::vec2(0.0, 2.0),
            Align2::CENTER_TOP,
            device_label(&device),
            FontId::proportional(11.0),
            egui::Color32::DARK_GRAY,
        );
    }

    for packet in app.workspace.packets() {
        painter.circle_filled(
            to_screen(rect, packet.position),
            packet_radius,
            packet_color(packet.phase.color()),
        );
    }

    if let Some(payload) = response.dnd_release_payload::<DragPayload>() {
        if let Some(pointer) = ui.input(|input| input.pointer.interact_pos()) {
            let at: Point = to_workspace(rect, pointer);
            app.handle_drop(*payload, at);
        }
    }
}
