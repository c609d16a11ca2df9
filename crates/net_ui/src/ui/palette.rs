//! The palette of draggable device and cable tiles.

use eframe::egui::{self, Align2, FontId, Sense};
use net_core::ecs::{DeviceRole, DragPayload};
use tracing::warn;

use crate::ui::constants::{PALETTE_IDENTITIES, PALETTE_TILE_SIZE, WORKSPACE_CORNER_RADIUS};
use crate::ui::utils::{cable_color, device_color};

pub fn render_palette(ui: &mut egui::Ui) {
    ui.heading("Palette");
    ui.add_space(4.0);
    for identity in PALETTE_IDENTITIES {
        let payload = match identity.parse::<DragPayload>() {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "skipping palette entry");
                continue;
            }
        };
        let id = egui::Id::new(("palette", identity));
        ui.dnd_drag_source(id, payload, |ui| {
            palette_tile(ui, payload, identity);
        });
        ui.add_space(6.0);
    }
    ui.add_space(8.0);
    ui.small("Drag onto the workspace.\nDrop the cable twice to connect.");
}

fn palette_tile(ui: &mut egui::Ui, payload: DragPayload, identity: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(PALETTE_TILE_SIZE, PALETTE_TILE_SIZE), Sense::hover());
    let painter = ui.painter();
    match payload {
        DragPayload::Device(role) => {
            painter.rect_filled(rect, WORKSPACE_CORNER_RADIUS, device_color(role));
        }
        DragPayload::Cable => {
            let inset = rect.shrink(10.0);
            painter.line_segment(
                [inset.left_bottom(), inset.right_top()],
                egui::Stroke::new(3.0, cable_color()),
            );
        }
    }
    let text_color = match payload {
        DragPayload::Device(DeviceRole::Router) | DragPayload::Cable => egui::Color32::BLACK,
        DragPayload::Device(_) => egui::Color32::WHITE,
    };
    painter.text(
        rect.center_bottom() - egui::vec2(0.0, 4.0),
        Align2::CENTER_BOTTOM,
        identity,
        FontId::proportional(11.0),
        text_color,
    );
}
