//! Utility functions for the UI: colors, coordinate conversions, labels.

use eframe::egui::{self, Color32};
use net_core::ecs::{DeviceRole, PacketColor};
use net_core::spatial::Point;
use net_core::workspace::DeviceView;

pub fn packet_color(color: PacketColor) -> Color32 {
    match color {
        PacketColor::Blue => Color32::from_rgb(40, 90, 220),
        PacketColor::Red => Color32::from_rgb(215, 45, 45),
        PacketColor::Green => Color32::from_rgb(45, 160, 75),
    }
}

pub fn device_color(role: DeviceRole) -> Color32 {
    match role {
        DeviceRole::Router => Color32::from_rgb(240, 170, 60),
        DeviceRole::Server => Color32::from_rgb(120, 100, 200),
        DeviceRole::Host => Color32::from_rgb(90, 170, 190),
    }
}

pub fn cable_color() -> Color32 {
    Color32::BLACK
}

pub fn workspace_background() -> Color32 {
    Color32::from_gray(235)
}

/// Workspace-relative point to screen position inside `rect`.
pub fn to_screen(rect: egui::Rect, point: Point) -> egui::Pos2 {
    egui::pos2(rect.left() + point.x, rect.top() + point.y)
}

/// Screen position to workspace-relative point.
pub fn to_workspace(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::new(pos.x - rect.left(), pos.y - rect.top())
}

pub fn device_label(device: &DeviceView) -> String {
    match (&device.ip, &device.mask) {
        (Some(ip), Some(mask)) => format!("{}\n{ip}/{mask}", device.role),
        (Some(ip), None) => format!("{}\n{ip}", device.role),
        (None, _) => format!("{}\n(unconfigured)", device.role),
    }
}
