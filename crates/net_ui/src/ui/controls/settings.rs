use eframe::egui;

use net_core::params::StepPolicy;

use crate::app::NetUiApp;

pub(super) fn render_workspace_settings(ui: &mut egui::Ui, app: &mut NetUiApp) {
    let can_edit = !app.workspace.is_running();
    let draft = &mut app.settings_draft;

    ui.columns(3, |columns| {
        columns[0].vertical(|ui| {
            ui.label("Canvas");
            ui.horizontal(|ui| {
                ui.label("Width");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.canvas_width).range(100.0..=4000.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Height");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.canvas_height).range(100.0..=4000.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Icon size")
                    .on_hover_text("Edge length of device icons; also used to find icon centres");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.icon_size).range(8.0..=256.0),
                );
            });
        });

        columns[1].vertical(|ui| {
            ui.label("Packets");
            ui.horizontal(|ui| {
                ui.label("Step (px)");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.packet_step_px)
                        .speed(0.1)
                        .range(0.1..=100.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Arrival (px)")
                    .on_hover_text("A packet arrives once both axes are closer than this");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.arrival_threshold_px)
                        .speed(0.1)
                        .range(0.1..=100.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Radius (px)");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut draft.packet_radius_px).range(1.0..=50.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Movement");
                ui.add_enabled_ui(can_edit, |ui| {
                    egui::ComboBox::from_id_salt("step_policy")
                        .selected_text(step_policy_label(draft.step_policy))
                        .show_ui(ui, |ui| {
                            for policy in [StepPolicy::IncreasingOnly, StepPolicy::Toward] {
                                ui.selectable_value(
                                    &mut draft.step_policy,
                                    policy,
                                    step_policy_label(policy),
                                );
                            }
                        });
                });
            });
        });

        columns[2].vertical(|ui| {
            ui.label("Addressing");
            ui.horizontal(|ui| {
                ui.label("Fallback subnet")
                    .on_hover_text("Prefix used while no router is configured");
                ui.add_enabled(
                    can_edit,
                    egui::TextEdit::singleline(&mut draft.fallback_subnet).desired_width(110.0),
                );
            });
            ui.horizontal(|ui| {
                let mut seeded = draft.seed.is_some();
                if ui
                    .add_enabled(can_edit, egui::Checkbox::new(&mut seeded, "Fixed seed"))
                    .changed()
                {
                    draft.seed = seeded.then_some(0);
                }
                if let Some(seed) = draft.seed.as_mut() {
                    ui.add_enabled(can_edit, egui::DragValue::new(seed));
                }
            });
        });
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(can_edit, egui::Button::new("Apply")).clicked() {
            app.apply_settings();
        }
        if ui
            .add_enabled(
                can_edit && app.settings_path.is_some(),
                egui::Button::new("Save settings"),
            )
            .clicked()
        {
            app.save_settings();
        }
    });
}

fn step_policy_label(policy: StepPolicy) -> &'static str {
    match policy {
        StepPolicy::IncreasingOnly => "Increasing only",
        StepPolicy::Toward => "Toward target",
    }
}
