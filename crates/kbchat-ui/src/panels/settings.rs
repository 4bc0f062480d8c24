//! Settings panel — backend parameters edited on a draft copy.
//! Nothing reaches the live Settings until the user clicks Save.

use egui::{self, RichText, Vec2};

use kbchat_types::settings::{Model, Settings};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
pub enum SettingsAction {
    /// Keep the panel open
    None,
    /// Commit the draft and close the panel
    Save(Settings),
    /// Discard the draft and close the panel
    Cancel,
}

/// Render the settings panel against a draft copy of the settings.
pub fn settings_panel(ui: &mut egui::Ui, draft: &mut Settings) -> SettingsAction {
    let mut action = SettingsAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Model").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("settings_model")
                .selected_text(draft.model.label())
                .show_ui(ui, |ui| {
                    for model in Model::all() {
                        ui.selectable_value(&mut draft.model, *model, model.label());
                    }
                });

            ui.add_space(4.0);

            ui.label(RichText::new("Temperature").color(TEXT_SECONDARY).small());
            ui.add(egui::Slider::new(&mut draft.temperature, 0.0..=1.0).step_by(0.1));

            ui.add_space(4.0);

            ui.label(RichText::new("Max Tokens").color(TEXT_SECONDARY).small());
            ui.add(egui::DragValue::new(&mut draft.max_tokens).range(1..=32768));

            ui.add_space(4.0);

            ui.label(
                RichText::new("Similarity Threshold")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.add(egui::Slider::new(&mut draft.similarity_threshold, 0.0..=1.0).step_by(0.05));

            ui.add_space(4.0);

            ui.label(
                RichText::new("Max Sources Per Query")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.add(egui::DragValue::new(&mut draft.max_sources_per_query).range(1..=10));

            ui.add_space(4.0);

            ui.label(RichText::new("System Prompt").color(TEXT_SECONDARY).small());
            ui.add(
                egui::TextEdit::multiline(&mut draft.system_prompt)
                    .desired_rows(4)
                    .desired_width(ui.available_width()),
            );

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(
                            RichText::new("Save Changes").color(TEXT_PRIMARY).strong(),
                        )
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(110.0, 28.0)),
                    )
                    .clicked()
                {
                    action = SettingsAction::Save(draft.clone());
                }

                if ui
                    .add(
                        egui::Button::new(RichText::new("Cancel").color(TEXT_SECONDARY))
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(80.0, 28.0)),
                    )
                    .clicked()
                {
                    action = SettingsAction::Cancel;
                }
            });
        });

    action
}
