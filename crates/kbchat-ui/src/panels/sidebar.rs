//! Sidebar panel — conversation list, search, and per-conversation actions.

use egui::{self, Align, Layout, RichText, ScrollArea};

use kbchat_core::store::ConversationStore;
use crate::state::{filter_conversations, format_date, normalized_title, UiState};
use crate::theme::*;

/// User intent dispatched from the sidebar
pub enum SidebarAction {
    NewChat,
    Select(String),
    Delete(String),
    Rename(String, String),
    Clear(String),
    OpenSettings,
}

/// Render the sidebar. Returns at most one action per frame.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    store: &ConversationStore,
    state: &mut UiState,
) -> Option<SidebarAction> {
    let mut action = None;

    ui.vertical(|ui| {
        ui.add_space(4.0);
        if ui
            .add_sized(
                [ui.available_width(), 28.0],
                egui::Button::new(RichText::new("+ New Chat").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            )
            .clicked()
        {
            action = Some(SidebarAction::NewChat);
        }

        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.search_term)
                .hint_text("Search conversations...")
                .desired_width(ui.available_width()),
        );

        ui.add_space(4.0);
        ui.label(
            RichText::new("Recent Chats")
                .color(TEXT_SECONDARY)
                .small()
                .strong(),
        );

        let bottom_height = 40.0;
        ScrollArea::vertical()
            .max_height(ui.available_height() - bottom_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Snapshot of (id, title, timestamp) so the rename editor can
                // mutate state while iterating.
                let rows: Vec<(String, String, String)> =
                    filter_conversations(store.iter(), &state.search_term)
                        .into_iter()
                        .map(|c| (c.id.clone(), c.title.clone(), c.timestamp.clone()))
                        .collect();

                for (id, title, timestamp) in rows {
                    let editing = state
                        .renaming
                        .as_ref()
                        .is_some_and(|r| r.conversation_id == id);

                    if editing {
                        if let Some(row_action) = render_rename_row(ui, state) {
                            action = Some(row_action);
                        }
                    } else if let Some(row_action) =
                        render_row(ui, store, state, &id, &title, &timestamp)
                    {
                        action = Some(row_action);
                    }
                }
            });

        ui.separator();
        if ui
            .add(egui::Button::new(
                RichText::new("Settings").color(TEXT_SECONDARY),
            ))
            .clicked()
        {
            action = Some(SidebarAction::OpenSettings);
        }
    });

    action
}

fn render_rename_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<SidebarAction> {
    let mut action = None;
    let mut done = false;

    if let Some(edit) = state.renaming.as_mut() {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut edit.title)
                    .desired_width(ui.available_width() - 56.0),
            );

            let submitted = response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.small_button("✔").clicked() || submitted {
                // Empty titles are discarded here, never sent to the store
                if let Some(title) = normalized_title(&edit.title) {
                    action = Some(SidebarAction::Rename(edit.conversation_id.clone(), title));
                }
                done = true;
            }
            if ui.small_button("✖").clicked() {
                done = true;
            }
        });
    }

    if done {
        state.cancel_rename();
    }
    action
}

fn render_row(
    ui: &mut egui::Ui,
    store: &ConversationStore,
    state: &mut UiState,
    id: &str,
    title: &str,
    timestamp: &str,
) -> Option<SidebarAction> {
    let mut action = None;
    let selected = store.active_id() == Some(id);

    egui::Frame::default()
        .fill(if selected { BG_SURFACE } else { BG_PRIMARY })
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let label = ui.add(
                    egui::Label::new(
                        RichText::new(title).color(TEXT_PRIMARY).strong(),
                    )
                    .truncate()
                    .sense(egui::Sense::click()),
                );
                if label.clicked() {
                    action = Some(SidebarAction::Select(id.to_string()));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                        action = Some(SidebarAction::Delete(id.to_string()));
                    }
                    if ui.small_button("⃠").on_hover_text("Clear messages").clicked() {
                        action = Some(SidebarAction::Clear(id.to_string()));
                    }
                    if ui.small_button("✏").on_hover_text("Rename").clicked() {
                        state.start_rename(id, title);
                    }
                });
            });
            ui.label(
                RichText::new(format_date(timestamp))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });

    action
}
