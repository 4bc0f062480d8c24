//! Chat panel — the active conversation's message thread and input field.

use egui::{self, Color32, RichText, ScrollArea, Vec2};

use kbchat_types::conversation::Conversation;
use kbchat_types::message::{Message, MessageStatus, Role};

use crate::state::{format_time, markup_lines, similarity_badge, UiState};
use crate::theme::*;

/// User intent dispatched from the chat panel
pub enum ChatAction {
    /// Submit the trimmed input as a new question
    Submit(String),
    /// Start a conversation from the welcome screen
    NewChat,
}

/// Render the chat panel. Returns at most one action per frame.
pub fn chat_panel(
    ui: &mut egui::Ui,
    conversation: Option<&Conversation>,
    state: &mut UiState,
) -> Option<ChatAction> {
    let Some(conversation) = conversation else {
        return welcome_screen(ui);
    };

    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.heading(
                    RichText::new(&conversation.title)
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &conversation.messages {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask a question about your knowledge base...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let enter = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter && send_enabled) || send_btn.clicked() {
                        let text = state.input_text.trim().to_string();
                        action = Some(ChatAction::Submit(text));
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn welcome_screen(ui: &mut egui::Ui) -> Option<ChatAction> {
    let mut action = None;
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new("Welcome to the Knowledge Base Chat").color(TEXT_PRIMARY),
            );
            ui.label(
                RichText::new("Start a new conversation or select an existing one")
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(8.0);
            if ui
                .add(
                    egui::Button::new(RichText::new("Start New Chat").color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(140.0, 32.0)),
                )
                .clicked()
            {
                action = Some(ChatAction::NewChat);
            }
        });
    });
    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", ACCENT, BG_SECONDARY),
        Role::Assistant => ("Assistant", SUCCESS, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(status_glyph(message.status));
                ui.label(
                    RichText::new(format_time(&message.timestamp))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });

            render_content(ui, &message.content);

            if let Some(think) = &message.think {
                egui::CollapsingHeader::new(
                    RichText::new("Show Reasoning").color(ACCENT).small(),
                )
                .id_salt(("think", &message.id))
                .show(ui, |ui| {
                    egui::Frame::default()
                        .fill(THINK_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(think).color(TEXT_SECONDARY));
                        });
                });
            }

            if !message.sources.is_empty() {
                egui::CollapsingHeader::new(
                    RichText::new(format!("Sources ({})", message.sources.len()))
                        .color(ACCENT)
                        .small(),
                )
                .id_salt(("sources", &message.id))
                .show(ui, |ui| {
                    for source in &message.sources {
                        render_source(ui, source);
                        ui.add_space(2.0);
                    }
                });
            }
        });
}

/// Lay parsed display content back out as paragraphs of lines
fn render_content(ui: &mut egui::Ui, content: &str) {
    for (i, paragraph) in markup_lines(content).iter().enumerate() {
        if i > 0 {
            ui.add_space(6.0);
        }
        for line in paragraph {
            ui.label(RichText::new(line).color(TEXT_PRIMARY));
        }
    }
}

fn render_source(ui: &mut egui::Ui, source: &kbchat_types::message::Source) {
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&source.title)
                        .color(TEXT_PRIMARY)
                        .strong()
                        .small(),
                );
                egui::Frame::default()
                    .fill(SOURCE_BADGE_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(Vec2::new(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(similarity_badge(source.similarity))
                                .color(SUCCESS)
                                .small(),
                        );
                    });
            });
            ui.label(RichText::new(&source.content).color(TEXT_SECONDARY).small());
        });
}

fn status_glyph(status: MessageStatus) -> RichText {
    match status {
        MessageStatus::Sending => RichText::new("⏳").color(Color32::GRAY).small(),
        MessageStatus::Sent => RichText::new("✔").color(SUCCESS).small(),
        MessageStatus::Error => RichText::new("✖").color(ERROR).small(),
    }
}
