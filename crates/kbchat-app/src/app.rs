//! Main egui application — composes all panels around the shared store.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use kbchat_core::controller::SendController;
use kbchat_core::store::ConversationStore;
use kbchat_platform::http::{AskHttpClient, DEFAULT_BASE_URL};
use kbchat_types::settings::Settings;
use kbchat_ui::panels::{chat, settings, sidebar};
use kbchat_ui::state::UiState;
use kbchat_ui::theme;

/// The main application state
pub struct KbChatApp {
    store: Rc<RefCell<ConversationStore>>,
    controller: Rc<SendController>,
    backend: Rc<AskHttpClient>,
    settings: Settings,
    ui_state: UiState,
    first_frame: bool,
}

impl KbChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = Rc::new(RefCell::new(ConversationStore::new()));
        let controller = Rc::new(SendController::new(store.clone()));
        let backend = Rc::new(AskHttpClient::new(DEFAULT_BASE_URL));

        Self {
            store,
            controller,
            backend,
            settings: Settings::default(),
            ui_state: UiState::new(),
            first_frame: true,
        }
    }

    /// Dispatch one send cycle without blocking the UI thread.
    /// The target conversation id is captured now, so switching
    /// conversations while the reply is pending cannot misdirect it.
    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let Some(conversation_id) = self.store.borrow().active_id().map(str::to_string) else {
            return;
        };
        let controller = self.controller.clone();
        let backend = self.backend.clone();
        let settings = self.settings.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            controller
                .send(&conversation_id, &text, &settings, backend.as_ref())
                .await;
            ctx.request_repaint();
        });
    }

    fn apply_sidebar_action(&mut self, action: sidebar::SidebarAction) {
        use sidebar::SidebarAction::*;
        match action {
            NewChat => {
                self.store.borrow_mut().create_conversation();
            }
            Select(id) => self.store.borrow_mut().select_conversation(&id),
            Delete(id) => self.store.borrow_mut().delete_conversation(&id),
            Rename(id, title) => self.store.borrow_mut().rename_conversation(&id, title),
            Clear(id) => self.store.borrow_mut().clear_conversation(&id),
            OpenSettings => {
                self.ui_state.settings_draft = self.settings.clone();
                self.ui_state.show_settings = true;
            }
        }
    }
}

impl eframe::App for KbChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Knowledge Base Chat")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Model: {}", self.settings.model.label()))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            });
        });

        // ── Sidebar ──────────────────────────────────────────
        let sidebar_action = SidePanel::left("sidebar")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                let store = self.store.borrow();
                sidebar::sidebar_panel(ui, &store, &mut self.ui_state)
            })
            .inner;
        if let Some(action) = sidebar_action {
            self.apply_sidebar_action(action);
        }

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.ui_state.settings_draft) {
                        settings::SettingsAction::Save(new_settings) => {
                            self.settings = new_settings;
                            self.ui_state.show_settings = false;
                        }
                        settings::SettingsAction::Cancel => {
                            self.ui_state.show_settings = false;
                        }
                        settings::SettingsAction::None => {}
                    }
                });
        }

        // ── Message thread ───────────────────────────────────
        let chat_action = CentralPanel::default()
            .show(ctx, |ui| {
                let store = self.store.borrow();
                chat::chat_panel(ui, store.active(), &mut self.ui_state)
            })
            .inner;
        match chat_action {
            Some(chat::ChatAction::Submit(text)) => self.dispatch_send(text, ctx),
            Some(chat::ChatAction::NewChat) => {
                self.store.borrow_mut().create_conversation();
            }
            None => {}
        }
    }
}
