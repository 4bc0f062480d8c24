//! UI-level state that drives rendering.
//! The conversation data itself lives in the core store; this is only
//! what the panels need between frames (input buffers, open flags).

use kbchat_core::parser::{LINE_BREAK, PARAGRAPH_BREAK};
use kbchat_types::conversation::Conversation;
use kbchat_types::settings::Settings;

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Sidebar search box content
    pub search_term: String,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Draft edited by the settings panel; copied back on Save
    pub settings_draft: Settings,
    /// In-progress inline rename, if any
    pub renaming: Option<RenameEdit>,
}

/// Inline title edit in the sidebar
pub struct RenameEdit {
    pub conversation_id: String,
    pub title: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            search_term: String::new(),
            show_settings: false,
            settings_draft: Settings::default(),
            renaming: None,
        }
    }

    pub fn start_rename(&mut self, conversation_id: &str, current_title: &str) {
        self.renaming = Some(RenameEdit {
            conversation_id: conversation_id.to_string(),
            title: current_title.to_string(),
        });
    }

    pub fn cancel_rename(&mut self) {
        self.renaming = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring filter over conversation titles.
/// An empty search term matches everything.
pub fn filter_conversations<'a>(
    conversations: impl Iterator<Item = &'a Conversation>,
    term: &str,
) -> Vec<&'a Conversation> {
    let needle = term.to_lowercase();
    conversations
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .collect()
}

/// Validate an edited title: trimmed and non-empty, or rejected.
/// Empty edits are discarded by the caller, not by the store.
pub fn normalized_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split parsed display content back into paragraphs of lines for
/// layout. Inverse of the parser's marker substitution.
pub fn markup_lines(content: &str) -> Vec<Vec<String>> {
    content
        .split(PARAGRAPH_BREAK)
        .map(|para| para.split(LINE_BREAK).map(str::to_string).collect())
        .collect()
}

/// `0.876` → `"87.6% match"`
pub fn similarity_badge(similarity: f32) -> String {
    format!("{:.1}% match", similarity * 100.0)
}

/// RFC 3339 timestamp → `"Aug 23, 2026"`; empty on parse failure
pub fn format_date(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// RFC 3339 timestamp → `"2:30 PM"`; empty on parse failure
pub fn format_time(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
