//! Authoritative workspace state
//!
//! Readable by anyone, writable only by the controller.

use crate::theme::{theme_for, Theme, DEFAULT_THEME};
use crate::types::{AnalysisResult, EditorSettings, HistoryEntry, Panel};

#[derive(Debug, Clone)]
pub struct WorkspaceState {
    text: String,
    result: Option<AnalysisResult>,
    theme: &'static Theme,
    previous_theme: &'static Theme,
    panel: Panel,
    loading: bool,
    history: Vec<HistoryEntry>,
    history_loading: bool,
    pub(crate) settings: EditorSettings,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            result: None,
            theme: &DEFAULT_THEME,
            previous_theme: &DEFAULT_THEME,
            panel: Panel::default(),
            loading: false,
            history: Vec::new(),
            history_loading: false,
            settings: EditorSettings::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Theme that was active before the last change
    pub fn previous_theme(&self) -> &'static Theme {
        self.previous_theme
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// True while an analysis request is outstanding
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_loading(&self) -> bool {
        self.history_loading
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Replace the result wholesale and derive the theme from it
    pub(crate) fn set_result(&mut self, result: AnalysisResult) {
        let theme = theme_for(result.sentiment.as_deref().unwrap_or_default());
        self.result = Some(result);
        self.set_theme(theme);
    }

    /// Empty text, no result, default theme, in one step
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.result = None;
        self.set_theme(&DEFAULT_THEME);
    }

    pub(crate) fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_history_loading(&mut self, loading: bool) {
        self.history_loading = loading;
    }

    pub(crate) fn set_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = entries;
    }

    fn set_theme(&mut self, theme: &'static Theme) {
        if !std::ptr::eq(theme, self.theme) {
            self.previous_theme = self.theme;
            self.theme = theme;
        }
    }
}
