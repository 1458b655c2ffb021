//! Workflow controller
//!
//! User intent arrives as [`Command`]s and is applied synchronously. Network
//! calls run in spawned tasks that always report back with an [`AppEvent`],
//! so every state change happens on the owner of the controller.

use super::WorkspaceState;
use crate::error::{AnalysisError, HistoryError};
use crate::feedback::decode_feedback;
use crate::keymap::{Action, KeyChord, Keymap};
use crate::service::{AnalysisBackend, AnalysisClient, HistoryClient, HistoryFetch};
use crate::toast::{Severity, ToastId, ToastManager, TOAST_LIFETIME};
use crate::types::{AnalysisResult, Panel};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Toast shown when a history entry is opened
pub const MANUSCRIPT_LOADED_MESSAGE: &str = "Manuscript loaded ✨";
/// Toast shown when an analysis yields no sentiment label
pub const ANALYSIS_COMPLETE_MESSAGE: &str = "Analysis complete!";

// ============================================================================
// Commands and events
// ============================================================================

/// Something the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze,
    /// Open the entry at this index of the displayed history list
    LoadHistory(usize),
    Clear,
    ShowPanel(Panel),
    /// Settings <-> analysis
    ToggleSettings,
    SetText(String),
    DismissToast(ToastId),
    StepFontSize(i32),
    ToggleFontFamily,
    ToggleWordWrap,
    ToggleAutoAnalyze,
    ToggleColorMode,
}

/// Completion of background work
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    AnalysisFinished(Result<AnalysisResult, AnalysisError>),
    HistoryLoaded { seq: u64, fetch: HistoryFetch },
    ToastExpired(ToastId),
}

// ============================================================================
// Controller
// ============================================================================

pub struct WorkflowController {
    state: WorkspaceState,
    toasts: ToastManager,
    keymap: Keymap,
    analysis: AnalysisClient,
    history: HistoryClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sequence number of the most recently issued history fetch
    history_seq: u64,
}

impl WorkflowController {
    /// Create a controller. The keymap is built here, once.
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: WorkspaceState::new(),
            toasts: ToastManager::new(),
            keymap: Keymap::with_defaults(),
            analysis: AnalysisClient::new(Arc::clone(&backend)),
            history: HistoryClient::new(backend),
            events_tx,
            events_rx,
            history_seq: 0,
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Apply a user command against the current state
    pub fn dispatch(&mut self, command: Command) {
        debug!("Dispatch {:?}", command);
        match command {
            Command::Analyze => self.analyze(),
            Command::LoadHistory(index) => self.load_history(index),
            Command::Clear => self.state.clear(),
            Command::ShowPanel(panel) => self.show_panel(panel),
            Command::ToggleSettings => {
                let next = if self.state.panel() == Panel::Settings {
                    Panel::Analysis
                } else {
                    Panel::Settings
                };
                self.show_panel(next);
            }
            Command::SetText(text) => self.state.set_text(text),
            Command::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            Command::StepFontSize(steps) => self.state.settings.step_font_size(steps),
            Command::ToggleFontFamily => {
                self.state.settings.font_family = self.state.settings.font_family.toggled();
            }
            Command::ToggleWordWrap => {
                self.state.settings.word_wrap = !self.state.settings.word_wrap;
            }
            Command::ToggleAutoAnalyze => {
                self.state.settings.auto_analyze = !self.state.settings.auto_analyze;
            }
            Command::ToggleColorMode => {
                self.state.settings.color_mode = self.state.settings.color_mode.toggled();
            }
        }
    }

    /// Run the shortcut bound to `chord`, if any. Returns whether it was bound.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        match self.keymap.resolve(chord) {
            Some(Action::Analyze) => {
                self.dispatch(Command::Analyze);
                true
            }
            None => false,
        }
    }

    /// Apply a completion event
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished(outcome) => self.finish_analysis(outcome),
            AppEvent::HistoryLoaded { seq, fetch } => self.finish_history(seq, fetch),
            AppEvent::ToastExpired(id) => {
                if self.toasts.expire(id) {
                    debug!("{} expired", id);
                }
            }
        }
    }

    /// Wait for the next completion event
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Apply every event that is already waiting. Returns how many were applied.
    pub fn try_pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Drop toasts whose lifetime has run out without waiting for their
    /// expiry events. Returns how many were removed.
    pub fn sweep_toasts(&mut self) -> usize {
        self.toasts.sweep(tokio::time::Instant::now().into_std())
    }

    /// Show a toast and schedule its expiry
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        let now = tokio::time::Instant::now();
        let id = self.toasts.push_at(message, severity, now.into_std());

        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(now + TOAST_LIFETIME).await;
            let _ = tx.send(AppEvent::ToastExpired(id));
        });
        id
    }

    // ------------------------------------------------------------------------
    // Analyze
    // ------------------------------------------------------------------------

    fn analyze(&mut self) {
        if self.state.loading() {
            debug!("Analysis already in flight, ignoring");
            return;
        }
        if self.state.text().trim().is_empty() {
            self.notify(AnalysisError::EmptyManuscript.user_message(), Severity::Error);
            return;
        }

        self.state.set_loading(true);
        let client = self.analysis.clone();
        let text = self.state.text().to_string();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = AssertUnwindSafe(client.analyze(&text))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    error!("Analysis task panicked");
                    Err(AnalysisError::Aborted)
                });
            let _ = tx.send(AppEvent::AnalysisFinished(outcome));
        });
    }

    fn finish_analysis(&mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.state.set_loading(false);
        match outcome {
            Ok(result) => {
                let message = match result.sentiment_label() {
                    Some(label) => format!("Mood detected: {} ✨", label),
                    None => ANALYSIS_COMPLETE_MESSAGE.to_string(),
                };
                info!("Analysis finished: {}", message);
                self.state.set_result(result);
                self.notify(message, Severity::Success);
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                self.notify(e.user_message(), Severity::Error);
            }
        }
    }

    // ------------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------------

    fn show_panel(&mut self, panel: Panel) {
        self.state.set_panel(panel);
        if panel == Panel::History {
            self.fetch_history();
        }
    }

    fn fetch_history(&mut self) {
        self.history_seq += 1;
        let seq = self.history_seq;
        self.state.set_history_loading(true);

        let client = self.history.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let fetch = AssertUnwindSafe(client.fetch())
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    error!("History task panicked");
                    HistoryFetch {
                        entries: Vec::new(),
                        error: Some(HistoryError::Aborted),
                    }
                });
            let _ = tx.send(AppEvent::HistoryLoaded { seq, fetch });
        });
    }

    fn finish_history(&mut self, seq: u64, fetch: HistoryFetch) {
        if seq < self.history_seq {
            debug!("Dropping stale history response {} (latest {})", seq, self.history_seq);
            return;
        }

        self.state.set_history_loading(false);
        self.state.set_history(fetch.entries);
        if let Some(e) = fetch.error {
            self.notify(e.user_message(), Severity::Error);
        }
    }

    fn load_history(&mut self, index: usize) {
        // The displayed list is being replaced; its indices are stale.
        if self.state.history_loading() {
            debug!("History refresh in flight, ignoring load of {}", index);
            return;
        }
        let Some(entry) = self.state.history().get(index).cloned() else {
            debug!("No history entry at {}", index);
            return;
        };

        info!("Loading manuscript {} from history", entry.id);
        self.state.set_panel(Panel::Analysis);
        self.state.set_text(entry.content);
        // Unparsable stored feedback keeps whatever is displayed now.
        if let Some(result) = entry.feedback.as_deref().and_then(decode_feedback) {
            self.state.set_result(result);
        }
        self.notify(MANUSCRIPT_LOADED_MESSAGE, Severity::Success);
    }
}
