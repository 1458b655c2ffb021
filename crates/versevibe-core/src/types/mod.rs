//! Core type definitions for VerseVibe
//!
//! Shared types used across the application: analysis results, history
//! entries, editor settings and panel selection.

mod analysis_types;
mod history_types;
mod settings_types;

pub use analysis_types::*;
pub use history_types::*;
pub use settings_types::*;

use serde::{Deserialize, Serialize};

/// Mutually exclusive side panel views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Analysis,
    History,
    Settings,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Analysis => "Sentiment Analysis",
            Self::History => "Recent Manuscripts",
            Self::Settings => "Editor Settings",
        }
    }
}
