//! VerseVibe Core Library
//!
//! This crate provides the core of the VerseVibe manuscript analyzer:
//! - Analysis and history clients for the remote analysis service
//! - Feedback parsing with a guaranteed fallback result
//! - Sentiment theme registry
//! - Toast notifications and keyboard shortcuts
//! - The workflow controller that owns all workspace state
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     versevibe-core                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  workflow/     - Controller, commands, workspace state      │
//! │  service/      - Backend trait, HTTP backend, clients       │
//! │  feedback.rs   - Embedded-object extraction and decoding    │
//! │  theme/        - Sentiment themes, color values             │
//! │  toast/        - Notification queue                         │
//! │  keymap/       - Key chords and actions                     │
//! │  stats.rs      - Word count and reading time                │
//! │  types/        - Shared type definitions                    │
//! │  config.rs     - Service configuration                      │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod feedback;
pub mod keymap;
pub mod service;
pub mod stats;
pub mod theme;
pub mod toast;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use config::ServiceConfig;
pub use feedback::{decode_feedback, extract_embedded_object, parse_analysis};
pub use keymap::{Action, Key, KeyChord, Keymap, Modifiers};
pub use service::{AnalysisBackend, AnalysisClient, HistoryClient, HistoryFetch, HttpBackend};
pub use theme::{theme_for, Rgba, Theme, DEFAULT_THEME};
pub use toast::{Severity, Toast, ToastId, ToastManager, TOAST_LIFETIME};
pub use workflow::{AppEvent, Command, WorkflowController, WorkspaceState};
