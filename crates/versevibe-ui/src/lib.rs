//! VerseVibe terminal front end
//!
//! Owns the terminal and the event loop; all workspace state lives in the
//! core `WorkflowController`.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ VerseVibe  AI-Powered Manuscript Analysis        [ Joyful ]  │
//! ├─────────────────────────────────────┬────────────────────────┤
//! │ Manuscript                          │ Analysis / History /   │
//! │                                     │ Settings panel         │
//! │                                     │                        │
//! ├─────────────────────────────────────┴────────────────────────┤
//! │ words · chars · reading time                 key hints       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod editor;
pub mod input;
pub mod panels;
pub mod terminal;
pub mod theme;
pub mod views;

// Re-exports
pub use app::App;
pub use editor::EditorBuffer;
pub use input::{chord_from_key, intent_for, EditOp, Intent};
pub use terminal::TerminalGuard;
pub use theme::{Palette, UiTheme};
