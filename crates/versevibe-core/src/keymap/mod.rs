//! Keyboard shortcut bindings
//!
//! Bindings resolve to an [`Action`] only. Whoever owns the live state turns
//! the action into work, so a binding never captures state at registration.

use crate::error::KeymapError;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Modifier keys held with a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, the Windows key elsewhere
    pub super_key: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        super_key: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const SUPER: Self = Self {
        super_key: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    F(u8),
    Char(char),
}

/// A key together with its modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl KeyChord {
    pub const fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(Modifiers::NONE, key)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        if self.modifiers.super_key {
            f.write_str("Cmd+")?;
        }
        match self.key {
            Key::Enter => f.write_str("Enter"),
            Key::Escape => f.write_str("Esc"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Del"),
            Key::Tab => f.write_str("Tab"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::F(n) => write!(f, "F{}", n),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

/// Things a shortcut can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Analyze,
}

/// Chord to action table; a chord may be bound once
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<KeyChord, Action>,
}

impl Keymap {
    /// Empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the primary modifier + Enter to analyze, accepting both Ctrl and Cmd
    pub fn with_defaults() -> Self {
        let mut keymap = Self::new();
        for modifiers in [Modifiers::CTRL, Modifiers::SUPER] {
            if let Err(e) = keymap.bind(KeyChord::new(modifiers, Key::Enter), Action::Analyze) {
                warn!("Skipping default shortcut: {}", e);
            }
        }
        keymap
    }

    pub fn bind(&mut self, chord: KeyChord, action: Action) -> Result<(), KeymapError> {
        if self.bindings.contains_key(&chord) {
            return Err(KeymapError::AlreadyBound(chord.to_string()));
        }
        self.bindings.insert(chord, action);
        Ok(())
    }

    pub fn resolve(&self, chord: &KeyChord) -> Option<Action> {
        self.bindings.get(chord).copied()
    }

    /// Chords bound to an action, sorted for display
    pub fn chords_for(&self, action: Action) -> Vec<KeyChord> {
        let mut chords: Vec<KeyChord> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(chord, _)| *chord)
            .collect();
        chords.sort_by_key(|chord| chord.to_string());
        chords
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_primary_enter() {
        let keymap = Keymap::with_defaults();
        let ctrl_enter = KeyChord::new(Modifiers::CTRL, Key::Enter);
        let cmd_enter = KeyChord::new(Modifiers::SUPER, Key::Enter);

        assert_eq!(keymap.resolve(&ctrl_enter), Some(Action::Analyze));
        assert_eq!(keymap.resolve(&cmd_enter), Some(Action::Analyze));
        assert_eq!(keymap.resolve(&KeyChord::plain(Key::Enter)), None);
        assert_eq!(keymap.len(), 2);
    }

    #[test]
    fn test_chord_can_only_be_bound_once() {
        let mut keymap = Keymap::with_defaults();
        let err = keymap
            .bind(KeyChord::new(Modifiers::CTRL, Key::Enter), Action::Analyze)
            .unwrap_err();
        assert_eq!(err, KeymapError::AlreadyBound("Ctrl+Enter".to_string()));
        assert_eq!(keymap.len(), 2);
    }

    #[test]
    fn test_bind_new_chord() {
        let mut keymap = Keymap::new();
        assert!(keymap.is_empty());
        let chord = KeyChord::new(Modifiers::CTRL, Key::Char('r'));
        keymap.bind(chord, Action::Analyze).unwrap();
        assert_eq!(keymap.resolve(&chord), Some(Action::Analyze));
    }

    #[test]
    fn test_chord_display() {
        assert_eq!(KeyChord::new(Modifiers::SUPER, Key::Enter).to_string(), "Cmd+Enter");
        assert_eq!(KeyChord::plain(Key::F(2)).to_string(), "F2");
        let chords = Keymap::with_defaults().chords_for(Action::Analyze);
        assert_eq!(chords.len(), 2);
        assert_eq!(chords[0].to_string(), "Cmd+Enter");
    }
}
