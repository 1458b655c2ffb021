//! Key event translation
//!
//! crossterm events become core [`KeyChord`]s. Chords the core keymap does not
//! claim are mapped to front-end [`Intent`]s here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use versevibe_core::keymap::{Key, KeyChord, Modifiers};
use versevibe_core::types::Panel;
use versevibe_core::workflow::Command;

/// Text editing operation on the manuscript buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// What a key press means to the front end
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Quit,
    Run(Command),
    DismissNewestToast,
    Edit(EditOp),
}

/// Translate a crossterm key event. Returns `None` for keys we never handle.
pub fn chord_from_key(event: &KeyEvent) -> Option<KeyChord> {
    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };

    let mods = event.modifiers;
    let modifiers = Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        // Shift is already folded into the character
        shift: mods.contains(KeyModifiers::SHIFT) && !matches!(key, Key::Char(_)),
        super_key: mods.contains(KeyModifiers::SUPER),
    };

    // Ctrl chords arrive lowercase or uppercase depending on the terminal
    let key = match key {
        Key::Char(c) if modifiers.ctrl => Key::Char(c.to_ascii_lowercase()),
        other => other,
    };

    Some(KeyChord::new(modifiers, key))
}

/// Front-end meaning of a chord while `panel` is shown
pub fn intent_for(chord: &KeyChord, panel: Panel) -> Option<Intent> {
    let m = chord.modifiers;

    if m == Modifiers::CTRL {
        return match chord.key {
            Key::Char('q') | Key::Char('c') => Some(Intent::Quit),
            Key::Char('l') => Some(Intent::Run(Command::Clear)),
            _ => None,
        };
    }

    if !m.is_empty() {
        return None;
    }

    match chord.key {
        Key::F(1) => return Some(Intent::Run(Command::ShowPanel(Panel::Analysis))),
        Key::F(2) => return Some(Intent::Run(Command::ShowPanel(Panel::History))),
        Key::F(3) => return Some(Intent::Run(Command::ToggleSettings)),
        Key::Escape => return Some(Intent::DismissNewestToast),
        _ => {}
    }

    if let Some(intent) = panel_intent(chord.key, panel) {
        return Some(intent);
    }

    let op = match chord.key {
        Key::Char(c) => EditOp::Insert(c),
        Key::Enter => EditOp::Newline,
        Key::Tab => EditOp::Insert('\t'),
        Key::Backspace => EditOp::Backspace,
        Key::Delete => EditOp::Delete,
        Key::Left => EditOp::Left,
        Key::Right => EditOp::Right,
        Key::Home => EditOp::Home,
        Key::End => EditOp::End,
        _ => return None,
    };
    Some(Intent::Edit(op))
}

/// Plain keys owned by the side panel
fn panel_intent(key: Key, panel: Panel) -> Option<Intent> {
    let command = match (panel, key) {
        (Panel::History, Key::Char(c @ '1'..='9')) => {
            let index = c.to_digit(10)? as usize - 1;
            Command::LoadHistory(index)
        }
        (Panel::Settings, Key::Char('+' | '=')) => Command::StepFontSize(1),
        (Panel::Settings, Key::Char('-')) => Command::StepFontSize(-1),
        (Panel::Settings, Key::Char('f')) => Command::ToggleFontFamily,
        (Panel::Settings, Key::Char('w')) => Command::ToggleWordWrap,
        (Panel::Settings, Key::Char('a')) => Command::ToggleAutoAnalyze,
        (Panel::Settings, Key::Char('m')) => Command::ToggleColorMode,
        _ => return None,
    };
    Some(Intent::Run(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_primary_enter_chords() {
        let ctrl = chord_from_key(&key(KeyCode::Enter, KeyModifiers::CONTROL)).unwrap();
        assert_eq!(ctrl, KeyChord::new(Modifiers::CTRL, Key::Enter));

        let cmd = chord_from_key(&key(KeyCode::Enter, KeyModifiers::SUPER)).unwrap();
        assert_eq!(cmd, KeyChord::new(Modifiers::SUPER, Key::Enter));
    }

    #[test]
    fn test_shift_is_folded_into_characters() {
        let chord = chord_from_key(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(chord, KeyChord::plain(Key::Char('A')));

        let chord = chord_from_key(&key(KeyCode::Char('L'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(chord, KeyChord::new(Modifiers::CTRL, Key::Char('l')));

        assert_eq!(chord_from_key(&key(KeyCode::Insert, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_global_bindings() {
        let ctrl = |c| KeyChord::new(Modifiers::CTRL, Key::Char(c));
        assert_eq!(intent_for(&ctrl('q'), Panel::Analysis), Some(Intent::Quit));
        assert_eq!(
            intent_for(&ctrl('l'), Panel::History),
            Some(Intent::Run(Command::Clear))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::F(2)), Panel::Analysis),
            Some(Intent::Run(Command::ShowPanel(Panel::History)))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::F(3)), Panel::Settings),
            Some(Intent::Run(Command::ToggleSettings))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Escape), Panel::Analysis),
            Some(Intent::DismissNewestToast)
        );
        assert_eq!(intent_for(&ctrl('x'), Panel::Analysis), None);
    }

    #[test]
    fn test_history_digits_load_entries() {
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Char('1')), Panel::History),
            Some(Intent::Run(Command::LoadHistory(0)))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Char('9')), Panel::History),
            Some(Intent::Run(Command::LoadHistory(8)))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Char('0')), Panel::History),
            Some(Intent::Edit(EditOp::Insert('0')))
        );
    }

    #[test]
    fn test_settings_keys() {
        let plain = |c| KeyChord::plain(Key::Char(c));
        assert_eq!(
            intent_for(&plain('+'), Panel::Settings),
            Some(Intent::Run(Command::StepFontSize(1)))
        );
        assert_eq!(
            intent_for(&plain('m'), Panel::Settings),
            Some(Intent::Run(Command::ToggleColorMode))
        );
        assert_eq!(
            intent_for(&plain('m'), Panel::Analysis),
            Some(Intent::Edit(EditOp::Insert('m')))
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Enter), Panel::Analysis),
            Some(Intent::Edit(EditOp::Newline))
        );
        assert_eq!(
            intent_for(&KeyChord::plain(Key::Backspace), Panel::Settings),
            Some(Intent::Edit(EditOp::Backspace))
        );
        assert_eq!(intent_for(&KeyChord::plain(Key::Up), Panel::Analysis), None);
    }
}
